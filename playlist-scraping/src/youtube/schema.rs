use std::str::FromStr;

use derive_more::{AsRef, Display};
use itertools::Itertools;
use thiserror::Error;

pub const VIDEO_ID_LEN: usize = 11;

/// An 11-character video identifier drawn from `[A-Za-z0-9_-]`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display, AsRef)]
#[as_ref(forward)]
pub struct VideoId(String);

#[derive(PartialEq, Eq, Debug, Error)]
pub enum VideoIdParseError {
    #[error("Video id must consist of 11 characters, found {0}")]
    InvalidLength(usize),
    #[error("Video id contains an invalid character: {0:?}")]
    InvalidCharacter(char),
}

impl FromStr for VideoId {
    type Err = VideoIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = s
            .chars()
            .find(|&c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        {
            return Err(VideoIdParseError::InvalidCharacter(c));
        }
        if s.len() != VIDEO_ID_LEN {
            return Err(VideoIdParseError::InvalidLength(s.len()));
        }
        Ok(Self(s.to_owned()))
    }
}

/// Anchor text with every whitespace run collapsed to a single space and both ends trimmed.
/// Never empty.
#[derive(Clone, PartialEq, Eq, Debug, Display, AsRef)]
#[as_ref(forward)]
pub struct Title(String);

impl Title {
    pub fn normalize(raw: &str) -> Option<Self> {
        // Unicode White_Space; the ASCII separators U+001C..U+001F are kept as text.
        let title = raw.split_whitespace().join(" ");
        (!title.is_empty()).then_some(Self(title))
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Entry {
    pub video_id: VideoId,
    pub title: Title,
}

/// `<digits>v`, unique within a single run.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Display, AsRef)]
#[as_ref(forward)]
pub struct Key(String);

impl Key {
    pub fn from_number(digits: &str) -> Self {
        Self(format!("{digits}v"))
    }
    pub fn from_position(position: usize) -> Self {
        Self(format!("{position}v"))
    }
}

#[derive(Debug)]
pub struct KeyedEntry<'a> {
    pub key: Key,
    pub video_id: &'a VideoId,
    pub title: &'a Title,
}

#[cfg(test)]
mod tests {
    use super::{Key, Title, VideoId, VideoIdParseError};

    #[test]
    fn test_video_id() {
        let id: VideoId = "abcdEFGH1_-".parse().unwrap();
        assert_eq!(id.to_string(), "abcdEFGH1_-");
        assert_eq!(
            "short".parse::<VideoId>(),
            Err(VideoIdParseError::InvalidLength(5))
        );
        assert_eq!(
            "abcdEFGH1234".parse::<VideoId>(),
            Err(VideoIdParseError::InvalidLength(12))
        );
        assert_eq!(
            "abcdEFGH12!".parse::<VideoId>(),
            Err(VideoIdParseError::InvalidCharacter('!'))
        );
        assert_eq!(
            "abcdEFGH12é".parse::<VideoId>(),
            Err(VideoIdParseError::InvalidCharacter('é'))
        );
    }

    #[test]
    fn test_title_normalize() {
        assert_eq!(
            Title::normalize("  Foo\n\tBar  ").unwrap().to_string(),
            "Foo Bar"
        );
        assert_eq!(
            Title::normalize("12 -\u{3000}My   Video").unwrap().to_string(),
            "12 - My Video"
        );
        assert_eq!(
            Title::normalize(" A\u{1c}B ").unwrap().to_string(),
            "A\u{1c}B"
        );
        assert!(Title::normalize("").is_none());
        assert!(Title::normalize(" \n\t ").is_none());
    }

    #[test]
    fn test_key() {
        assert_eq!(Key::from_number("007").to_string(), "007v");
        assert_eq!(Key::from_position(3).to_string(), "3v");
        assert_eq!(Key::from_number("3"), Key::from_position(3));
    }
}
