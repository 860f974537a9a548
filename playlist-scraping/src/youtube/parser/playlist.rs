use std::collections::HashSet;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    states::RawKind, BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer,
    TokenizerOpts, TokenizerResult,
};
use log::debug;
use playlist_scraping_utils::regex;

use crate::youtube::schema::{Entry, Title, VideoId};

pub const TITLE_ANCHOR_ID: &str = "video-title";

/// Extracts `(video id, title)` pairs from the title anchors of a saved playlist page,
/// in document order, keeping only the first anchor for each video id.
pub fn parse(html: &str) -> Vec<Entry> {
    let mut tokenizer = Tokenizer::new(Scanner::default(), TokenizerOpts::default());
    let mut input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    let result = tokenizer.feed(&mut input);
    debug_assert!(matches!(result, TokenizerResult::Done));
    tokenizer.end();
    std::mem::take(&mut tokenizer.sink).finish()
}

#[derive(Default)]
struct Scanner {
    state: ScannerState,
    seen: HashSet<VideoId>,
    entries: Vec<Entry>,
}

#[derive(Default)]
enum ScannerState {
    #[default]
    Idle,
    InTargetAnchor(AnchorCandidate),
}

struct AnchorCandidate {
    video_id: VideoId,
    text: String,
}

impl Scanner {
    fn start_tag(&mut self, tag: &Tag) {
        if &*tag.name != "a" {
            return;
        }
        let Some(video_id) = qualifying_video_id(tag) else {
            return;
        };
        // Nesting is not tracked: a second title anchor opened before `</a>` takes over.
        if let ScannerState::InTargetAnchor(previous) = &self.state {
            debug!(
                "Anchor for {} discarded: {} opened before it was closed",
                previous.video_id, video_id
            );
        }
        self.state = ScannerState::InTargetAnchor(AnchorCandidate {
            video_id,
            text: String::new(),
        });
    }

    fn text(&mut self, text: &str) {
        if let ScannerState::InTargetAnchor(candidate) = &mut self.state {
            candidate.text.push_str(text);
        }
    }

    fn end_tag(&mut self, tag: &Tag) {
        if &*tag.name != "a" {
            return;
        }
        let ScannerState::InTargetAnchor(AnchorCandidate { video_id, text }) =
            std::mem::take(&mut self.state)
        else {
            return;
        };
        let Some(title) = Title::normalize(&text) else {
            debug!("Anchor for {video_id} dropped: empty title");
            return;
        };
        if !self.seen.insert(video_id.clone()) {
            debug!("Anchor for {video_id} dropped: already seen ({title:?})");
            return;
        }
        self.entries.push(Entry { video_id, title });
    }

    fn finish(self) -> Vec<Entry> {
        if let ScannerState::InTargetAnchor(candidate) = &self.state {
            debug!(
                "Anchor for {} dropped: not closed before end of input",
                candidate.video_id
            );
        }
        self.entries
    }
}

impl TokenSink for Scanner {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag if tag.self_closing => {
                    self.start_tag(&tag);
                    self.end_tag(&tag);
                }
                TagKind::StartTag => {
                    self.start_tag(&tag);
                    // Script and style bodies are plain text up to their own end tag.
                    if matches!(&*tag.name, "script" | "style") {
                        return TokenSinkResult::RawData(RawKind::Rawtext);
                    }
                }
                TagKind::EndTag => self.end_tag(&tag),
            },
            Token::CharacterTokens(text) => self.text(&text),
            Token::NullCharacterToken => self.text("\0"),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Attribute names arrive lowercased from the tokenizer; values are compared as-is.
/// A repeated attribute never reaches here: the tokenizer keeps only its first occurrence.
fn attr<'a>(tag: &'a Tag, name: &str) -> Option<&'a str> {
    tag.attrs
        .iter()
        .find(|attr| (&*attr.name.local).eq_ignore_ascii_case(name))
        .map(|attr| &*attr.value)
}

fn qualifying_video_id(tag: &Tag) -> Option<VideoId> {
    if attr(tag, "id")? != TITLE_ANCHOR_ID {
        return None;
    }
    let href = attr(tag, "href").filter(|href| !href.is_empty())?;
    let video_id = video_id_from_href(href);
    if video_id.is_none() {
        debug!("Title anchor without a video id: href={href:?}");
    }
    video_id
}

pub fn video_id_from_href(href: &str) -> Option<VideoId> {
    regex!(r"[?&]v=([A-Za-z0-9_-]{11})").captures(href)?[1]
        .parse()
        .ok()
}
