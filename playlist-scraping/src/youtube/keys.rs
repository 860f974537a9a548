use std::{cmp::Ordering, collections::HashSet};

use log::debug;
use playlist_scraping_utils::regex;

use crate::youtube::schema::{Entry, Key, KeyedEntry, Title};

/// Hands out keys for one run, remembering every key already used.
#[derive(Default)]
pub struct KeyAssigner {
    used: HashSet<Key>,
}

impl KeyAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// `position` is 1-based.
    ///
    /// The key comes from the leading number of the title (`"12 - Foo"` gives `12v`),
    /// or from the position if there is none or that key is taken.
    pub fn assign(&mut self, position: usize, title: &Title) -> Key {
        let key = match leading_number(title.as_ref()) {
            Some(digits) => Key::from_number(digits),
            None => Key::from_position(position),
        };
        let key = if self.used.contains(&key) {
            debug!("Key {key} is already used; falling back to the position {position}");
            self.first_free_from(position)
        } else {
            key
        };
        self.used.insert(key.clone());
        key
    }

    // A numbered title earlier in the run may already own `<position>v`.
    fn first_free_from(&self, mut position: usize) -> Key {
        loop {
            let key = Key::from_position(position);
            if !self.used.contains(&key) {
                return key;
            }
            position += 1;
        }
    }
}

/// Digits of a `^\s*(\d+)\s*-` prefix, leading zeros kept.
pub fn leading_number(title: &str) -> Option<&str> {
    Some(regex!(r"^\s*(\d+)\s*-").captures(title)?.get(1)?.as_str())
}

pub fn assign_keys(entries: &[Entry]) -> impl Iterator<Item = KeyedEntry<'_>> {
    let mut assigner = KeyAssigner::new();
    (1..).zip(entries).map(move |(position, entry)| KeyedEntry {
        key: assigner.assign(position, &entry.title),
        video_id: &entry.video_id,
        title: &entry.title,
    })
}

/// Order in which keyed material is listed: `1`, `1v`, `2`, `2v`, ..., then any other key.
/// Numbers compare by value, so `007v` and `7v` are equal.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    fn split(key: &str) -> Option<(&str, bool)> {
        let captures = regex!(r"^([0-9]+)(v)?$").captures(key)?;
        Some((captures.get(1)?.as_str(), captures.get(2).is_some()))
    }
    match (split(a), split(b)) {
        (Some((a_digits, a_v)), Some((b_digits, b_v))) => {
            compare_digits(a_digits, b_digits).then(a_v.cmp(&b_v))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
