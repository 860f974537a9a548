use std::io::{self, Write};

use crate::youtube::{
    keys::assign_keys,
    schema::{Entry, KeyedEntry},
};

/// `"<title>" => '<key>' : '<video id>',` with `"` in the title escaped as `\"`.
pub fn format_line(entry: &KeyedEntry) -> String {
    let title: &str = entry.title.as_ref();
    format!(
        "\"{}\" => '{}' : '{}',",
        title.replace('"', "\\\""),
        entry.key,
        entry.video_id
    )
}

pub fn write_entries<W: Write>(mut out: W, entries: &[Entry]) -> io::Result<()> {
    for entry in assign_keys(entries) {
        writeln!(out, "{}", format_line(&entry))?;
    }
    Ok(())
}
