use std::{fmt::Debug, path::PathBuf};

use anyhow::Context;

/// Reads the whole file as UTF-8 text.
/// Invalid byte sequences are dropped instead of failing the read.
pub fn read_to_string_lossy<P: Into<PathBuf> + Debug>(path: P) -> anyhow::Result<String> {
    let path = path.into();
    let bytes = fs_err::read(&path).with_context(|| format!("While trying to read {path:?}"))?;
    Ok(decode_lossy(&bytes))
}

pub fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
