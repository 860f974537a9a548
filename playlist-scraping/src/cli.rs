use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};

/// Prints the title anchors of a saved playlist page as `"title" => 'key' : 'video id',` lines.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Opts {
    /// Saved HTML page of the playlist.
    pub input_file: PathBuf,
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} input.html")
}

pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}

/// Whether `error` stands for a wrong invocation rather than a help or version request.
pub fn is_usage_error(error: &clap::Error) -> bool {
    !matches!(
        error.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}
