use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use playlist_scraping::youtube::{
    keys::{assign_keys, compare_keys},
    parser::playlist,
};
use playlist_scraping_utils::fs_text_util::read_to_string_lossy;

#[derive(Parser)]
struct Opts {
    input_file: PathBuf,
    /// List entries in key order (`1v`, `2v`, ...) instead of document order.
    #[arg(long)]
    sort_by_key: bool,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let entries = playlist::parse(&read_to_string_lossy(opts.input_file)?);
    println!("{} entries", entries.len());
    let mut keyed = assign_keys(&entries).collect_vec();
    if opts.sort_by_key {
        keyed.sort_by(|x, y| compare_keys(x.key.as_ref(), y.key.as_ref()));
    }
    for entry in keyed {
        println!("  {:>6} {:?}", entry.key.to_string(), entry);
    }
    Ok(())
}
