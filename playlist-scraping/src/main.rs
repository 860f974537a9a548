use std::io::{self, BufWriter, Write};

use clap::Parser;
use log::info;
use playlist_scraping::{
    cli::{is_usage_error, program_name, usage, Opts},
    youtube::{emit::write_entries, parser::playlist},
};
use playlist_scraping_utils::fs_text_util::read_to_string_lossy;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) if is_usage_error(&e) => {
            eprintln!("{}", usage(&program_name()));
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let html = read_to_string_lossy(&opts.input_file)?;
    let entries = playlist::parse(&html);
    info!("Found {} entries in {:?}", entries.len(), opts.input_file);

    let mut out = BufWriter::new(io::stdout().lock());
    write_entries(&mut out, &entries)?;
    out.flush()?;

    Ok(())
}
