use super::{load_index, NOT_CONNECTED};
use crate::config::{resolve, Config};
use anyhow::Result;
use clap::Args;
use clippings_parser::TitleIndex;
use colored::Colorize;
use std::io::{self, Write};

#[derive(Debug, Args)]
pub struct TitlesArgs {
    /// Clippings file to read (overrides config)
    #[arg(short, long)]
    pub file: Option<String>,
}

pub fn titles(args: TitlesArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let clippings_file = match &args.file {
        Some(file) => resolve(cwd, file),
        None => config.get_clippings_file(cwd),
    };

    if !clippings_file.exists() {
        println!("{}", NOT_CONNECTED.yellow());
        return Ok(());
    }

    let index = load_index(&clippings_file)?;
    let stdout = io::stdout();
    write_titles(&index, stdout.lock())
}

/// One line per title, in the order titles first appear in the file
fn write_titles<W: Write>(index: &TitleIndex, mut out: W) -> Result<()> {
    for title in index.titles() {
        writeln!(out, "{:>5}  {}", index.get(title).len(), title)?;
    }
    out.flush()?;
    Ok(())
}
