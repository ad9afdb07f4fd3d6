use super::{load_index, NOT_CONNECTED};
use crate::config::{resolve, Config};
use crate::defaults::Defaults;
use crate::sink::{system_clipboard, Clipboard, ClippingSink, OutputFormat};
use anyhow::{anyhow, Result};
use clap::Args;
use clippings_parser::{added_after, parse_cutoff};
use colored::Colorize;
use std::io::{self, Write};
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Title of book/document (defaults to the last extracted title)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Only clippings added after this date, e.g. 2018-01-08
    #[arg(short, long)]
    pub date: Option<String>,

    /// Clippings file to read (overrides config)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Print clippings as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Don't copy the clippings to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,
}

pub fn extract(args: ExtractArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let clipboard = if config.copy_to_clipboard && !args.no_clipboard {
        match system_clipboard() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                warn!("{}", err);
                None
            }
        }
    } else {
        None
    };

    let stdout = io::stdout();
    extract_to(args, cwd, &config, stdout.lock(), clipboard).map(|_| ())
}

/// Write the selected clippings to `out` and return how many were written.
pub fn extract_to<W: Write>(
    args: ExtractArgs,
    cwd: &str,
    config: &Config,
    out: W,
    clipboard: Option<Box<dyn Clipboard>>,
) -> Result<usize> {
    let defaults_path = config.get_defaults_file(cwd);
    let mut defaults = Defaults::load(&defaults_path)?;

    let title = args
        .title
        .or_else(|| defaults.title.clone())
        .ok_or_else(|| anyhow!("No title given and none remembered from a previous run; use --title"))?;

    let cutoff = match args.date.as_deref() {
        Some(raw) => Some(parse_cutoff(raw).ok_or_else(|| anyhow!("Unrecognized date: {}", raw))?),
        None => None,
    };

    let clippings_file = match &args.file {
        Some(file) => resolve(cwd, file),
        None => config.get_clippings_file(cwd),
    };
    if !clippings_file.exists() {
        eprintln!("{}", NOT_CONNECTED.yellow());
        return Ok(0);
    }

    let index = load_index(&clippings_file)?;
    let group = index.get(&title);
    if group.is_empty() {
        warn!("No clippings found for {:?}", title);
    }
    debug!("Cutoff: {:?}", cutoff);

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut sink = ClippingSink::new(out, format);
    if let Some(clipboard) = clipboard {
        sink = sink.with_clipboard(clipboard);
    }

    for clipping in added_after(group, cutoff) {
        sink.write(clipping)?;
    }
    let count = sink.finish()?;

    eprintln!(
        "{} {} clipping(s) from {}",
        "✓".green(),
        count,
        title.bold()
    );

    defaults.title = Some(title);
    defaults.save(&defaults_path)?;

    Ok(count)
}
