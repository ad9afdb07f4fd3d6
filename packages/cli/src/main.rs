mod commands;
mod config;
mod defaults;
mod sink;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{extract, init, sync, titles, ExtractArgs, InitArgs, SyncArgs, TitlesArgs};
use tracing::Level;

/// Clippings - pull highlights and notes out of an e-reader's My Clippings.txt
#[derive(Parser, Debug)]
#[command(name = "clippings")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print clippings for a title, starting from a date
    Extract(ExtractArgs),

    /// List titles with their clipping counts
    Titles(TitlesArgs),

    /// Copy the export file from the connected device
    Sync(SyncArgs),

    /// Write a clippings.config.json in the current directory
    Init(InitArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Extract(args) => extract(args, &cwd),
        Command::Titles(args) => titles(args, &cwd),
        Command::Sync(args) => sync(args, &cwd),
        Command::Init(args) => init(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
