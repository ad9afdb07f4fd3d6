use super::NOT_CONNECTED;
use crate::config::{resolve, Config};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Export file on the device (overrides config)
    #[arg(long)]
    pub from: Option<String>,

    /// Working copy to write (overrides config)
    #[arg(long)]
    pub to: Option<String>,
}

pub fn sync(args: SyncArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let from = match &args.from {
        Some(path) => resolve(cwd, path),
        None => config.get_device_path(cwd),
    };
    let to = match &args.to {
        Some(path) => resolve(cwd, path),
        None => config.get_clippings_file(cwd),
    };

    match copy_export(&from, &to)? {
        Some(bytes) => println!(
            "  {} {} → {} ({} bytes)",
            "✓".green(),
            from.display(),
            to.display(),
            bytes
        ),
        None => println!("{}", NOT_CONNECTED.yellow()),
    }

    Ok(())
}

/// Copy the device export to the working copy.
///
/// Returns `None` when the device file is missing.
fn copy_export(from: &Path, to: &Path) -> Result<Option<u64>> {
    if !from.exists() {
        return Ok(None);
    }

    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    let bytes = fs::copy(from, to)?;
    info!("Copied {} bytes from {}", bytes, from.display());

    Ok(Some(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_export() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("device").join("My Clippings.txt");
        fs::create_dir_all(from.parent().unwrap()).unwrap();
        fs::write(&from, "contents").unwrap();

        let to = dir.path().join("work").join("clippings.txt");
        assert_eq!(copy_export(&from, &to).unwrap(), Some(8));
        assert_eq!(fs::read_to_string(&to).unwrap(), "contents");
    }

    #[test]
    fn test_missing_device_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let to = dir.path().join("clippings.txt");

        assert_eq!(
            copy_export(&dir.path().join("missing.txt"), &to).unwrap(),
            None
        );
        assert!(!to.exists());
    }
}
