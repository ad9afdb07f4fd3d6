use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Export file on the mounted e-reader
    #[arg(long)]
    pub device_path: Option<String>,

    /// Local working copy of the export
    #[arg(long)]
    pub clippings_file: Option<String>,

    /// Don't copy extracted clippings to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Force overwrite existing config
    #[arg(long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let defaults = Config::default();
    let config = Config {
        device_path: args.device_path.unwrap_or(defaults.device_path),
        clippings_file: args.clippings_file.unwrap_or(defaults.clippings_file),
        defaults_file: defaults.defaults_file,
        copy_to_clipboard: !args.no_clipboard,
    };

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> InitArgs {
        InitArgs {
            device_path: Some("/media/kindle/documents/My Clippings.txt".to_string()),
            clippings_file: None,
            no_clipboard: true,
            force: false,
        }
    }

    #[test]
    fn test_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        init(args(), cwd).unwrap();

        let config = Config::load(cwd).unwrap();
        assert_eq!(config.device_path, "/media/kindle/documents/My Clippings.txt");
        assert_eq!(config.clippings_file, "clippings.txt");
        assert!(!config.copy_to_clipboard);
    }

    #[test]
    fn test_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        let config_path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&config_path, "{}").unwrap();

        init(args(), cwd).unwrap();
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "{}");

        init(InitArgs { force: true, ..args() }, cwd).unwrap();
        assert_ne!(fs::read_to_string(&config_path).unwrap(), "{}");
    }
}
