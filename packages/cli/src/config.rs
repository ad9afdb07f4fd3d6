use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "clippings.config.json";

/// Clippings configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Export file on the mounted e-reader
    #[serde(default = "default_device_path")]
    pub device_path: String,

    /// Local working copy that commands read from
    #[serde(default = "default_clippings_file")]
    pub clippings_file: String,

    /// Sidecar file remembering the last used title
    #[serde(default = "default_defaults_file")]
    pub defaults_file: String,

    /// Copy extracted clippings to the system clipboard
    #[serde(default = "default_copy_to_clipboard")]
    pub copy_to_clipboard: bool,
}

fn default_device_path() -> String {
    "/Volumes/Kindle/documents/My Clippings.txt".to_string()
}

fn default_clippings_file() -> String {
    "clippings.txt".to_string()
}

fn default_defaults_file() -> String {
    "defaults.json".to_string()
}

fn default_copy_to_clipboard() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_device_path(&self, cwd: &str) -> PathBuf {
        resolve(cwd, &self.device_path)
    }

    pub fn get_clippings_file(&self, cwd: &str) -> PathBuf {
        resolve(cwd, &self.clippings_file)
    }

    pub fn get_defaults_file(&self, cwd: &str) -> PathBuf {
        resolve(cwd, &self.defaults_file)
    }
}

/// Resolve `path` against `cwd` unless it is already absolute.
pub fn resolve(cwd: &str, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        PathBuf::from(cwd).join(path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_path: default_device_path(),
            clippings_file: default_clippings_file(),
            defaults_file: default_defaults_file(),
            copy_to_clipboard: default_copy_to_clipboard(),
        }
    }
}
