use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Values remembered between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Title used by the last successful extraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Defaults {
    /// Load defaults, or empty defaults if the file does not exist yet
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No defaults file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string(self)?)?;
        debug!("Saved defaults to {}", path.display());
        Ok(())
    }
}
