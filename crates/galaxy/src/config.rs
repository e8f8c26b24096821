//! Builder configuration loaded from TOML

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{GalaxyError, Result};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BuilderConfig {
    /// Where the galaxy is saved and loaded
    pub store_path: PathBuf,
    /// Galaxy name used when the user does not pick one
    pub default_galaxy_name: String,
    /// Where the event report is written at shutdown; stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<PathBuf>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("./data/galaxy.json"),
            default_galaxy_name: "Default".to_string(),
            report_path: None,
        }
    }
}

impl BuilderConfig {
    /// Load configuration from a file, failing on unreadable or malformed input
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| GalaxyError::storage(path, e))?;
        toml::from_str(&content).map_err(|source| GalaxyError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a file, falling back to defaults if it is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(GalaxyError::StorageUnavailable { .. }) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Failed to parse config file {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| GalaxyError::storage(path, e))
    }
}
