//! Configuration management for revguard

use crate::error::{ReviewGuardError, Result};
use crate::validation::DEFAULT_BLACKLIST_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".revguard/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Validation settings
    pub validation: ValidationConfig,
    /// Storage settings
    pub storage: StorageConfig,
}

impl Config {
    /// Load from a TOML file; a missing file yields defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ReviewGuardError::Toml(e.to_string()))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Serialize as pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ReviewGuardError::Toml(e.to_string()))
    }

    /// Write as TOML, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

/// How the blacklist is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlacklistMode {
    /// Re-read the file on every validation
    #[default]
    Fresh,
    /// Keep entries in memory, refreshing periodically
    Cached,
}

/// Validation-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Blacklist file, one forbidden term per line
    pub blacklist_path: PathBuf,
    /// Fresh or cached blacklist reads
    pub blacklist_mode: BlacklistMode,
    /// Cache refresh interval in seconds (0 disables automatic refresh)
    pub refresh_interval_secs: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            blacklist_path: PathBuf::from(DEFAULT_BLACKLIST_FILE),
            blacklist_mode: BlacklistMode::Fresh,
            refresh_interval_secs: 300,
        }
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory; platform default when unset
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured directory, else the platform data dir (~/.revguard as last resort)
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }

        directories::ProjectDirs::from("com", "revguard", "revguard")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".revguard")
            })
    }
}
