//! User configuration
//!
//! Stored at `~/.hardentools/config.toml` (see [`crate::paths`]). Every field
//! is optional; a missing file yields the defaults.
//!
//! ```toml
//! hive = "/var/lib/hardentools/hive.toml"
//! log_file = "/var/log/hardentools.log"
//! exclude = ["UAC", "PowerShell"]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;

/// hardentools configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Settings hive location (default: `<home>/hive.toml`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hive: Option<PathBuf>,

    /// Write log output to this file instead of stderr
    ///
    /// Relative paths are resolved against the hardentools home.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Subjects left unselected by default when hardening
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl Config {
    /// Load config from the default location, or defaults if absent
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&paths::config_file())
    }

    /// Load config from `path`, or defaults if absent
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Settings hive to use
    #[must_use]
    pub fn hive_path(&self) -> PathBuf {
        self.hive.clone().unwrap_or_else(paths::default_hive)
    }

    /// Log file to append to, if any
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.as_ref().map(|file| {
            if file.is_relative() {
                paths::home_dir().join(file)
            } else {
                file.clone()
            }
        })
    }

    /// Names excluded from the default harden selection
    #[must_use]
    pub fn excluded(&self) -> HashSet<String> {
        self.exclude.iter().cloned().collect()
    }
}
