//! Hive file format
//!
//! ```toml
//! [keys.'HKCU\Software\Microsoft\Windows Script Host\Settings']
//! Enabled = 0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::adapters::Hive;
use crate::core::ports::SettingsError;

/// On-disk layout of a hive file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveFile {
    /// Key path to named values
    #[serde(default)]
    pub keys: Hive,
}

/// Load a hive file; a missing file is an empty hive
pub fn load_hive(path: &Path) -> Result<Hive, SettingsError> {
    if !path.exists() {
        return Ok(Hive::new());
    }
    let content = fs::read_to_string(path)?;
    let file: HiveFile = toml::from_str(&content)?;
    Ok(file.keys)
}

/// Write a hive file, creating parent directories
pub fn save_hive(path: &Path, hive: &Hive) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = HiveFile { keys: hive.clone() };
    let content = format!("# hardentools settings hive\n\n{}", toml::to_string_pretty(&file)?);
    fs::write(path, content)?;
    Ok(())
}
