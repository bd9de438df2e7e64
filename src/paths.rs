//! Centralized path definitions for hardentools
//!
//! This module provides a single source of truth for all filesystem paths
//! used by hardentools.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.hardentools/                # or $HARDENTOOLS_HOME
//! ├── config.toml               # User preferences
//! ├── hive.toml                 # Settings hive (default location)
//! └── hardentools.log           # Log file, when `log_file` is relative
//! ```

use std::path::PathBuf;

/// Environment variable overriding the hardentools home directory
pub const HOME_ENV: &str = "HARDENTOOLS_HOME";

/// Home directory name, under the user's home
const HOME_DIR: &str = ".hardentools";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Default hive filename
const HIVE_FILE: &str = "hive.toml";

/// Get the hardentools home directory.
///
/// Returns `$HARDENTOOLS_HOME` if set and non-empty, `~/.hardentools/`
/// otherwise.
#[must_use]
pub fn home_dir() -> PathBuf {
    match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(HOME_DIR),
    }
}

/// Get the config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    home_dir().join(CONFIG_FILE)
}

/// Get the default settings hive path.
///
/// Used unless `hive` is set in the config file.
#[must_use]
pub fn default_hive() -> PathBuf {
    home_dir().join(HIVE_FILE)
}
