//! Adapter implementations of the settings port
//!
//! - `memory` - In-process hive, used by tests and dry runs
//! - `hive` - Hive persisted as a TOML file

pub mod hive;
pub mod memory;

use std::collections::BTreeMap;

pub use hive::TomlHive;
pub use memory::MemoryBackend;

/// Contents of a hive: key path to (value name to data)
pub type Hive = BTreeMap<String, BTreeMap<String, u32>>;

/// Canonical form of a key path
///
/// Trailing separators are dropped and forward slashes are accepted, so
/// `HKCU/Software/Vendor/` and `HKCU\Software\Vendor` name the same key.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.replace('/', "\\").trim_end_matches('\\').to_string()
}
