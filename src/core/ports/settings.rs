//! Settings backend port
//!
//! A hive of keys, each holding named integer values. Leaf subjects and
//! the status flag both live in one.

use thiserror::Error;

/// Errors raised by settings backends
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The key does not exist
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// The backend refused the write
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// IO error reading or writing the backing file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be parsed
    #[error("invalid hive file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The hive could not be serialized
    #[error("could not serialize hive: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Key/value store for settings
///
/// Keys are backslash-separated paths such as `HKCU\Software\Vendor`.
/// Values are named `u32`s stored under a key. Writing a value creates its
/// key implicitly.
pub trait SettingsBackend: Send + Sync {
    /// Read a value, `None` if the key or value is absent
    fn get(&self, key: &str, value: &str) -> Result<Option<u32>, SettingsError>;

    /// Create or overwrite a value
    fn set(&self, key: &str, value: &str, data: u32) -> Result<(), SettingsError>;

    /// Remove a value; removing an absent value succeeds
    fn delete_value(&self, key: &str, value: &str) -> Result<(), SettingsError>;

    /// Remove a key and every value under it
    ///
    /// Fails with [`SettingsError::KeyNotFound`] if the key does not exist.
    fn delete_key(&self, key: &str) -> Result<(), SettingsError>;
}
