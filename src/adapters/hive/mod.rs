//! TOML-backed settings hive
//!
//! Implements `SettingsBackend` using a single `hive.toml` file.
//!
//! - [`file`] - Read and write the hive file
//! - [`backend`] - `SettingsBackend` implementation

pub mod backend;
pub mod file;

pub use backend::TomlHive;
pub use file::{HiveFile, load_hive, save_hive};
