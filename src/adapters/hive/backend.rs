//! `SettingsBackend` over a hive file
//!
//! Every operation reads the file, applies the change and writes it back,
//! so several processes (and several `TomlHive` values) see each other's
//! writes.

use std::path::{Path, PathBuf};

use log::debug;

use super::file::{load_hive, save_hive};
use crate::adapters::{Hive, normalize_key};
use crate::core::ports::{SettingsBackend, SettingsError};

/// Settings hive persisted as TOML
#[derive(Debug, Clone)]
pub struct TomlHive {
    path: PathBuf,
}

impl TomlHive {
    /// Open (lazily) the hive stored at `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the hive file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole hive
    pub fn load(&self) -> Result<Hive, SettingsError> {
        load_hive(&self.path)
    }

    fn update<T>(
        &self,
        f: impl FnOnce(&mut Hive) -> Result<T, SettingsError>,
    ) -> Result<T, SettingsError> {
        let mut hive = self.load()?;
        let out = f(&mut hive)?;
        save_hive(&self.path, &hive)?;
        Ok(out)
    }
}

impl SettingsBackend for TomlHive {
    fn get(&self, key: &str, value: &str) -> Result<Option<u32>, SettingsError> {
        let key = normalize_key(key);
        let hive = self.load()?;
        Ok(hive.get(&key).and_then(|values| values.get(value)).copied())
    }

    fn set(&self, key: &str, value: &str, data: u32) -> Result<(), SettingsError> {
        let key = normalize_key(key);
        debug!("set {key}\\{value} = {data}");
        self.update(|hive| {
            hive.entry(key).or_default().insert(value.to_string(), data);
            Ok(())
        })
    }

    fn delete_value(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let key = normalize_key(key);
        debug!("delete {key}\\{value}");
        self.update(|hive| {
            if let Some(values) = hive.get_mut(&key) {
                values.remove(value);
            }
            Ok(())
        })
    }

    fn delete_key(&self, key: &str) -> Result<(), SettingsError> {
        let key = normalize_key(key);
        debug!("delete key {key}");
        self.update(|hive| match hive.remove(&key) {
            Some(_) => Ok(()),
            None => Err(SettingsError::KeyNotFound(key)),
        })
    }
}
