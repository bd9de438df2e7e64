//! In-memory settings hive
//!
//! Implements `SettingsBackend` over a mutex-guarded map. Write and read
//! failures can be switched on to exercise error paths.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Hive, normalize_key};
use crate::core::ports::{SettingsBackend, SettingsError};

/// Settings hive held in process memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    hive: Mutex<Hive>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    denied_keys: Mutex<HashSet<String>>,
    unreadable_keys: Mutex<HashSet<String>>,
}

impl MemoryBackend {
    /// Create an empty hive
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hive pre-populated with `hive`
    #[must_use]
    pub fn with_hive(hive: Hive) -> Self {
        Self {
            hive: Mutex::new(hive),
            ..Self::default()
        }
    }

    /// Copy of the current contents
    #[must_use]
    pub fn snapshot(&self) -> Hive {
        self.lock().clone()
    }

    /// Make every read fail
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every write fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make writes to a single key fail
    pub fn deny_key(&self, key: &str) {
        self.denied_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(normalize_key(key));
    }

    /// Make reads from a single key fail
    pub fn deny_reads(&self, key: &str) {
        self.unreadable_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(normalize_key(key));
    }

    fn lock(&self) -> MutexGuard<'_, Hive> {
        self.hive.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_read(&self, key: &str) -> Result<(), SettingsError> {
        let denied = self
            .unreadable_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key);
        if denied || self.fail_reads.load(Ordering::SeqCst) {
            return Err(SettingsError::AccessDenied(key.to_string()));
        }
        Ok(())
    }

    fn check_write(&self, key: &str) -> Result<(), SettingsError> {
        let denied = self
            .denied_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key);
        if denied || self.fail_writes.load(Ordering::SeqCst) {
            return Err(SettingsError::AccessDenied(key.to_string()));
        }
        Ok(())
    }
}

impl SettingsBackend for MemoryBackend {
    fn get(&self, key: &str, value: &str) -> Result<Option<u32>, SettingsError> {
        let key = normalize_key(key);
        self.check_read(&key)?;
        Ok(self.lock().get(&key).and_then(|values| values.get(value)).copied())
    }

    fn set(&self, key: &str, value: &str, data: u32) -> Result<(), SettingsError> {
        let key = normalize_key(key);
        self.check_write(&key)?;
        self.lock().entry(key).or_default().insert(value.to_string(), data);
        Ok(())
    }

    fn delete_value(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let key = normalize_key(key);
        self.check_write(&key)?;
        if let Some(values) = self.lock().get_mut(&key) {
            values.remove(value);
        }
        Ok(())
    }

    fn delete_key(&self, key: &str) -> Result<(), SettingsError> {
        let key = normalize_key(key);
        self.check_write(&key)?;
        match self.lock().remove(&key) {
            Some(_) => Ok(()),
            None => Err(SettingsError::KeyNotFound(key)),
        }
    }
}
