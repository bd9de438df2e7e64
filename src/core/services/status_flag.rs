//! Status flag stored in a settings hive
//!
//! The flag lives under a fixed namespace key as an integer value; `1` means
//! hardened. Restoring removes the whole namespace key.

use std::sync::Arc;

use log::debug;

use crate::core::ports::{SettingsBackend, StatusStore};

/// Namespace key owned by hardentools
pub const NAMESPACE_KEY: &str = r"HKCU\SOFTWARE\Security Without Borders";

/// Name of the status value under [`NAMESPACE_KEY`]
pub const STATUS_VALUE: &str = "Harden";

/// Value meaning "hardened"
const HARDENED_SENTINEL: u32 = 1;

/// [`StatusStore`] backed by a [`SettingsBackend`]
#[derive(Clone)]
pub struct FlagStore {
    backend: Arc<dyn SettingsBackend>,
}

impl FlagStore {
    /// Create a flag store on top of a settings backend
    #[must_use]
    pub fn new(backend: Arc<dyn SettingsBackend>) -> Self {
        Self { backend }
    }
}

impl StatusStore for FlagStore {
    fn check_hardened(&self) -> bool {
        match self.backend.get(NAMESPACE_KEY, STATUS_VALUE) {
            Ok(value) => value == Some(HARDENED_SENTINEL),
            Err(err) => {
                debug!("status flag unreadable, treating as not hardened: {err}");
                false
            },
        }
    }

    fn mark_hardened(&self, hardened: bool) -> anyhow::Result<()> {
        if hardened {
            self.backend.set(NAMESPACE_KEY, STATUS_VALUE, HARDENED_SENTINEL)?;
        } else {
            self.backend.delete_key(NAMESPACE_KEY)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for FlagStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagStore").field("key", &NAMESPACE_KEY).finish()
    }
}
