//! Value subjects
//!
//! The generic leaf: one named integer value under a settings key.

use std::sync::Arc;

use anyhow::Context;
use log::debug;

use crate::core::models::SubjectInfo;
use crate::core::ports::{SettingsBackend, Subject};
use crate::core::services::NAMESPACE_KEY;

/// A single settings value with a hardened and a default state
///
/// Hardening remembers the value it replaced under the hardentools namespace
/// key, and restoring puts it back. Without a remembered value, restoring
/// writes the default, or removes the value when there is no default.
pub struct ValueSubject {
    info: SubjectInfo,
    key: String,
    value: String,
    hardened: u32,
    default: Option<u32>,
    backend: Arc<dyn SettingsBackend>,
}

impl ValueSubject {
    /// Create a value subject whose value is absent by default
    #[must_use]
    pub fn new(
        info: SubjectInfo,
        key: impl Into<String>,
        value: impl Into<String>,
        hardened: u32,
        backend: Arc<dyn SettingsBackend>,
    ) -> Self {
        Self {
            info,
            key: key.into(),
            value: value.into(),
            hardened,
            default: None,
            backend,
        }
    }

    /// Set the value written on restore when nothing was remembered
    #[must_use]
    pub fn with_default(mut self, default: u32) -> Self {
        self.default = Some(default);
        self
    }

    fn saved_name(&self) -> String {
        format!("Saved_{}", self.info.name)
    }

    fn location(&self) -> String {
        format!("{}\\{}", self.key, self.value)
    }
}

impl Subject for ValueSubject {
    fn is_hardened(&self) -> bool {
        matches!(self.backend.get(&self.key, &self.value), Ok(Some(v)) if v == self.hardened)
    }

    fn harden(&self, apply: bool) -> anyhow::Result<()> {
        if apply == self.is_hardened() {
            return Ok(());
        }

        if apply {
            let previous = self
                .backend
                .get(&self.key, &self.value)
                .with_context(|| format!("could not read {}", self.location()))?;
            if let Some(previous) = previous {
                debug!("{}: remembering previous value {previous}", self.info.name);
                self.backend
                    .set(NAMESPACE_KEY, &self.saved_name(), previous)
                    .with_context(|| format!("could not remember {}", self.location()))?;
            }
            self.backend
                .set(&self.key, &self.value, self.hardened)
                .with_context(|| format!("could not write {}", self.location()))?;
        } else {
            let saved = self
                .backend
                .get(NAMESPACE_KEY, &self.saved_name())
                .with_context(|| format!("could not read the remembered {}", self.location()))?;
            let restored = match saved.or(self.default) {
                Some(previous) => self.backend.set(&self.key, &self.value, previous),
                None => self.backend.delete_value(&self.key, &self.value),
            };
            restored.with_context(|| format!("could not restore {}", self.location()))?;
            if saved.is_some() {
                self.backend.delete_value(NAMESPACE_KEY, &self.saved_name())?;
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.info.name
    }

    fn long_name(&self) -> &str {
        &self.info.long_name
    }

    fn description(&self) -> &str {
        &self.info.description
    }
}

impl std::fmt::Debug for ValueSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueSubject")
            .field("name", &self.info.name)
            .field("key", &self.key)
            .field("value", &self.value)
            .field("hardened", &self.hardened)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}
