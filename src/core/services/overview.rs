//! Selection and reporting surface
//!
//! [`Overview`] is what a front-end needs before a run: the offered mode,
//! and per catalog entry its labels, live state and default selection.

use std::collections::HashSet;

use log::warn;
use serde::Serialize;
use thiserror::Error;

use super::catalog::Catalog;
use crate::core::models::{Direction, Selection};
use crate::core::ports::StatusStore;

/// Errors raised when changing a selection
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// No top-level subject has this name
    #[error("unknown subject: {0}")]
    UnknownSubject(String),

    /// The entry cannot be changed in the current mode
    #[error("{name} cannot be changed: {reason}")]
    Locked {
        /// Subject name
        name: String,
        /// Why the entry is locked
        reason: &'static str,
    },
}

/// One catalog entry as shown to the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectEntry {
    /// Short name (selection key)
    pub name: String,
    /// Human-readable label
    pub long_name: String,
    /// Explanatory text
    pub description: String,
    /// Live state when the overview was collected
    pub hardened: bool,
    /// Whether the entry will be acted on
    pub selected: bool,
    /// Whether the operator may change `selected`
    pub editable: bool,
}

/// Snapshot of the catalog for building a selection
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    /// Direction offered by the status flag
    pub mode: Direction,
    /// Entries in catalog order
    pub entries: Vec<SubjectEntry>,
}

impl Overview {
    /// Collect the mode and every entry's live state
    ///
    /// In harden mode everything not yet hardened is selected, and
    /// already-hardened entries are locked. In restore mode everything
    /// hardened is selected and nothing can be changed: restoring only part
    /// of the system would let the next harden run record hardened settings
    /// as the state to restore to.
    #[must_use]
    pub fn collect(catalog: &Catalog, status: &dyn StatusStore) -> Self {
        Self::collect_excluding(catalog, status, &HashSet::new())
    }

    /// Like [`Overview::collect`], deselecting `excluded` names in harden mode
    ///
    /// Excluded names that match no top-level entry are logged and ignored.
    #[must_use]
    pub fn collect_excluding(
        catalog: &Catalog,
        status: &dyn StatusStore,
        excluded: &HashSet<String>,
    ) -> Self {
        for name in unknown_exclusions(catalog, excluded) {
            warn!("Excluded entry {name} is not in the catalog, ignoring it");
        }

        let mode = Direction::offered(status.check_hardened());

        let entries = catalog
            .iter()
            .map(|subject| {
                let hardened = subject.is_hardened();
                let (selected, editable) = match mode {
                    Direction::Harden => {
                        (!hardened && !excluded.contains(subject.name()), !hardened)
                    },
                    Direction::Restore => (hardened, false),
                };
                SubjectEntry {
                    name: subject.name().to_string(),
                    long_name: subject.long_name().to_string(),
                    description: subject.description().to_string(),
                    hardened,
                    selected,
                    editable,
                }
            })
            .collect();

        Self { mode, entries }
    }

    /// Look up an entry by name
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&SubjectEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Change whether an editable entry is selected
    pub fn select(&mut self, name: &str, selected: bool) -> Result<(), SelectionError> {
        let mode = self.mode;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| SelectionError::UnknownSubject(name.to_string()))?;

        if entry.selected == selected {
            return Ok(());
        }
        if !entry.editable {
            let reason = match mode {
                Direction::Harden => "already hardened",
                Direction::Restore => "everything hardened must be restored",
            };
            return Err(SelectionError::Locked {
                name: name.to_string(),
                reason,
            });
        }
        entry.selected = selected;
        Ok(())
    }

    /// Select only the given editable entries, deselecting the rest
    pub fn select_only(&mut self, names: &[String]) -> Result<(), SelectionError> {
        for name in names {
            if self.entry(name).is_none() {
                return Err(SelectionError::UnknownSubject(name.clone()));
            }
        }
        let editable: Vec<String> =
            self.entries.iter().filter(|e| e.editable).map(|e| e.name.clone()).collect();
        for name in editable {
            let keep = names.contains(&name);
            self.select(&name, keep)?;
        }
        for name in names {
            self.select(name, true)?;
        }
        Ok(())
    }

    /// The selection to hand to the engine
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.entries.iter().map(|e| (e.name.clone(), e.selected)).collect()
    }

    /// Number of hardened entries
    #[must_use]
    pub fn hardened_count(&self) -> usize {
        self.entries.iter().filter(|e| e.hardened).count()
    }
}

/// Excluded names with no top-level catalog entry, sorted
fn unknown_exclusions<'a>(catalog: &Catalog, excluded: &'a HashSet<String>) -> Vec<&'a str> {
    let mut unknown: Vec<&str> = excluded
        .iter()
        .map(String::as_str)
        .filter(|name| !catalog.contains(name))
        .collect();
    unknown.sort_unstable();
    unknown
}
