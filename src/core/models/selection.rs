//! Per-run selection of catalog entries

use std::collections::BTreeMap;

/// Mapping from subject name to "act on this subject in this run"
///
/// Names that were never set read as not selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: BTreeMap<String, bool>,
}

impl Selection {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a subject is selected
    pub fn set(&mut self, name: impl Into<String>, selected: bool) {
        self.entries.insert(name.into(), selected);
    }

    /// Whether a subject is selected
    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.entries.get(name).copied().unwrap_or(false)
    }

    /// Names of all selected subjects, sorted
    #[must_use]
    pub fn selected(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Number of selected subjects
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.values().filter(|s| **s).count()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Selection {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(name, selected)| (name.into(), selected)).collect(),
        }
    }
}
