//! Subject catalog
//!
//! The fixed, ordered list of top-level subjects. Built once at startup
//! through [`CatalogBuilder`], read-only afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::group::SubjectGroup;
use crate::core::ports::Subject;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap_or_else(|e| panic!("invalid name pattern: {e}"))
});

/// Errors that can occur when wiring the catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A name is used twice, at any depth
    #[error("duplicate subject name: {0}")]
    DuplicateName(String),

    /// A name is not a plain identifier
    #[error("invalid subject name: {0:?} (use letters, digits and '_', starting with a letter)")]
    InvalidName(String),
}

/// Ordered list of top-level subjects
pub struct Catalog {
    subjects: Vec<Box<dyn Subject>>,
}

impl Catalog {
    /// Start wiring a catalog
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Top-level subjects in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Subject> {
        self.subjects.iter().map(|s| &**s)
    }

    /// Look up a top-level subject by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Subject> {
        self.iter().find(|s| s.name() == name)
    }

    /// Whether a top-level subject with this name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names of the top-level subjects in catalog order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(Subject::name).collect()
    }

    /// Number of top-level subjects
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Wires leaves and groups into a [`Catalog`]
///
/// Every name, including the names of group members, is checked for
/// uniqueness. The first problem found is reported by [`CatalogBuilder::build`].
#[derive(Default)]
pub struct CatalogBuilder {
    subjects: Vec<Box<dyn Subject>>,
    seen: HashSet<String>,
    error: Option<CatalogError>,
}

impl CatalogBuilder {
    /// Append a subject; every name nested in it is reserved
    #[must_use]
    pub fn subject(mut self, subject: impl Subject + 'static) -> Self {
        self.register_all(&subject);
        self.subjects.push(Box::new(subject));
        self
    }

    /// Append a group; its members' names are reserved too
    #[must_use]
    pub fn group(self, group: SubjectGroup) -> Self {
        self.subject(group)
    }

    /// Finish wiring
    pub fn build(self) -> Result<Catalog, CatalogError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(Catalog {
                subjects: self.subjects,
            }),
        }
    }

    fn register_all(&mut self, subject: &dyn Subject) {
        for name in subject.names() {
            self.register(name.to_string());
        }
    }

    fn register(&mut self, name: String) {
        if self.error.is_some() {
            return;
        }
        if !NAME_PATTERN.is_match(&name) {
            self.error = Some(CatalogError::InvalidName(name));
        } else if !self.seen.insert(name.clone()) {
            self.error = Some(CatalogError::DuplicateName(name));
        }
    }
}

impl std::fmt::Debug for CatalogBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogBuilder")
            .field("subjects", &self.subjects.len())
            .field("error", &self.error)
            .finish()
    }
}
