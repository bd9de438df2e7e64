//! Subject identity

use serde::Serialize;

/// The static identity every subject carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectInfo {
    /// Short unique name (selection key)
    pub name: String,
    /// Human-readable label
    pub long_name: String,
    /// Explanatory text
    pub description: String,
}

impl SubjectInfo {
    /// Create a subject identity
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        long_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            long_name: long_name.into(),
            description: description.into(),
        }
    }
}
