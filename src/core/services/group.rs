//! Subject groups
//!
//! A [`SubjectGroup`] bundles related subjects (for example the same policy
//! across several Office versions) behind a single name. Callers cannot tell
//! a group from a leaf.

use log::debug;

use crate::core::models::SubjectInfo;
use crate::core::ports::Subject;

/// A subject made of an ordered list of child subjects
///
/// - Hardened only if every child is hardened.
/// - Hardening walks the children in order and stops at the first failure,
///   leaving the remaining children untouched. Children should be ordered so
///   that a partial application is safe to leave in place.
pub struct SubjectGroup {
    info: SubjectInfo,
    members: Vec<Box<dyn Subject>>,
}

impl SubjectGroup {
    /// Create an empty group
    #[must_use]
    pub const fn new(info: SubjectInfo) -> Self {
        Self {
            info,
            members: Vec::new(),
        }
    }

    /// Append a child subject
    #[must_use]
    pub fn with(mut self, member: impl Subject + 'static) -> Self {
        self.members.push(Box::new(member));
        self
    }

    /// Number of direct children
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no children
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

}

impl Subject for SubjectGroup {
    fn is_hardened(&self) -> bool {
        // Evaluate every member so each one is queried on every status pass.
        self.members.iter().fold(true, |all, member| member.is_hardened() && all)
    }

    fn harden(&self, apply: bool) -> anyhow::Result<()> {
        let action = if apply { "hardening" } else { "restoring" };
        for member in &self.members {
            debug!("{}: {action} member {}", self.info.name, member.name());
            member.harden(apply)?;
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

    fn names(&self) -> Vec<&str> {
        std::iter::once(self.name())
            .chain(self.members.iter().flat_map(|member| member.names()))
            .collect()
    }
}

impl std::fmt::Debug for SubjectGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubjectGroup")
            .field("name", &self.info.name)
            .field("members", &self.members.len())
            .finish()
    }
}
