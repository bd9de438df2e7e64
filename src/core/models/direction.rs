//! Run direction
//!
//! Also used as the operating mode: the direction offered next.

use serde::Serialize;

/// Which way a run toggles the selected subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Apply the hardened configuration
    Harden,
    /// Revert to the default configuration
    Restore,
}

impl Direction {
    /// The direction to offer given the persisted status flag
    ///
    /// A missing flag means nothing was hardened yet, so harden is offered.
    #[must_use]
    pub const fn offered(flag_set: bool) -> Self {
        if flag_set { Self::Restore } else { Self::Harden }
    }

    /// The `apply` argument passed to `Subject::harden`
    #[must_use]
    pub const fn apply(self) -> bool {
        matches!(self, Self::Harden)
    }

    /// Verb used in transcript lines ("Hardening", "Restoring")
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Harden => "Hardening",
            Self::Restore => "Restoring",
        }
    }
}
