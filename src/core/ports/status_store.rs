//! Status store port
//!
//! Defines the interface for the single persisted "we are hardened" flag.

/// Persisted flag recording that a harden run completed without an
/// intervening restore
#[cfg_attr(test, mockall::automock)]
pub trait StatusStore: Send + Sync {
    /// Read the flag
    ///
    /// Absence, an unreadable store, or any value other than the sentinel
    /// all read as `false`. Never fails.
    fn check_hardened(&self) -> bool;

    /// Write (`true`) or remove (`false`) the flag
    ///
    /// Callers decide how severe a failure is: a failed write after hardening
    /// is fatal, a failed delete after restoring is informational.
    fn mark_hardened(&self, hardened: bool) -> anyhow::Result<()>;
}
