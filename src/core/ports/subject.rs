//! Subject port
//!
//! The contract every hardenable item implements, leaf or group.

/// A single hardening concern
///
/// Implementations inspect and change live system state. The engine treats
/// leaves and groups identically through this trait.
pub trait Subject: Send + Sync {
    /// Whether the hardened configuration is currently in effect
    ///
    /// Reads live state on every call and must not change anything.
    fn is_hardened(&self) -> bool;

    /// Harden (`apply == true`) or restore (`apply == false`) the subject
    ///
    /// Calling with the value the subject is already in is a no-op success.
    fn harden(&self, apply: bool) -> anyhow::Result<()>;

    /// Short, unique name used as the selection key
    fn name(&self) -> &str;

    /// Human-readable label
    fn long_name(&self) -> &str;

    /// Explanatory text
    fn description(&self) -> &str;

    /// This subject's name followed by the names of everything nested in it
    ///
    /// Leaves only have their own name.
    fn names(&self) -> Vec<&str> {
        vec![self.name()]
    }
}

impl<S: Subject + ?Sized> Subject for std::sync::Arc<S> {
    fn is_hardened(&self) -> bool {
        (**self).is_hardened()
    }

    fn harden(&self, apply: bool) -> anyhow::Result<()> {
        (**self).harden(apply)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn long_name(&self) -> &str {
        (**self).long_name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn names(&self) -> Vec<&str> {
        (**self).names()
    }
}
