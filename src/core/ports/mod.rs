//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the orchestration core
//! and the systems it changes (settings hives, the status flag, and the
//! individual hardening subjects).
//!
//! Implementations live in the `adapters`, `services` and `subjects` modules.
//!
//! ## Design Principle
//!
//! The engine depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: In-memory fakes and mocks for unit tests
//! - **Flexibility**: Swap the persistence backend without touching the engine
//! - **Clarity**: Clear boundaries between layers

mod settings;
mod status_store;
mod subject;

pub use settings::{SettingsBackend, SettingsError};
pub use status_store::StatusStore;
#[cfg(test)]
pub use status_store::MockStatusStore;
pub use subject::Subject;
