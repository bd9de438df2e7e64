//! Orchestration services
//!
//! Logic that operates on subjects through the port traits only.
//!
//! - [`group`] - Subjects made of other subjects
//! - [`catalog`] - The fixed, ordered list of top-level subjects
//! - [`status_flag`] - Status flag kept in a settings hive
//! - [`overview`] - Mode, live state and default selection for a front-end
//! - [`orchestrator`] - One harden or restore run with per-subject isolation

pub mod catalog;
pub mod group;
pub mod orchestrator;
pub mod overview;
pub mod status_flag;


pub use catalog::{Catalog, CatalogBuilder, CatalogError};
pub use group::SubjectGroup;
pub use orchestrator::{EngineError, Orchestrator, RunState};
pub use overview::{Overview, SelectionError, SubjectEntry};
pub use status_flag::{FlagStore, NAMESPACE_KEY, STATUS_VALUE};
