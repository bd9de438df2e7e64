//! Domain models for the orchestration core
//!
//! - [`Direction`] - Harden or restore
//! - [`SubjectInfo`] - Name, label and description of a subject
//! - [`Selection`] - Which catalog entries a run acts on
//! - [`RunReport`] - Everything one run did, and its transcript

mod direction;
mod info;
mod report;
mod selection;

pub use direction::Direction;
pub use info::SubjectInfo;
pub use report::{
    FLAG_NOT_REMOVED, FinalState, Outcome, RESTORE_WILL_NOT_WORK, RunReport, StatusUpdate,
    SubjectOutcome,
};
pub use selection::Selection;
