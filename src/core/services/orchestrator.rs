//! Orchestration engine
//!
//! Runs one harden or restore pass over the catalog:
//!
//! 1. Every selected subject is toggled, in catalog order. A failing subject
//!    is recorded and the run moves on to the next one.
//! 2. The status flag is written once, after all subjects were processed.
//! 3. Every catalog subject, selected or not, is queried again. The live
//!    state is what gets reported, not the return value of step 1.

use chrono::Utc;
use log::{info, warn};
use thiserror::Error;

use super::catalog::Catalog;
use crate::core::models::{
    Direction, FinalState, Outcome, RunReport, Selection, StatusUpdate, SubjectOutcome,
};
use crate::core::ports::StatusStore;

/// Lifecycle of an [`Orchestrator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No run started yet
    Idle,
    /// Subjects are being processed
    Running,
    /// The run finished; the engine cannot be reused
    Completed,
}

/// Errors returned by the engine itself
///
/// Subject failures are never errors at this level, they are part of the
/// [`RunReport`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EngineError {
    /// `run_all` was called on an engine that already ran
    #[error("a run has already been performed by this engine")]
    AlreadyRun,
}

/// Single-use orchestration engine
pub struct Orchestrator<'a> {
    catalog: &'a Catalog,
    status: &'a dyn StatusStore,
    state: RunState,
}

impl<'a> Orchestrator<'a> {
    /// Create an idle engine over a catalog and a status store
    #[must_use]
    pub const fn new(catalog: &'a Catalog, status: &'a dyn StatusStore) -> Self {
        Self {
            catalog,
            status,
            state: RunState::Idle,
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Toggle every selected subject in `direction` and report the outcome
    ///
    /// Always completes; individual failures are carried in the report.
    /// A status flag write failure after hardening is reported through
    /// [`RunReport::escalation`].
    pub fn run_all(
        &mut self,
        direction: Direction,
        selection: &Selection,
    ) -> Result<RunReport, EngineError> {
        if self.state != RunState::Idle {
            return Err(EngineError::AlreadyRun);
        }
        self.state = RunState::Running;

        let verb = direction.verb();
        let mut actions = Vec::new();

        for subject in self.catalog.iter() {
            let name = subject.name();
            if !selection.is_selected(name) {
                continue;
            }

            let outcome = match subject.harden(direction.apply()) {
                Ok(()) => {
                    info!("{verb} {name} has been successful");
                    Outcome::Succeeded
                },
                Err(err) => {
                    warn!("Error for operation {name}: {err:#}");
                    Outcome::Failed {
                        error: format!("{err:#}"),
                    }
                },
            };
            actions.push(SubjectOutcome {
                name: name.to_string(),
                outcome,
            });
        }

        let status = self.update_status(direction);

        let final_states = self
            .catalog
            .iter()
            .map(|subject| {
                let hardened = subject.is_hardened();
                if hardened {
                    info!("{} is now hardened", subject.name());
                } else {
                    info!("{} is now NOT hardened", subject.name());
                }
                FinalState {
                    name: subject.name().to_string(),
                    hardened,
                }
            })
            .collect();

        self.state = RunState::Completed;

        Ok(RunReport {
            direction,
            actions,
            status,
            final_states,
            finished_at: Utc::now(),
        })
    }

    fn update_status(&self, direction: Direction) -> StatusUpdate {
        match (direction, self.status.mark_hardened(direction.apply())) {
            (Direction::Harden, Ok(())) => StatusUpdate::Marked,
            (Direction::Restore, Ok(())) => StatusUpdate::Cleared,
            (Direction::Harden, Err(err)) => {
                warn!("Could not set status flag: {err:#}");
                StatusUpdate::MarkFailed {
                    error: format!("{err:#}"),
                }
            },
            (Direction::Restore, Err(err)) => {
                info!("Could not remove status flag: {err:#}");
                StatusUpdate::ClearFailed {
                    error: format!("{err:#}"),
                }
            },
        }
    }
}

impl std::fmt::Debug for Orchestrator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("catalog", self.catalog)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
