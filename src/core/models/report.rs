//! Run report and transcript
//!
//! A [`RunReport`] is the data a single orchestration run produced. The
//! transcript is its plain-text rendering, one line per event, in the order
//! the events happened.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Direction;

/// Message shown when the status flag could not be written after hardening
pub const RESTORE_WILL_NOT_WORK: &str =
    "Could not set hardentools status flag - restore will not work!";

/// Message shown when the status flag could not be removed after restoring
pub const FLAG_NOT_REMOVED: &str =
    "Could not remove hardentools status flag - nothing to worry about.";

/// Result of invoking one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    /// `harden` returned success
    Succeeded,
    /// `harden` returned an error
    Failed {
        /// Error detail, including its causes
        error: String,
    },
}

/// Outcome of one selected subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectOutcome {
    /// Subject name
    pub name: String,
    /// What happened
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl SubjectOutcome {
    /// Whether the subject failed
    #[must_use]
    pub const fn failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}

/// What happened to the status flag at the end of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatusUpdate {
    /// Flag written after hardening
    Marked,
    /// Flag removed after restoring
    Cleared,
    /// Flag could not be written; restoring later will not be offered
    MarkFailed {
        /// Error detail
        error: String,
    },
    /// Flag could not be removed; harmless
    ClearFailed {
        /// Error detail
        error: String,
    },
}

impl StatusUpdate {
    /// Whether this must be escalated to the operator
    #[must_use]
    pub const fn is_escalation(&self) -> bool {
        matches!(self, Self::MarkFailed { .. })
    }
}

/// Live state of a catalog subject after the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalState {
    /// Subject name
    pub name: String,
    /// Whether it is hardened now
    pub hardened: bool,
}

/// Everything one orchestration run did
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Direction of the run
    pub direction: Direction,
    /// One entry per selected subject, in catalog order
    pub actions: Vec<SubjectOutcome>,
    /// Status flag update
    pub status: StatusUpdate,
    /// One entry per catalog subject, selected or not, in catalog order
    pub final_states: Vec<FinalState>,
    /// When the run completed
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    /// Subjects whose `harden` call failed
    pub fn failures(&self) -> impl Iterator<Item = &SubjectOutcome> {
        self.actions.iter().filter(|a| a.failed())
    }

    /// Whether any selected subject failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// The escalation message, if the status flag could not be written
    #[must_use]
    pub const fn escalation(&self) -> Option<&'static str> {
        if self.status.is_escalation() {
            Some(RESTORE_WILL_NOT_WORK)
        } else {
            None
        }
    }

    /// Render the run as ordered, human-readable lines
    #[must_use]
    pub fn transcript(&self) -> Vec<String> {
        let verb = self.direction.verb();
        let mut lines = Vec::with_capacity(self.actions.len() + self.final_states.len() + 2);

        let names: Vec<&str> = self.actions.iter().map(|a| a.name.as_str()).collect();
        if names.is_empty() {
            lines.push(format!("Now we are {}: nothing selected", verb.to_lowercase()));
        } else {
            lines.push(format!("Now we are {}: {}", verb.to_lowercase(), names.join(", ")));
        }

        for action in &self.actions {
            match &action.outcome {
                Outcome::Succeeded => {
                    lines.push(format!("{verb} {} has been successful", action.name));
                },
                Outcome::Failed { error } => {
                    lines.push(format!("!! {verb} {} FAILED !! ({error})", action.name));
                },
            }
        }

        match &self.status {
            StatusUpdate::Marked => lines.push("Status flag set: system marked as hardened".into()),
            StatusUpdate::Cleared => lines.push("Status flag removed".into()),
            StatusUpdate::MarkFailed { error } => {
                lines.push(format!("!! {RESTORE_WILL_NOT_WORK} !! ({error})"));
            },
            StatusUpdate::ClearFailed { .. } => lines.push(FLAG_NOT_REMOVED.into()),
        }

        for state in &self.final_states {
            if state.hardened {
                lines.push(format!("{} is now hardened", state.name));
            } else {
                lines.push(format!("{} is now NOT hardened", state.name));
            }
        }

        lines
    }
}
