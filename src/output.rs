//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Direction, RunReport};
use crate::core::services::{Overview, SubjectEntry};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a status query
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Direction offered next
    pub mode: Direction,
    /// Number of hardened subjects
    pub hardened: usize,
    /// Number of subjects in the catalog
    pub total: usize,
    /// Every catalog entry
    pub subjects: Vec<SubjectEntry>,
}

impl From<&Overview> for StatusResult {
    fn from(overview: &Overview) -> Self {
        Self {
            mode: overview.mode,
            hardened: overview.hardened_count(),
            total: overview.entries.len(),
            subjects: overview.entries.clone(),
        }
    }
}

/// Result of a harden or restore run
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Whether the run used a throwaway copy of the hive
    pub dry_run: bool,
    /// What the run did
    #[serde(flatten)]
    pub report: RunReport,
    /// The report rendered as lines
    pub transcript: Vec<String>,
    /// Set when the status flag could not be written
    pub escalation: Option<String>,
}

impl RunResult {
    /// Wrap a run report
    #[must_use]
    pub fn new(report: RunReport, dry_run: bool) -> Self {
        Self {
            dry_run,
            transcript: report.transcript(),
            escalation: report.escalation().map(str::to_string),
            report,
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match self.mode {
            Direction::Harden => {
                println!("Ready to harden some features of your system.");
                println!("Run 'hardentools harden' to apply the selected entries.\n");
            },
            Direction::Restore => {
                println!("We have already hardened some risky features.");
                println!("Run 'hardentools restore' to restore them.\n");
            },
        }

        for s in &self.subjects {
            let state = if s.hardened {
                "hardened".green().to_string()
            } else {
                "not hardened".yellow().to_string()
            };
            let marker = match (s.selected, s.editable) {
                (true, true) => "[x]",
                (false, true) => "[ ]",
                (true, false) => "[*]",
                (false, false) => "[-]",
            };
            println!("  {marker} {:<26} {state}", s.name);
            println!("      {}", s.long_name);
        }

        println!("\n{}/{} hardened", self.hardened, self.total);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl RunResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for line in &self.transcript {
            if line.starts_with("!!") {
                println!("{}", line.red());
            } else {
                println!("{line}");
            }
        }
        println!();

        // The caller reports the escalation as the command's error
        if self.escalation.is_some() {
            return;
        }

        let failures = self.report.failures().count();
        if failures > 0 {
            println!("{failures} subject(s) failed; run again to retry them.");
        }
        match self.report.direction {
            Direction::Harden => println!("Done! I have hardened all risky features!"),
            Direction::Restore => println!("Done! I have restored all risky features!"),
        }
        if self.dry_run {
            println!("(dry run: no settings were changed)");
        } else {
            println!("For all changes to take effect please restart Windows.");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
