//! Orchestration API for clarify commands.
//!
//! This module provides the public entry points behind each `clarify`
//! subcommand: [`run_suite`] and [`plan_suite`]. Both accept library-owned
//! types (not clap types) and write to a caller-supplied sink, so a test
//! binary, the bundled CLI and library embedders share the same behaviour.
//! They never call `std::process::exit`; the caller maps the returned
//! [`CommandOutcome`] to a process exit code.

mod run;

pub use run::{plan_suite, run_suite};

use crate::report::Totals;

/// Outcome of a clarify command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Every test passed (exit code 0).
    Success,
    /// The run completed but some tests failed.
    TestsFailed {
        /// Number of failed assertion clauses.
        count: u32,
    },
}

impl CommandOutcome {
    /// Maps run totals to an outcome.
    #[must_use]
    pub const fn from_totals(totals: Totals) -> Self {
        if totals.all_passed() {
            Self::Success
        } else {
            Self::TestsFailed {
                count: totals.failed,
            }
        }
    }

    /// The process exit code: the failure count, capped at 255.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::TestsFailed { count } => u8::try_from(count).unwrap_or(u8::MAX),
        }
    }
}

/// Result of [`run_suite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Counters for the whole run.
    pub totals: Totals,
    /// Scenarios traversed.
    pub scenarios: usize,
}

impl RunSummary {
    /// The outcome the CLI adapter should report.
    #[must_use]
    pub const fn outcome(&self) -> CommandOutcome {
        CommandOutcome::from_totals(self.totals)
    }
}
