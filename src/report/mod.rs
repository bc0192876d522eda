//! Result reporting and run counters.
//!
//! The traversal engine never writes output itself. It reports each completed
//! combination through a [`RunContext`], which numbers the results, keeps the
//! running totals, and forwards to a [`Reporter`]. The stock reporter,
//! [`TapReporter`], writes the TAP-like stream:
//!
//! ```text
//! ok 1 - GIVEN an empty buffer
//!     WHEN a byte is pushed
//!     THEN the length is one
//! ```
//!
//! (indentation is a tab in the real stream). The context is passed explicitly
//! to every traversal, so separate runs never share counters.

mod tap;


pub use tap::TapReporter;

use crate::assertion::Failure;
use crate::error::ReportError;

/// The descriptions of one GIVEN/WHEN/THEN combination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    /// The precondition text.
    pub given: String,
    /// The action text.
    pub when: String,
    /// The assertion text.
    pub then: String,
}

/// Aggregate counters for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Assertion clauses entered.
    pub total: u32,
    /// Assertion clauses that failed.
    pub failed: u32,
}

impl Totals {
    /// Returns whether every entered assertion clause passed.
    #[must_use]
    pub const fn all_passed(self) -> bool {
        self.failed == 0
    }
}

/// Destination for run results.
pub trait Reporter {
    /// Writes the banner printed before any scenario runs.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the output cannot be written.
    fn header(&mut self, suite: &str) -> Result<(), ReportError>;

    /// Records a passing combination.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the output cannot be written.
    fn passed(&mut self, number: u32, labels: &Labels) -> Result<(), ReportError>;

    /// Records a failing combination.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the output cannot be written.
    fn failed(&mut self, number: u32, labels: &Labels, failure: &Failure)
    -> Result<(), ReportError>;

    /// Writes the closing summary.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the output cannot be written.
    fn summary(&mut self, totals: Totals) -> Result<(), ReportError>;
}

/// Counters and reporter shared by every scenario in a run.
pub struct RunContext<'r> {
    reporter: &'r mut dyn Reporter,
    totals: Totals,
    reported: u32,
}

impl<'r> RunContext<'r> {
    /// Creates a context with zeroed counters.
    pub fn new(reporter: &'r mut dyn Reporter) -> Self {
        Self {
            reporter,
            totals: Totals::default(),
            reported: 0,
        }
    }

    /// The counters accumulated so far.
    #[must_use]
    pub const fn totals(&self) -> Totals {
        self.totals
    }

    /// Counts an assertion clause as entered.
    pub const fn begin_test(&mut self) {
        self.totals.total = self.totals.total.saturating_add(1);
    }

    /// Reports a failure and counts it.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the reporter cannot write.
    pub fn record_failure(
        &mut self,
        labels: &Labels,
        failure: &Failure,
    ) -> Result<(), ReportError> {
        self.totals.failed = self.totals.failed.saturating_add(1);
        let number = self.next_number();
        self.reporter.failed(number, labels, failure)
    }

    /// Reports a passing combination.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the reporter cannot write.
    pub fn record_pass(&mut self, labels: &Labels) -> Result<(), ReportError> {
        let number = self.next_number();
        self.reporter.passed(number, labels)
    }

    /// Writes the banner through the reporter.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the reporter cannot write.
    pub fn header(&mut self, suite: &str) -> Result<(), ReportError> {
        self.reporter.header(suite)
    }

    /// Writes the summary for the counters accumulated so far.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the reporter cannot write.
    pub fn summary(&mut self) -> Result<(), ReportError> {
        self.reporter.summary(self.totals)
    }

    const fn next_number(&mut self) -> u32 {
        self.reported = self.reported.saturating_add(1);
        self.reported
    }
}
