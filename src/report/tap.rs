//! TAP-like stream reporter.

use std::io::Write;

use crate::assertion::Failure;
use crate::error::ReportError;

use super::{Labels, Reporter, Totals};

const RULE: &str = "#---------------------------------------------------";

/// Writes results in the TAP-like format consumed by TAP harnesses.
///
/// Failure blocks carry the failing check's source location and, for value
/// comparisons, the expected and actual values rendered for their type.
pub struct TapReporter<W> {
    out: W,
}

impl<W: Write> TapReporter<W> {
    /// Creates a reporter writing to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_labels(&mut self, status: &str, number: u32, labels: &Labels) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{status} {number} - GIVEN {}\n\tWHEN {}\n\tTHEN {}",
            labels.given, labels.when, labels.then
        )
    }
}

impl<W: Write> Reporter for TapReporter<W> {
    fn header(&mut self, suite: &str) -> Result<(), ReportError> {
        writeln!(self.out, "{RULE}\n# {suite}: Running Tests...\n{RULE}")?;
        Ok(())
    }

    fn passed(&mut self, number: u32, labels: &Labels) -> Result<(), ReportError> {
        self.write_labels("ok", number, labels)?;
        Ok(())
    }

    fn failed(
        &mut self,
        number: u32,
        labels: &Labels,
        failure: &Failure,
    ) -> Result<(), ReportError> {
        self.write_labels("not ok", number, labels)?;
        writeln!(
            self.out,
            " ---\n  FAIL:{}:{}",
            failure.file(),
            failure.line()
        )?;
        if let Some((expected, actual)) = failure.kind().rendered_values() {
            writeln!(self.out, "  Expected:{expected}\n  Actual:{actual}")?;
        }
        if let Some(note) = failure.kind().note() {
            writeln!(self.out, "  Note:{note}")?;
        }
        writeln!(self.out, " ---")?;
        Ok(())
    }

    fn summary(&mut self, totals: Totals) -> Result<(), ReportError> {
        writeln!(self.out, "#Failed: {}\n1..{}", totals.failed, totals.total)?;
        self.out.flush()?;
        Ok(())
    }
}
