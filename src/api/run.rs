//! Suite execution and planning.

use std::io::Write;

use tracing::debug;

use crate::config::AppConfig;
use crate::error::{ReportError, Result as ClarifyResult};
use crate::report::{RunContext, TapReporter};
use crate::suite::Suite;

use super::RunSummary;

/// Runs every scenario in `suite`, writing the TAP-like report to `out`.
///
/// The configured suite name, when set, replaces the suite's own name in the
/// header. Header and summary lines are written only when enabled in
/// `config.report`.
///
/// # Errors
///
/// Returns `ClarifyError::Report` if the report cannot be written.
pub fn run_suite<W: Write>(
    suite: &Suite,
    config: &AppConfig,
    out: &mut W,
) -> ClarifyResult<RunSummary> {
    let mut reporter = TapReporter::new(out);
    let mut ctx = RunContext::new(&mut reporter);

    if config.report.header {
        let name = config.suite_name.as_deref().unwrap_or_else(|| suite.name());
        ctx.header(name)?;
    }
    let outcomes = suite.run(&mut ctx)?;
    if config.report.summary {
        ctx.summary()?;
    }

    let totals = ctx.totals();
    debug!(
        total = totals.total,
        failed = totals.failed,
        "suite run finished"
    );
    Ok(RunSummary {
        totals,
        scenarios: outcomes.len(),
    })
}

/// Writes the combinations a run of `suite` would execute, one per line,
/// without running any clause body.
///
/// Returns the number of combinations listed.
///
/// # Errors
///
/// Returns `ClarifyError::Report` if the listing cannot be written.
pub fn plan_suite<W: Write>(suite: &Suite, out: &mut W) -> ClarifyResult<usize> {
    let plan = suite.plan();
    for (index, labels) in plan.iter().enumerate() {
        writeln!(
            out,
            "plan {} - GIVEN {} WHEN {} THEN {}",
            index.saturating_add(1),
            labels.given,
            labels.when,
            labels.then
        )
        .map_err(ReportError::from)?;
    }
    out.flush().map_err(ReportError::from)?;
    Ok(plan.len())
}
