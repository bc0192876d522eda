//! Scenario traversal engine.
//!
//! A scenario is walked repeatedly. Each pass enters one action clause and
//! runs at most one assertion clause that has not run before, skipping
//! everything else. The loop stops after the first pass that runs nothing new.
//!
//! # State machine
//!
//! A traversal is `Running` until a pass comes back idle, then `Done`. The
//! [`Cursor`] carries the decision state between passes:
//!
//! - `active_when`: the action clause to enter. Unset until the first switch,
//!   which means "enter whatever action clause the walk reaches".
//! - `highest_then_completed`: the last assertion clause to run. Assertion
//!   clauses at or below it are skipped.
//! - `new_assertion_ran`: set when a pass picks an assertion, cleared at the
//!   start of every pass.
//!
//! Because `highest_then_completed` strictly increases on every non-idle pass
//! and identifiers are finite, a scenario with `k` assertion clauses is done
//! after exactly `k + 1` passes.
//!
//! # Failures
//!
//! A failing check abandons the rest of its clause only. The walk has already
//! advanced past the failed assertion (and, where applicable, switched to the
//! next action clause) before the body runs, so sibling branches are always
//! enumerated.

mod state;
mod walker;


pub use state::{Cursor, RunState};
pub use walker::{Selection, walk};

use tracing::{debug, info};

use crate::error::ReportError;
use crate::report::{Labels, RunContext};
use crate::scenario::Scenario;

/// What a finished traversal did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOutcome {
    /// Passes over the scenario, including the final idle pass.
    pub passes: u32,
    /// Assertion clauses executed.
    pub executed: u32,
}

/// A scenario the engine can drive, independent of its fixture type.
pub trait Traverse {
    /// The GIVEN description.
    fn given(&self) -> &str;

    /// Runs every combination, reporting through `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if a result cannot be reported.
    fn traverse(&self, ctx: &mut RunContext<'_>) -> Result<TraversalOutcome, ReportError>;

    /// Lists the combinations a traversal would run, without running any
    /// clause body.
    fn plan(&self) -> Vec<Labels>;
}

impl<S> Traverse for Scenario<S> {
    fn given(&self) -> &str {
        self.given_text()
    }

    fn traverse(&self, ctx: &mut RunContext<'_>) -> Result<TraversalOutcome, ReportError> {
        let mut state = RunState::new(self.given_text());
        let mut outcome = TraversalOutcome::default();
        let failed_at_start = ctx.totals().failed;

        loop {
            outcome.passes = outcome.passes.saturating_add(1);
            let Some(selection) = walk(self.actions(), &mut state.cursor) else {
                debug!(pass = outcome.passes, "idle pass; traversal done");
                break;
            };
            debug!(
                pass = outcome.passes,
                when = %selection.action.id(),
                then = %selection.assertion.id(),
                "running combination"
            );
            outcome.executed = outcome.executed.saturating_add(1);
            run_selection(self, &selection, &mut state, ctx)?;
        }

        debug_assert_eq!(
            usize::try_from(outcome.executed).ok(),
            Some(self.assertion_count()),
            "every assertion clause should run exactly once"
        );
        debug_assert!(
            usize::try_from(outcome.passes)
                .is_ok_and(|passes| passes <= self.assertion_count().saturating_add(1)),
            "traversal took more than one idle pass"
        );
        info!(
            given = self.given_text(),
            passes = outcome.passes,
            executed = outcome.executed,
            failed = ctx.totals().failed.saturating_sub(failed_at_start),
            "scenario complete"
        );
        Ok(outcome)
    }

    fn plan(&self) -> Vec<Labels> {
        let mut cursor = Cursor::new();
        let mut combinations = Vec::with_capacity(self.assertion_count());
        while let Some(selection) = walk(self.actions(), &mut cursor) {
            combinations.push(Labels {
                given: self.given_text().to_owned(),
                when: selection.action.text().to_owned(),
                then: selection.assertion.text().to_owned(),
            });
        }
        combinations
    }
}

/// Executes one selected combination against a fresh fixture and reports it.
///
/// A success line is written only if the failure counter did not move while
/// the combination ran; a failure has already produced its own block.
fn run_selection<S>(
    scenario: &Scenario<S>,
    selection: &Selection<'_, S>,
    state: &mut RunState,
    ctx: &mut RunContext<'_>,
) -> Result<(), ReportError> {
    selection.action.text().clone_into(&mut state.labels.when);
    selection.assertion.text().clone_into(&mut state.labels.then);
    ctx.begin_test();
    let failed_before = ctx.totals().failed;

    let mut fixture = scenario.fixture();
    let result = selection
        .action
        .act(&mut fixture)
        .and_then(|()| selection.assertion.check(&mut fixture));
    if let Err(failure) = result {
        debug!(
            file = failure.file(),
            line = failure.line(),
            "combination failed"
        );
        ctx.record_failure(&state.labels, &failure)?;
    }

    if ctx.totals().failed == failed_before {
        ctx.record_pass(&state.labels)?;
    }
    Ok(())
}
