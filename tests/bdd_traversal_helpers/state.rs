//! Scenario state for traversal behavioural tests.

use clarify::api::CommandOutcome;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Which declaration the scenario under test uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// One WHEN with two passing THENs.
    OneActionTwoChecks,
    /// Two WHENs with one THEN each; the first THEN fails.
    FirstBranchFails,
    /// Three WHENs with one THEN each; the middle THEN fails.
    MiddleBranchFails,
    /// A GIVEN with no WHEN at all.
    Empty,
}

/// One captured run of the suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunRecord {
    pub(crate) report: String,
    pub(crate) outcome: CommandOutcome,
}

#[derive(Default, ScenarioState)]
pub(crate) struct TraversalState {
    pub(crate) shape: Slot<Shape>,
    pub(crate) runs: Slot<Vec<RunRecord>>,
    pub(crate) listed: Slot<usize>,
    pub(crate) bodies_run: Slot<u32>,
}

#[fixture]
pub(crate) fn traversal_state() -> TraversalState {
    let state = TraversalState::default();
    state.runs.set(Vec::new());
    state.bodies_run.set(0);
    state
}
