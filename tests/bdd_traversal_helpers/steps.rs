//! Given/when steps for traversal scenarios.

use std::cell::Cell;
use std::rc::Rc;

use clarify::api::{plan_suite, run_suite};
use clarify::assertion::{ClauseResult, require};
use clarify::config::AppConfig;
use clarify::scenario::Scenario;
use clarify::suite::Suite;
use rstest_bdd_macros::{given, when};

use super::StepResult;
use super::state::{RunRecord, Shape, TraversalState};

/// Helper: a clause body that counts its invocation and then passes or fails.
fn counted(bodies: &Rc<Cell<u32>>, pass: bool) -> impl Fn(&mut ()) -> ClauseResult + 'static {
    let counter = Rc::clone(bodies);
    move |_: &mut ()| {
        counter.set(counter.get().saturating_add(1));
        require(pass)
    }
}

/// Helper: builds the suite for `shape`, counting clause bodies in `bodies`.
fn build_suite(shape: Shape, bodies: &Rc<Cell<u32>>) -> StepResult<Suite> {
    let given = Scenario::given("a unit fixture", || ());
    let builder = match shape {
        Shape::OneActionTwoChecks => given.when("the action runs", counted(bodies, true), |w| {
            w.then("the first check holds", counted(bodies, true))
                .then("the second check holds", counted(bodies, true))
        }),
        Shape::FirstBranchFails => given
            .when("the first action runs", counted(bodies, true), |w| {
                w.then("its check fails", counted(bodies, false))
            })
            .when("the second action runs", counted(bodies, true), |w| {
                w.then("its check holds", counted(bodies, true))
            }),
        Shape::MiddleBranchFails => given
            .when("the first action runs", counted(bodies, true), |w| {
                w.then("its check holds", counted(bodies, true))
            })
            .when("the middle action runs", counted(bodies, true), |w| {
                w.then("its check fails", counted(bodies, false))
            })
            .when("the last action runs", counted(bodies, true), |w| {
                w.then("its check holds", counted(bodies, true))
            }),
        Shape::Empty => given,
    };
    let scenario = builder.build().map_err(|e| e.to_string())?;
    Ok(Suite::new("traversal").scenario(scenario))
}

fn shape_of(traversal_state: &TraversalState) -> StepResult<Shape> {
    traversal_state
        .shape
        .get()
        .ok_or_else(|| String::from("a scenario shape should be chosen first"))
}

/// Helper: runs the suite once and appends the captured report to state.
fn run_once(traversal_state: &TraversalState) -> StepResult<()> {
    let bodies = Rc::new(Cell::new(0));
    let suite = build_suite(shape_of(traversal_state)?, &bodies)?;
    let mut out = Vec::new();
    let summary =
        run_suite(&suite, &AppConfig::default(), &mut out).map_err(|e| e.to_string())?;
    let report = String::from_utf8(out).map_err(|e| e.to_string())?;

    let mut runs = traversal_state.runs.get().unwrap_or_default();
    runs.push(RunRecord {
        report,
        outcome: summary.outcome(),
    });
    traversal_state.runs.set(runs);
    traversal_state.bodies_run.set(bodies.get());
    Ok(())
}

#[given("a scenario with one action and two passing checks")]
fn given_one_action_two_checks(traversal_state: &TraversalState) {
    traversal_state.shape.set(Shape::OneActionTwoChecks);
}

#[given("a scenario with two actions whose first check fails")]
fn given_first_branch_fails(traversal_state: &TraversalState) {
    traversal_state.shape.set(Shape::FirstBranchFails);
}

#[given("a scenario with three actions whose middle check fails")]
fn given_middle_branch_fails(traversal_state: &TraversalState) {
    traversal_state.shape.set(Shape::MiddleBranchFails);
}

#[given("a scenario with no clauses")]
fn given_no_clauses(traversal_state: &TraversalState) {
    traversal_state.shape.set(Shape::Empty);
}

#[when("the suite is run")]
fn when_suite_is_run(traversal_state: &TraversalState) -> StepResult<()> {
    run_once(traversal_state)
}

#[when("the suite is run twice")]
fn when_suite_is_run_twice(traversal_state: &TraversalState) -> StepResult<()> {
    run_once(traversal_state)?;
    run_once(traversal_state)
}

#[when("the suite is planned")]
fn when_suite_is_planned(traversal_state: &TraversalState) -> StepResult<()> {
    let bodies = Rc::new(Cell::new(0));
    let suite = build_suite(shape_of(traversal_state)?, &bodies)?;
    let mut out = Vec::new();
    let listed = plan_suite(&suite, &mut out).map_err(|e| e.to_string())?;
    traversal_state.listed.set(listed);
    traversal_state.bodies_run.set(bodies.get());
    Ok(())
}
