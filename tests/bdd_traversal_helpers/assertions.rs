//! Assertion steps for traversal behavioural tests.

use clarify::api::CommandOutcome;
use rstest_bdd_macros::then;

use super::StepResult;
use super::state::{RunRecord, TraversalState};

fn last_run(traversal_state: &TraversalState) -> StepResult<RunRecord> {
    traversal_state
        .runs
        .get()
        .and_then(|runs| runs.last().cloned())
        .ok_or_else(|| String::from("the suite should have been run"))
}

/// Result lines (`ok N - ...` or `not ok N - ...`) of a report.
fn result_lines(report: &str) -> Vec<&str> {
    report
        .lines()
        .filter(|line| line.starts_with("ok ") || line.starts_with("not ok "))
        .collect()
}

#[then("{count} results are reported")]
fn results_are_reported(traversal_state: &TraversalState, count: usize) -> StepResult<()> {
    let run = last_run(traversal_state)?;
    let found = result_lines(&run.report).len();
    if found == count {
        Ok(())
    } else {
        Err(format!(
            "expected {count} results, found {found}:\n{}",
            run.report
        ))
    }
}

#[then("every result shares the same GIVEN and WHEN")]
fn results_share_given_and_when(traversal_state: &TraversalState) -> StepResult<()> {
    let run = last_run(traversal_state)?;
    let givens: Vec<&str> = result_lines(&run.report)
        .into_iter()
        .filter_map(|line| line.split_once(" - ").map(|(_, given)| given))
        .collect();
    let whens: Vec<&str> = run
        .report
        .lines()
        .filter(|line| line.starts_with("\tWHEN "))
        .collect();
    let thens: Vec<&str> = run
        .report
        .lines()
        .filter(|line| line.starts_with("\tTHEN "))
        .collect();

    if givens.windows(2).any(|pair| pair.first() != pair.last()) {
        return Err(format!("GIVEN lines differ: {givens:?}"));
    }
    if whens.windows(2).any(|pair| pair.first() != pair.last()) {
        return Err(format!("WHEN lines differ: {whens:?}"));
    }
    if thens.windows(2).any(|pair| pair.first() == pair.last()) {
        return Err(format!("THEN lines should differ: {thens:?}"));
    }
    Ok(())
}

fn result_status(traversal_state: &TraversalState, number: u32) -> StepResult<bool> {
    let run = last_run(traversal_state)?;
    let passed = format!("ok {number} - ");
    let failed = format!("not ok {number} - ");
    result_lines(&run.report)
        .into_iter()
        .find_map(|line| {
            if line.starts_with(&passed) {
                Some(true)
            } else if line.starts_with(&failed) {
                Some(false)
            } else {
                None
            }
        })
        .ok_or_else(|| format!("no result numbered {number}:\n{}", run.report))
}

#[then("result {number} is a failure")]
fn result_is_failure(traversal_state: &TraversalState, number: u32) -> StepResult<()> {
    if result_status(traversal_state, number)? {
        Err(format!("result {number} passed, expected a failure"))
    } else {
        Ok(())
    }
}

#[then("result {number} is a success")]
fn result_is_success(traversal_state: &TraversalState, number: u32) -> StepResult<()> {
    if result_status(traversal_state, number)? {
        Ok(())
    } else {
        Err(format!("result {number} failed, expected a success"))
    }
}

#[then("the summary reports {failed} failed of {total}")]
fn summary_reports(traversal_state: &TraversalState, failed: u32, total: u32) -> StepResult<()> {
    let run = last_run(traversal_state)?;
    let expected = format!("#Failed: {failed}\n1..{total}\n");
    if run.report.ends_with(&expected) {
        Ok(())
    } else {
        Err(format!("report should end with {expected:?}:\n{}", run.report))
    }
}

#[then("the exit code is {code}")]
fn exit_code_is(traversal_state: &TraversalState, code: u8) -> StepResult<()> {
    let run = last_run(traversal_state)?;
    let actual = run.outcome.exit_code();
    match (code, run.outcome) {
        (0, CommandOutcome::Success) => Ok(()),
        (_, CommandOutcome::TestsFailed { .. }) if actual == code => Ok(()),
        _ => Err(format!("expected exit code {code}, got {actual}")),
    }
}

#[then("both reports are identical")]
fn reports_are_identical(traversal_state: &TraversalState) -> StepResult<()> {
    let runs = traversal_state.runs.get().unwrap_or_default();
    match runs.as_slice() {
        [first, second] if first == second => Ok(()),
        [first, second] => Err(format!(
            "reports differ:\n{}\n---\n{}",
            first.report, second.report
        )),
        other => Err(format!("expected two runs, found {}", other.len())),
    }
}

#[then("{count} combinations are listed")]
fn combinations_are_listed(traversal_state: &TraversalState, count: usize) -> StepResult<()> {
    let listed = traversal_state
        .listed
        .get()
        .ok_or_else(|| String::from("the suite should have been planned"))?;
    if listed == count {
        Ok(())
    } else {
        Err(format!("expected {count} combinations, listed {listed}"))
    }
}

#[then("no clause body ran")]
fn no_clause_body_ran(traversal_state: &TraversalState) -> StepResult<()> {
    match traversal_state.bodies_run.get() {
        Some(0) => Ok(()),
        Some(count) => Err(format!("{count} clause bodies ran while planning")),
        None => Err(String::from("body counter should be set")),
    }
}
