//! The per-pass clause walk.

use tracing::{debug, trace};

use crate::scenario::{ActionClause, AssertionClause};

use super::state::Cursor;

/// The combination a pass selected.
pub struct Selection<'s, S> {
    /// The entered action clause.
    pub action: &'s ActionClause<S>,
    /// The assertion clause to run.
    pub assertion: &'s AssertionClause<S>,
}

/// Walks the clause tree once, in authoring order, and decides what this pass
/// runs.
///
/// The walk enters the selected action clause and picks the first assertion
/// clause inside it that has not run yet. Once an assertion is picked the pass
/// is terminal: the next assertion clause ends the walk, and the next action
/// clause becomes the selection for the following pass before the walk ends.
/// Returns `None` when nothing was left to run.
pub fn walk<'s, S>(
    actions: &'s [ActionClause<S>],
    cursor: &mut Cursor,
) -> Option<Selection<'s, S>> {
    cursor.begin_pass();
    let mut selected: Option<Selection<'s, S>> = None;

    for action in actions {
        if selected.is_some() {
            debug!(when = %action.id(), "switching to next action clause");
            cursor.switch_to(action.id());
            return selected;
        }
        if !cursor.selects(action.id()) {
            trace!(when = %action.id(), "skipping unselected action clause");
            continue;
        }

        for assertion in action.assertions() {
            if selected.is_some() {
                return selected;
            }
            if cursor.completed(assertion.id()) {
                trace!(then = %assertion.id(), "skipping completed assertion clause");
                continue;
            }
            cursor.start_assertion(assertion.id());
            selected = Some(Selection { action, assertion });
        }
    }

    selected
}
