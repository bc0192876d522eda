//! Per-scenario traversal state.

use crate::clause::ClauseId;
use crate::report::Labels;

/// Position of a traversal within a scenario's clause tree.
///
/// Both identifiers only ever move forward for the lifetime of one traversal.
/// The cursor never holds anything about clause bodies, so the same walk can
/// be replayed without running any of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    active_when: Option<ClauseId>,
    highest_then_completed: Option<ClauseId>,
    new_assertion_ran: bool,
}

impl Cursor {
    /// Creates a cursor positioned before every clause.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active_when: None,
            highest_then_completed: None,
            new_assertion_ran: false,
        }
    }

    /// The action clause selected for the current round, if one was switched to.
    #[must_use]
    pub const fn active_when(&self) -> Option<ClauseId> {
        self.active_when
    }

    /// The most recent assertion clause to run.
    #[must_use]
    pub const fn highest_then_completed(&self) -> Option<ClauseId> {
        self.highest_then_completed
    }

    /// Whether an assertion clause started during the current pass.
    #[must_use]
    pub const fn new_assertion_ran(&self) -> bool {
        self.new_assertion_ran
    }

    pub(crate) const fn begin_pass(&mut self) {
        self.new_assertion_ran = false;
    }

    /// Whether the walk should enter the action clause `id`.
    pub(crate) fn selects(&self, id: ClauseId) -> bool {
        self.active_when.is_none_or(|active| active == id)
    }

    /// Whether the assertion clause `id` ran in an earlier pass.
    pub(crate) fn completed(&self, id: ClauseId) -> bool {
        self.highest_then_completed
            .is_some_and(|highest| id <= highest)
    }

    pub(crate) fn start_assertion(&mut self, id: ClauseId) {
        debug_assert!(
            !self.completed(id),
            "assertion {id} would run twice in one traversal"
        );
        self.highest_then_completed = Some(id);
        self.new_assertion_ran = true;
    }

    pub(crate) fn switch_to(&mut self, id: ClauseId) {
        debug_assert!(
            self.active_when.is_none_or(|active| active < id),
            "action selection moved backwards to {id}"
        );
        self.active_when = Some(id);
    }
}

/// Everything a traversal tracks between passes.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    /// Where the walk stands.
    pub cursor: Cursor,
    /// Descriptions of the clauses most recently entered.
    pub labels: Labels,
}

impl RunState {
    /// Creates the state for a scenario with the given precondition text.
    #[must_use]
    pub fn new(given: &str) -> Self {
        Self {
            cursor: Cursor::new(),
            labels: Labels {
                given: given.to_owned(),
                ..Labels::default()
            },
        }
    }
}
