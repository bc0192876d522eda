//! Builders for scenario declarations.

use crate::assertion::ClauseResult;
use crate::clause::{ClauseId, ClauseIdAllocator};
use crate::error::DeclarationError;

use super::{ActionClause, AssertionClause, ClauseBody, Scenario, Setup};

/// Declares the action clauses of a scenario.
///
/// Created by [`Scenario::given`]. Clause identifiers are numbered
/// automatically by [`when`](Self::when) and [`ActionBuilder::then`]; the
/// `*_at` variants take explicit identifiers such as
/// [`clause_id!`](crate::clause_id). Nothing is checked until
/// [`build`](Self::build).
pub struct ScenarioBuilder<S> {
    given: String,
    setup: Setup<S>,
    actions: Vec<ActionClause<S>>,
    ids: ClauseIdAllocator,
}

impl<S> ScenarioBuilder<S> {
    pub(super) fn new(given: String, setup: Setup<S>) -> Self {
        Self {
            given,
            setup,
            actions: Vec::new(),
            ids: ClauseIdAllocator::new(),
        }
    }

    /// Adds an action clause with an automatically numbered identifier.
    ///
    /// `act` runs against a fresh fixture before the selected THEN check;
    /// `clauses` declares the THEN clauses nested in this action.
    #[must_use]
    pub fn when<A, F>(mut self, text: impl Into<String>, act: A, clauses: F) -> Self
    where
        A: Fn(&mut S) -> ClauseResult + 'static,
        F: FnOnce(ActionBuilder<S>) -> ActionBuilder<S>,
    {
        let id = self.ids.allocate();
        self.push_action(id, text.into(), Box::new(act), clauses);
        self
    }

    /// Adds an action clause with an explicit identifier.
    #[must_use]
    pub fn when_at<A, F>(
        mut self,
        id: ClauseId,
        text: impl Into<String>,
        act: A,
        clauses: F,
    ) -> Self
    where
        A: Fn(&mut S) -> ClauseResult + 'static,
        F: FnOnce(ActionBuilder<S>) -> ActionBuilder<S>,
    {
        let claimed = self.ids.claim(id);
        self.push_action(claimed, text.into(), Box::new(act), clauses);
        self
    }

    fn push_action<F>(&mut self, id: ClauseId, text: String, act: ClauseBody<S>, clauses: F)
    where
        F: FnOnce(ActionBuilder<S>) -> ActionBuilder<S>,
    {
        let nested = clauses(ActionBuilder {
            ids: std::mem::take(&mut self.ids),
            assertions: Vec::new(),
        });
        self.ids = nested.ids;
        self.actions.push(ActionClause {
            id,
            text,
            act,
            assertions: nested.assertions,
        });
    }

    /// Validates the declaration and produces the scenario.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError`] when a description is blank, an action
    /// declares no assertions, or clause identifiers are not strictly
    /// increasing in authoring order.
    pub fn build(self) -> Result<Scenario<S>, DeclarationError> {
        if self.given.trim().is_empty() {
            return Err(DeclarationError::BlankDescription { clause: "GIVEN" });
        }

        let mut previous: Option<ClauseId> = None;
        for action in &self.actions {
            if action.text.trim().is_empty() {
                return Err(DeclarationError::BlankDescription { clause: "WHEN" });
            }
            if action.assertions.is_empty() {
                return Err(DeclarationError::EmptyAction {
                    given: self.given.clone(),
                    when: action.text.clone(),
                });
            }
            check_order(&self.given, previous, action.id)?;
            previous = Some(action.id);

            for assertion in &action.assertions {
                if assertion.text.trim().is_empty() {
                    return Err(DeclarationError::BlankDescription { clause: "THEN" });
                }
                check_order(&self.given, previous, assertion.id)?;
                previous = Some(assertion.id);
            }
        }

        Ok(Scenario {
            given: self.given,
            setup: self.setup,
            actions: self.actions,
        })
    }
}

/// Rejects an identifier that does not strictly follow its predecessor.
fn check_order(
    given: &str,
    previous: Option<ClauseId>,
    found: ClauseId,
) -> Result<(), DeclarationError> {
    match previous {
        Some(last) if last == found => Err(DeclarationError::DuplicateClauseId {
            given: given.to_owned(),
            id: found,
        }),
        Some(last) if last > found => Err(DeclarationError::ClauseOutOfOrder {
            given: given.to_owned(),
            previous: last,
            found,
        }),
        _ => Ok(()),
    }
}

/// Declares the assertion clauses nested in one action clause.
pub struct ActionBuilder<S> {
    ids: ClauseIdAllocator,
    assertions: Vec<AssertionClause<S>>,
}

impl<S> ActionBuilder<S> {
    /// Adds an assertion clause with an automatically numbered identifier.
    #[must_use]
    pub fn then<C>(mut self, text: impl Into<String>, check: C) -> Self
    where
        C: Fn(&mut S) -> ClauseResult + 'static,
    {
        let id = self.ids.allocate();
        self.assertions.push(AssertionClause {
            id,
            text: text.into(),
            check: Box::new(check),
        });
        self
    }

    /// Adds an assertion clause with an explicit identifier.
    #[must_use]
    pub fn then_at<C>(mut self, id: ClauseId, text: impl Into<String>, check: C) -> Self
    where
        C: Fn(&mut S) -> ClauseResult + 'static,
    {
        let claimed = self.ids.claim(id);
        self.assertions.push(AssertionClause {
            id: claimed,
            text: text.into(),
            check: Box::new(check),
        });
        self
    }
}
