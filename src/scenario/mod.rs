//! Scenario declarations.
//!
//! A scenario is one precondition (GIVEN) with nested action clauses (WHEN),
//! each holding one or more assertion clauses (THEN). The declaration is built
//! once into a tree; the traversal engine then walks that tree as many times as
//! it takes to run every WHEN/THEN combination exactly once.
//!
//! ```
//! use clarify::assertion::{require_equal_uint, ClauseResult};
//! use clarify::scenario::Scenario;
//!
//! # fn main() -> Result<(), clarify::error::DeclarationError> {
//! let scenario = Scenario::given("an empty stack", Vec::<u8>::new)
//!     .when(
//!         "a byte is pushed",
//!         |stack| {
//!             stack.push(7);
//!             Ok(())
//!         },
//!         |w| {
//!             w.then("the depth is one", |stack| {
//!                 require_equal_uint(1, stack.len() as u64)
//!             })
//!             .then("the byte is on top", |stack| {
//!                 clarify::assertion::require(stack.last() == Some(&7))
//!             })
//!         },
//!     )
//!     .build()?;
//! assert_eq!(scenario.assertion_count(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! The fixture returned by the GIVEN setup is rebuilt for every combination, so
//! each WHEN/THEN pair starts from the same precondition.

mod builder;


pub use builder::{ActionBuilder, ScenarioBuilder};

use crate::assertion::ClauseResult;
use crate::clause::ClauseId;

/// Builds the fixture a scenario's clauses operate on.
pub type Setup<S> = Box<dyn Fn() -> S>;

/// A WHEN action or THEN check run against the fixture.
pub type ClauseBody<S> = Box<dyn Fn(&mut S) -> ClauseResult>;

/// An assertion clause: one expected outcome to verify.
pub struct AssertionClause<S> {
    id: ClauseId,
    text: String,
    check: ClauseBody<S>,
}

impl<S> AssertionClause<S> {
    /// The clause identifier.
    #[must_use]
    pub const fn id(&self) -> ClauseId {
        self.id
    }

    /// The THEN description.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn check(&self, fixture: &mut S) -> ClauseResult {
        (self.check)(fixture)
    }
}

/// An action clause: one external action under the precondition.
pub struct ActionClause<S> {
    id: ClauseId,
    text: String,
    act: ClauseBody<S>,
    assertions: Vec<AssertionClause<S>>,
}

impl<S> ActionClause<S> {
    /// The clause identifier.
    #[must_use]
    pub const fn id(&self) -> ClauseId {
        self.id
    }

    /// The WHEN description.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The assertion clauses nested in this action, in authoring order.
    #[must_use]
    pub fn assertions(&self) -> &[AssertionClause<S>] {
        &self.assertions
    }

    pub(crate) fn act(&self, fixture: &mut S) -> ClauseResult {
        (self.act)(fixture)
    }
}

/// A validated scenario declaration.
pub struct Scenario<S> {
    given: String,
    setup: Setup<S>,
    actions: Vec<ActionClause<S>>,
}

impl<S> Scenario<S> {
    /// Starts declaring a scenario with its precondition.
    ///
    /// `setup` builds the fixture every combination starts from.
    pub fn given(text: impl Into<String>, setup: impl Fn() -> S + 'static) -> ScenarioBuilder<S> {
        ScenarioBuilder::new(text.into(), Box::new(setup))
    }

    /// The GIVEN description.
    #[must_use]
    pub fn given_text(&self) -> &str {
        &self.given
    }

    /// The action clauses, in authoring order.
    #[must_use]
    pub fn actions(&self) -> &[ActionClause<S>] {
        &self.actions
    }

    /// Number of assertion clauses across all actions.
    #[must_use]
    pub fn assertion_count(&self) -> usize {
        self.actions.iter().map(|action| action.assertions.len()).sum()
    }

    pub(crate) fn fixture(&self) -> S {
        (self.setup)()
    }
}
