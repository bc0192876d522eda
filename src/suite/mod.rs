//! Collections of scenarios run as one test binary.

use tracing::info;

use crate::engine::{TraversalOutcome, Traverse};
use crate::error::ReportError;
use crate::report::{Labels, RunContext};
use crate::scenario::Scenario;


/// An ordered set of scenarios sharing one report.
///
/// Scenarios with different fixture types sit side by side; each is driven
/// through the [`Traverse`] trait.
pub struct Suite {
    name: String,
    scenarios: Vec<Box<dyn Traverse>>,
}

impl Suite {
    /// Creates an empty suite. The name appears in the report header.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scenarios: Vec::new(),
        }
    }

    /// Appends a scenario.
    #[must_use]
    pub fn scenario<S: 'static>(mut self, scenario: Scenario<S>) -> Self {
        self.scenarios.push(Box::new(scenario));
        self
    }

    /// The suite name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of scenarios.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the suite has no scenarios.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Traverses every scenario in declaration order.
    ///
    /// Header and summary are left to the caller so they can be switched off.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if a result cannot be reported.
    pub fn run(&self, ctx: &mut RunContext<'_>) -> Result<Vec<TraversalOutcome>, ReportError> {
        let mut outcomes = Vec::with_capacity(self.scenarios.len());
        for scenario in &self.scenarios {
            outcomes.push(scenario.traverse(ctx)?);
        }
        let totals = ctx.totals();
        info!(
            suite = %self.name,
            scenarios = self.scenarios.len(),
            total = totals.total,
            failed = totals.failed,
            "suite complete"
        );
        Ok(outcomes)
    }

    /// Lists every combination a run would execute.
    #[must_use]
    pub fn plan(&self) -> Vec<Labels> {
        self.scenarios
            .iter()
            .flat_map(|scenario| scenario.plan())
            .collect()
    }
}
