//! GIVEN/WHEN/THEN scenario traversal with TAP-like reporting.
//!
//! `clarify` runs behaviour-driven unit tests written as a tree: a scenario
//! states a precondition (GIVEN), branches into actions (WHEN), and each
//! action branches into checks (THEN). Every root-to-leaf path is executed
//! exactly once against a freshly built fixture, and each path is reported as
//! one numbered result.
//!
//! # Architecture
//!
//! Scenarios are declared once with [`scenario::Scenario::given`] and
//! validated when built. The engine then walks the declaration repeatedly:
//! each pass enters one action and runs at most one check that has not run
//! yet. Results flow through an explicit [`report::RunContext`], so counters
//! never leak between runs.
//!
//! # Modules
//!
//! - [`api`]: Run and plan orchestration used by the CLI and test binaries
//! - [`assertion`]: Check primitives and failure descriptions
//! - [`clause`]: Clause identifiers and their allocation
//! - [`config`]: Configuration system with layered precedence (CLI > env > file > defaults)
//! - [`demo`]: The bundled ring buffer suite
//! - [`engine`]: The traversal state machine
//! - [`error`]: Semantic error types for the application
//! - [`report`]: Result reporting and the TAP-like stream format
//! - [`scenario`]: The declarative scenario tree and its builders
//! - [`suite`]: Ordered collections of scenarios

pub mod api;
pub mod assertion;
pub mod clause;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod report;
pub mod scenario;
pub mod suite;
