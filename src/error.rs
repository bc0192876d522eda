//! Semantic error types for clarify.
//!
//! Assertion failures are not errors: they are ordinary outcomes of a test
//! combination and travel as [`crate::assertion::Failure`] values. The types in
//! this module cover the conditions that stop a run from happening at all.
//! Opaque errors (`eyre::Report`) are reserved for the binary boundary.

use std::sync::Arc;

use thiserror::Error;

use crate::clause::ClauseId;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be parsed.
    #[error("failed to parse configuration file: {message}")]
    ParseError {
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// The name of the invalid field.
        field: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// The `OrthoConfig` library returned an error during configuration loading.
    ///
    /// This wraps errors from the layered configuration system, including
    /// file parsing errors and type mismatches discovered while merging layers.
    #[error("configuration loading failed: {0}")]
    OrthoConfig(Arc<ortho_config::OrthoError>),
}

/// Errors raised while building a scenario declaration.
///
/// The traversal engine relies on clause identifiers being unique and strictly
/// increasing in authoring order, so declarations that break that contract are
/// rejected before any clause runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// Two clauses in the same scenario share an identifier.
    #[error("clause identifier {id} is used more than once in scenario '{given}'")]
    DuplicateClauseId {
        /// The precondition text of the offending scenario.
        given: String,
        /// The repeated identifier.
        id: ClauseId,
    },

    /// A clause identifier is lower than one declared before it.
    #[error(
        "clause identifier {found} follows {previous} in scenario '{given}'; identifiers must increase in authoring order"
    )]
    ClauseOutOfOrder {
        /// The precondition text of the offending scenario.
        given: String,
        /// The identifier of the clause declared just before.
        previous: ClauseId,
        /// The identifier that broke the ordering.
        found: ClauseId,
    },

    /// An action clause declares no assertion clauses.
    #[error("WHEN '{when}' in scenario '{given}' has no THEN clauses")]
    EmptyAction {
        /// The precondition text of the offending scenario.
        given: String,
        /// The action clause text.
        when: String,
    },

    /// A GIVEN, WHEN or THEN description is empty.
    #[error("{clause} description is blank")]
    BlankDescription {
        /// Which clause keyword carried the blank text.
        clause: &'static str,
    },
}

/// Errors raised while writing the result stream.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The underlying writer rejected the output.
    #[error("failed to write test report: {message}")]
    Write {
        /// A description of the I/O failure.
        message: String,
    },
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        Self::Write {
            message: error.to_string(),
        }
    }
}

/// Top-level error type for clarify.
///
/// This enum aggregates all domain-specific errors into a single type. At the
/// binary boundary (main.rs), these errors are converted to `eyre::Report` for
/// human-readable error reporting.
#[derive(Debug, Error)]
pub enum ClarifyError {
    /// An error occurred during configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A scenario declaration was malformed.
    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    /// The report stream could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl From<std::io::Error> for ClarifyError {
    fn from(error: std::io::Error) -> Self {
        Self::Report(ReportError::from(error))
    }
}

/// A specialised `Result` type for clarify operations.
pub type Result<T> = std::result::Result<T, ClarifyError>;
