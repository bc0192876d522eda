//! The failure value carried out of a clause.

use std::panic::Location;

/// The comparison that failed, with the values it compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// A boolean requirement was false.
    Require,
    /// Signed integers differed.
    Int {
        /// The expected value.
        expected: i64,
        /// The observed value.
        actual: i64,
    },
    /// Unsigned integers differed.
    Uint {
        /// The expected value.
        expected: u64,
        /// The observed value.
        actual: u64,
    },
    /// Bytes differed.
    Byte {
        /// The expected byte.
        expected: u8,
        /// The observed byte.
        actual: u8,
    },
    /// Strings differed.
    Str {
        /// The expected string.
        expected: String,
        /// The observed string.
        actual: String,
    },
    /// Byte ranges differed.
    Memory {
        /// Number of bytes compared.
        size: usize,
        /// Offset of the first differing byte.
        offset: usize,
    },
    /// A clause failed for a reason of its own.
    Message(String),
}

impl FailureKind {
    /// Renders the expected and actual values, if this kind compares values.
    #[must_use]
    pub fn rendered_values(&self) -> Option<(String, String)> {
        match self {
            Self::Int { expected, actual } => Some((expected.to_string(), actual.to_string())),
            Self::Uint { expected, actual } => Some((expected.to_string(), actual.to_string())),
            Self::Byte { expected, actual } => {
                Some((format!("0x{expected:02x}"), format!("0x{actual:02x}")))
            }
            Self::Str { expected, actual } => Some((expected.clone(), actual.clone())),
            Self::Require | Self::Memory { .. } | Self::Message(_) => None,
        }
    }

    /// A free-form note for kinds that carry one.
    #[must_use]
    pub fn note(&self) -> Option<String> {
        match self {
            Self::Memory { size, offset } => Some(format!(
                "first of {size} bytes to differ is at offset {offset}"
            )),
            Self::Message(message) => Some(message.clone()),
            _ => None,
        }
    }
}

/// A failed check inside a clause body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    kind: FailureKind,
    location: &'static Location<'static>,
}

impl Failure {
    /// Creates a failure located at the caller.
    #[must_use]
    #[track_caller]
    pub const fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
        }
    }

    /// Creates a failure with a free-form reason.
    #[must_use]
    #[track_caller]
    pub fn message(reason: impl Into<String>) -> Self {
        Self::new(FailureKind::Message(reason.into()))
    }

    /// The comparison that failed.
    #[must_use]
    pub const fn kind(&self) -> &FailureKind {
        &self.kind
    }

    /// Source file of the failing check.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.location.file()
    }

    /// Source line of the failing check.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.location.line()
    }
}
