//! Assertion primitives for clause bodies.
//!
//! Every primitive returns a [`ClauseResult`]. On success control simply falls
//! through; on failure the primitive hands back a [`Failure`] that records the
//! comparison and the caller's source location. Clause bodies propagate it with
//! `?`, which abandons the remainder of that clause and nothing else:
//!
//! ```
//! use clarify::assertion::{ClauseResult, require, require_equal_uint};
//!
//! fn check(len: u64) -> ClauseResult {
//!     require_equal_uint(1, len)?;
//!     require(len > 0)
//! }
//!
//! assert!(check(1).is_ok());
//! assert!(check(2).is_err());
//! ```
//!
//! The traversal engine never looks at the failure kind. The kinds only exist
//! so the reporter can render expected and actual values in a representation
//! suited to the comparison.

mod failure;


pub use failure::{Failure, FailureKind};

/// Outcome of a clause body.
pub type ClauseResult = Result<(), Failure>;

/// Requires that `condition` holds.
///
/// # Errors
///
/// Returns a [`FailureKind::Require`] failure when `condition` is false.
#[track_caller]
pub fn require(condition: bool) -> ClauseResult {
    if condition {
        Ok(())
    } else {
        Err(Failure::new(FailureKind::Require))
    }
}

/// Requires two signed integers to be equal; values render in decimal.
///
/// # Errors
///
/// Returns a [`FailureKind::Int`] failure when the values differ.
#[track_caller]
pub fn require_equal_int(expected: i64, actual: i64) -> ClauseResult {
    if expected == actual {
        Ok(())
    } else {
        Err(Failure::new(FailureKind::Int { expected, actual }))
    }
}

/// Requires two unsigned integers to be equal; values render in decimal.
///
/// # Errors
///
/// Returns a [`FailureKind::Uint`] failure when the values differ.
#[track_caller]
pub fn require_equal_uint(expected: u64, actual: u64) -> ClauseResult {
    if expected == actual {
        Ok(())
    } else {
        Err(Failure::new(FailureKind::Uint { expected, actual }))
    }
}

/// Requires two bytes to be equal; values render as two-digit hex.
///
/// # Errors
///
/// Returns a [`FailureKind::Byte`] failure when the bytes differ.
#[track_caller]
pub fn require_equal_byte(expected: u8, actual: u8) -> ClauseResult {
    if expected == actual {
        Ok(())
    } else {
        Err(Failure::new(FailureKind::Byte { expected, actual }))
    }
}

/// Requires two strings to be equal.
///
/// # Errors
///
/// Returns a [`FailureKind::Str`] failure when the strings differ.
#[track_caller]
pub fn require_equal_string(expected: &str, actual: &str) -> ClauseResult {
    if expected == actual {
        Ok(())
    } else {
        Err(Failure::new(FailureKind::Str {
            expected: expected.to_owned(),
            actual: actual.to_owned(),
        }))
    }
}

/// Requires the first `size` bytes of two buffers to be equal.
///
/// A buffer shorter than `size` fails the comparison; its missing bytes count
/// as differing from whatever the other buffer holds at that offset.
///
/// # Errors
///
/// Returns a [`FailureKind::Memory`] failure naming the first differing offset.
#[track_caller]
pub fn require_equal_memory(expected: &[u8], actual: &[u8], size: usize) -> ClauseResult {
    let first_difference = (0..size).find(|&offset| {
        expected
            .get(offset)
            .zip(actual.get(offset))
            .is_none_or(|(left, right)| left != right)
    });
    let Some(offset) = first_difference else {
        return Ok(());
    };
    Err(Failure::new(FailureKind::Memory { size, offset }))
}
