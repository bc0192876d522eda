//! Clause identifiers.
//!
//! Every WHEN and THEN clause in a scenario carries a [`ClauseId`]. The only
//! contract the traversal engine relies on is that identifiers are unique
//! within a scenario and strictly increase in the order the clauses are
//! authored. Identifiers from different scenarios are never compared.
//!
//! An identifier is an ordered pair of a label and an ordinal. Two schemes
//! fill it in, and they may be mixed within a scenario:
//!
//! - positional labels supplied by the caller, typically the source line via
//!   [`clause_id!`](crate::clause_id), recorded with
//!   [`ClauseIdAllocator::claim`]. These have ordinal zero.
//! - automatic numbering through [`ClauseIdAllocator::allocate`], used by the
//!   plain `when`/`then` builder methods. These keep the label of the last
//!   identifier issued and take the next ordinal under it.
//!
//! Automatic identifiers therefore sit between the label before them and the
//! next label, so a claimed label only has to exceed the previous claimed one.

use std::fmt;


/// Identifier of an action or assertion clause within one scenario.
///
/// Ordered by label, then by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseId {
    label: u32,
    ordinal: u32,
}

impl ClauseId {
    /// Creates an identifier from a positional label.
    #[must_use]
    pub const fn new(label: u32) -> Self {
        Self { label, ordinal: 0 }
    }

    /// Creates the identifier numbered `ordinal` under `label`.
    #[must_use]
    pub const fn numbered(label: u32, ordinal: u32) -> Self {
        Self { label, ordinal }
    }

    /// Returns the positional label.
    #[must_use]
    pub const fn label(self) -> u32 {
        self.label
    }

    /// Returns the automatic ordinal under the label; zero for a claimed label.
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self.ordinal
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.label, self.ordinal) {
            (label, 0) => write!(f, "{label}"),
            (0, ordinal) => write!(f, "{ordinal}"),
            (label, ordinal) => write!(f, "{label}.{ordinal}"),
        }
    }
}

/// Builds a [`ClauseId`] from the line the macro is expanded on.
///
/// ```
/// use clarify::clause::ClauseId;
///
/// let id: ClauseId = clarify::clause_id!();
/// assert_eq!(id.label(), line!() - 1);
/// assert_eq!(id.ordinal(), 0);
/// ```
#[macro_export]
macro_rules! clause_id {
    () => {
        $crate::clause::ClauseId::new(::core::line!())
    };
}

/// Hands out clause identifiers for one scenario.
///
/// An automatic identifier is numbered under the highest identifier seen so
/// far, whether that identifier was allocated or claimed. It stays below any
/// larger label claimed afterwards.
#[derive(Debug, Default)]
pub struct ClauseIdAllocator {
    highest: Option<ClauseId>,
}

impl ClauseIdAllocator {
    /// Creates an allocator that has not issued any identifier.
    #[must_use]
    pub const fn new() -> Self {
        Self { highest: None }
    }

    /// Returns the next automatic identifier.
    pub fn allocate(&mut self) -> ClauseId {
        let id = self.highest.map_or(ClauseId::numbered(0, 1), |last| {
            ClauseId::numbered(last.label, last.ordinal.saturating_add(1))
        });
        self.highest = Some(id);
        id
    }

    /// Records a caller-supplied identifier and returns it unchanged.
    ///
    /// Ordering is not checked here; the scenario builder validates the full
    /// declaration once all clauses are known.
    pub fn claim(&mut self, id: ClauseId) -> ClauseId {
        self.highest = Some(self.highest.map_or(id, |last| last.max(id)));
        id
    }

    /// Returns the highest identifier issued or claimed so far.
    #[must_use]
    pub const fn highest(&self) -> Option<ClauseId> {
        self.highest
    }
}
