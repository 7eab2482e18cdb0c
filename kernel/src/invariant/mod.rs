//! Topological invariants: values summarizing which side of which feature a
//! path has passed.
//!
//! Two representations share one contract:
//!
//! - [`CrossingVector`] -- one clamped crossing count per feature; order-free.
//! - [`ReducedWord`] -- ordered signed feature symbols with free-group
//!   cancellation.
//!
//! Both are plain values. `Clone` is the independent copy; `edge_cross`
//! mutates in place and reports whether the extended path is still a
//! distinct, non-degenerate class. Callers clone before crossing so ancestor
//! values shared by many search nodes are never touched.

pub mod crossing;
pub mod fragment;
pub mod word;

use std::fmt;

pub use crossing::CrossingVector;
pub use fragment::EdgeFragment;
pub use word::{ReducedWord, Symbol};

/// Which representation an [`Invariant`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    Crossings,
    Word,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Crossings => f.write_str("crossing vector"),
            Self::Word => f.write_str("reduced word"),
        }
    }
}

/// Caller misuse of an invariant. Never produced by a rejected transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    /// A dimension index past the declared dimensionality.
    #[error("invariant index {index} out of bounds for dimension {dim}")]
    IndexOutOfBounds { index: usize, dim: usize },
    /// An invariant whose dimension disagrees with the feature set.
    #[error("invariant dimension {found} does not match {expected} features")]
    DimensionMismatch { expected: usize, found: usize },
    /// A crossing count outside `[-1, 1]`.
    #[error("crossing value {value} at index {index} outside [-1, 1]")]
    ValueOutOfRange { index: usize, value: i64 },
    /// Symbol ids are signed feature numbers and must be nonzero.
    #[error("reduced word symbols must be nonzero")]
    ZeroSymbol,
    /// The operation needs the other representation.
    #[error("expected a {expected} invariant, found a {found}")]
    KindMismatch {
        expected: InvariantKind,
        found: InvariantKind,
    },
}

/// A topological invariant in either representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Invariant {
    Crossings(CrossingVector),
    Word(ReducedWord),
}

impl Invariant {
    /// All-zero crossing vector of `dim` features.
    #[must_use]
    pub fn crossings(dim: usize) -> Self {
        Self::Crossings(CrossingVector::new(dim))
    }

    /// The empty word.
    #[must_use]
    pub fn word() -> Self {
        Self::Word(ReducedWord::new())
    }

    #[must_use]
    pub fn kind(&self) -> InvariantKind {
        match self {
            Self::Crossings(_) => InvariantKind::Crossings,
            Self::Word(_) => InvariantKind::Word,
        }
    }

    /// Extend by one edge. `false` means the transition is invalid and the
    /// value must be discarded.
    pub fn edge_cross(&mut self, fragment: &EdgeFragment) -> bool {
        match self {
            Self::Crossings(vector) => vector.edge_cross(fragment.crossings()),
            Self::Word(word) => word.edge_cross(fragment.word()),
        }
    }

    #[must_use]
    pub fn as_crossings(&self) -> Option<&CrossingVector> {
        match self {
            Self::Crossings(vector) => Some(vector),
            Self::Word(_) => None,
        }
    }

    #[must_use]
    pub fn as_word(&self) -> Option<&ReducedWord> {
        match self {
            Self::Word(word) => Some(word),
            Self::Crossings(_) => None,
        }
    }

    /// # Errors
    ///
    /// [`InvariantError::KindMismatch`] if this is a reduced word.
    pub fn require_crossings(&self) -> Result<&CrossingVector, InvariantError> {
        self.as_crossings().ok_or(InvariantError::KindMismatch {
            expected: InvariantKind::Crossings,
            found: self.kind(),
        })
    }

    /// # Errors
    ///
    /// [`InvariantError::KindMismatch`] if this is a crossing vector.
    pub fn require_word(&self) -> Result<&ReducedWord, InvariantError> {
        self.as_word().ok_or(InvariantError::KindMismatch {
            expected: InvariantKind::Word,
            found: self.kind(),
        })
    }

    /// Check that a crossing vector spans exactly `features` dimensions.
    /// Words have no fixed dimension and always pass.
    ///
    /// # Errors
    ///
    /// [`InvariantError::DimensionMismatch`] on disagreement.
    pub fn check_dimension(&self, features: usize) -> Result<(), InvariantError> {
        match self {
            Self::Crossings(vector) if vector.dim() != features => {
                Err(InvariantError::DimensionMismatch {
                    expected: features,
                    found: vector.dim(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl From<CrossingVector> for Invariant {
    fn from(vector: CrossingVector) -> Self {
        Self::Crossings(vector)
    }
}

impl From<ReducedWord> for Invariant {
    fn from(word: ReducedWord) -> Self {
        Self::Word(word)
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Crossings(vector) => vector.fmt(f),
            Self::Word(word) => word.fmt(f),
        }
    }
}
