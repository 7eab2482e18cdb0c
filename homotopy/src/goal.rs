//! Goal specifications over augmented states.

use winding_kernel::graph::VertexId;
use winding_kernel::invariant::{CrossingVector, Invariant, InvariantError, ReducedWord};
use winding_search::contract::GoalPredicate;
use winding_search::error::SearchError;

use crate::augmented::AugmentedNode;

/// A partially specified crossing vector.
///
/// Dimensions whose mask bit is set must equal the target; the rest are
/// unconstrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedGoal {
    target: CrossingVector,
    mask: Vec<bool>,
}

impl MaskedGoal {
    /// Unconstrained goal over `dim` features.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            target: CrossingVector::new(dim),
            mask: vec![false; dim],
        }
    }

    /// # Errors
    ///
    /// [`InvariantError::DimensionMismatch`] if `mask` and `target` differ
    /// in length.
    pub fn from_parts(target: CrossingVector, mask: Vec<bool>) -> Result<Self, InvariantError> {
        if mask.len() != target.dim() {
            return Err(InvariantError::DimensionMismatch {
                expected: target.dim(),
                found: mask.len(),
            });
        }
        Ok(Self { target, mask })
    }

    /// Require dimension `index` to equal `value`.
    ///
    /// # Errors
    ///
    /// [`InvariantError::IndexOutOfBounds`] past the dimension, or
    /// [`InvariantError::ValueOutOfRange`] for a value outside [-1, 1].
    pub fn add_constraint(&mut self, index: usize, value: i8) -> Result<(), InvariantError> {
        self.target.set(index, value)?;
        self.mask[index] = true;
        Ok(())
    }

    /// Drop the constraint on dimension `index`.
    ///
    /// # Errors
    ///
    /// [`InvariantError::IndexOutOfBounds`] past the dimension.
    pub fn remove_constraint(&mut self, index: usize) -> Result<(), InvariantError> {
        self.target.set(index, 0)?;
        self.mask[index] = false;
        Ok(())
    }

    /// Builder form of [`MaskedGoal::add_constraint`].
    ///
    /// # Errors
    ///
    /// Same as [`MaskedGoal::add_constraint`].
    pub fn with_constraint(mut self, index: usize, value: i8) -> Result<Self, InvariantError> {
        self.add_constraint(index, value)?;
        Ok(self)
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.mask.len()
    }

    #[must_use]
    pub fn target(&self) -> &CrossingVector {
        &self.target
    }

    #[must_use]
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Whether `candidate` agrees with the target on every masked dimension.
    ///
    /// # Errors
    ///
    /// [`InvariantError::KindMismatch`] for a reduced word, and
    /// [`InvariantError::DimensionMismatch`] for a vector of another size.
    pub fn check_sign(&self, candidate: &Invariant) -> Result<bool, InvariantError> {
        self.matches(candidate.require_crossings()?)
    }

    /// # Errors
    ///
    /// [`InvariantError::DimensionMismatch`] for a vector of another size.
    pub fn matches(&self, candidate: &CrossingVector) -> Result<bool, InvariantError> {
        if candidate.dim() != self.dim() {
            return Err(InvariantError::DimensionMismatch {
                expected: self.dim(),
                found: candidate.dim(),
            });
        }
        Ok(self
            .mask
            .iter()
            .zip(self.target.as_slice().iter().zip(candidate.as_slice()))
            .all(|(&masked, (want, got))| !masked || want == got))
    }
}

/// Constraint on the invariant of a goal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureGoal {
    /// Any invariant of either representation.
    Any,
    /// Masked crossing-vector match. Crossing vectors only.
    Masked(MaskedGoal),
    /// Exact reduced-word match. Reduced words only.
    Word(ReducedWord),
}

impl SignatureGoal {
    /// # Errors
    ///
    /// [`InvariantError::KindMismatch`] when the goal and the candidate use
    /// different representations; dimension errors from
    /// [`MaskedGoal::check_sign`].
    pub fn check(&self, candidate: &Invariant) -> Result<bool, InvariantError> {
        match self {
            Self::Any => Ok(true),
            Self::Masked(goal) => goal.check_sign(candidate),
            Self::Word(word) => Ok(candidate.require_word()? == word),
        }
    }
}

/// Target vertex plus invariant constraint: the composite predicate
/// `state.vertex == vertex && signature.check(state.invariant)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomotopyGoal {
    pub vertex: VertexId,
    pub signature: SignatureGoal,
}

impl HomotopyGoal {
    /// Reach `vertex` in any class.
    #[must_use]
    pub fn at(vertex: VertexId) -> Self {
        Self {
            vertex,
            signature: SignatureGoal::Any,
        }
    }

    #[must_use]
    pub fn masked(vertex: VertexId, goal: MaskedGoal) -> Self {
        Self {
            vertex,
            signature: SignatureGoal::Masked(goal),
        }
    }

    #[must_use]
    pub fn word(vertex: VertexId, word: ReducedWord) -> Self {
        Self {
            vertex,
            signature: SignatureGoal::Word(word),
        }
    }
}

impl<'g> GoalPredicate<AugmentedNode<'g>> for HomotopyGoal {
    /// The signature is checked before the vertex so a malformed goal fails
    /// on the first state tested, not only on arrival.
    fn is_goal(&self, state: &AugmentedNode<'g>) -> Result<bool, SearchError> {
        let signature_holds = self.signature.check(state.invariant())?;
        Ok(signature_holds && state.vertex() == self.vertex)
    }
}
