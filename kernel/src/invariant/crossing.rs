//! Bounded crossing vector: one net crossing count per feature, clamped to
//! `{-1, 0, 1}`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

use super::InvariantError;

/// Per-feature crossing counts.
///
/// A count of magnitude two would mean the path winds twice around that
/// feature. `edge_cross` treats that as a degenerate class and rejects it
/// instead of storing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CrossingVector {
    counts: Vec<i8>,
}

impl CrossingVector {
    /// All-zero vector of `dim` features.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            counts: vec![0; dim],
        }
    }

    /// # Errors
    ///
    /// [`InvariantError::ValueOutOfRange`] if any count lies outside `[-1, 1]`.
    pub fn from_counts(counts: Vec<i8>) -> Result<Self, InvariantError> {
        if let Some((index, &value)) = counts
            .iter()
            .enumerate()
            .find(|(_, v)| !(-1..=1).contains(*v))
        {
            return Err(InvariantError::ValueOutOfRange {
                index,
                value: i64::from(value),
            });
        }
        Ok(Self { counts })
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i8] {
        &self.counts
    }

    /// # Errors
    ///
    /// [`InvariantError::IndexOutOfBounds`] past the last dimension.
    pub fn get(&self, index: usize) -> Result<i8, InvariantError> {
        self.counts
            .get(index)
            .copied()
            .ok_or(InvariantError::IndexOutOfBounds {
                index,
                dim: self.dim(),
            })
    }

    /// Overwrite one count.
    ///
    /// # Errors
    ///
    /// [`InvariantError::IndexOutOfBounds`] past the last dimension,
    /// [`InvariantError::ValueOutOfRange`] for a value outside `[-1, 1]`.
    pub fn set(&mut self, index: usize, value: i8) -> Result<(), InvariantError> {
        if !(-1..=1).contains(&value) {
            return Err(InvariantError::ValueOutOfRange {
                index,
                value: i64::from(value),
            });
        }
        let dim = self.dim();
        let slot = self
            .counts
            .get_mut(index)
            .ok_or(InvariantError::IndexOutOfBounds { index, dim })?;
        *slot = value;
        Ok(())
    }

    /// Record one crossing of feature `index`.
    ///
    /// `value` is clamped to `[-1, 1]` before it is added, and the sum is
    /// clamped again, so repeated same-direction crossings saturate at one.
    ///
    /// # Errors
    ///
    /// [`InvariantError::IndexOutOfBounds`] past the last dimension.
    pub fn cross(&mut self, index: usize, value: i32) -> Result<(), InvariantError> {
        let dim = self.dim();
        let slot = self
            .counts
            .get_mut(index)
            .ok_or(InvariantError::IndexOutOfBounds { index, dim })?;
        *slot = (*slot + unit(value)).clamp(-1, 1);
        Ok(())
    }

    /// Add an edge's per-feature fragment elementwise.
    ///
    /// Returns `false` when any count leaves `[-1, 1]`; the vector then holds
    /// the overflowed counts and must be discarded. An empty fragment is an
    /// edge that crosses nothing.
    pub fn edge_cross(&mut self, fragment: &[i8]) -> bool {
        if fragment.is_empty() {
            return true;
        }
        debug_assert_eq!(
            fragment.len(),
            self.counts.len(),
            "fragment dimension must match the invariant"
        );

        let mut valid = true;
        for (count, delta) in self.counts.iter_mut().zip(fragment) {
            *count = count.saturating_add(*delta);
            valid &= (-1..=1).contains(&*count);
        }
        valid
    }
}

fn unit(value: i32) -> i8 {
    match value.cmp(&0) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}

impl Neg for &CrossingVector {
    type Output = CrossingVector;

    fn neg(self) -> CrossingVector {
        CrossingVector {
            counts: self.counts.iter().map(|c| -c).collect(),
        }
    }
}

impl fmt::Display for CrossingVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, count) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{count}")?;
        }
        f.write_str("]")
    }
}
