//! Reduced word: the order-sensitive invariant.
//!
//! A symbol `+k` records crossing feature `k`'s reference ray in the
//! positive direction, `-k` the negative one. Features are numbered from 1
//! so the sign always carries the direction. Adjacent inverse symbols
//! cancel, as in a free group.

use std::collections::HashSet;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use super::InvariantError;

/// A signed, nonzero feature number.
pub type Symbol = i32;

/// Symbol for crossing the feature at zero-based `index` with `sign`.
///
/// Returns `None` for a zero sign (no crossing).
#[must_use]
pub fn feature_symbol(index: usize, sign: i8) -> Option<Symbol> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let id = (index + 1) as Symbol;
    match sign {
        0 => None,
        s if s > 0 => Some(id),
        _ => Some(-id),
    }
}

/// A freely reduced sequence of signed symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ReducedWord {
    symbols: Vec<Symbol>,
}

impl ReducedWord {
    /// The empty word.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap symbols as given. No reduction is applied.
    ///
    /// # Errors
    ///
    /// [`InvariantError::ZeroSymbol`] if any symbol is zero.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self, InvariantError> {
        if symbols.contains(&0) {
            return Err(InvariantError::ZeroSymbol);
        }
        Ok(Self { symbols })
    }

    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Record one crossing of feature `id` with direction `sign`.
    ///
    /// Pops the last symbol if it is the inverse crossing, appends otherwise.
    /// A zero `sign` records nothing.
    ///
    /// # Errors
    ///
    /// [`InvariantError::ZeroSymbol`] if `id` is zero.
    pub fn cross(&mut self, id: Symbol, sign: i32) -> Result<(), InvariantError> {
        if id == 0 {
            return Err(InvariantError::ZeroSymbol);
        }
        let symbol = match sign {
            0 => return Ok(()),
            s if s > 0 => id,
            _ => -id,
        };
        if self.symbols.last() == Some(&-symbol) {
            self.symbols.pop();
        } else {
            self.symbols.push(symbol);
        }
        Ok(())
    }

    /// Append an edge's ordered sub-word.
    ///
    /// Cancels across the junction first. If the first surviving incoming
    /// symbol repeats the current last symbol, the path passes the same ray
    /// twice in a row, and the transition is rejected with `false`. The
    /// word may already be partly cancelled at that point and must be
    /// discarded.
    pub fn edge_cross(&mut self, fragment: &[Symbol]) -> bool {
        let consumed = self.cancel_junction(fragment);
        if let Some(next) = fragment.get(consumed) {
            if self.symbols.last() == Some(next) {
                return false;
            }
            self.symbols.extend_from_slice(&fragment[consumed..]);
        }
        true
    }

    /// Concatenate with junction cancellation and no loop rejection.
    pub fn append(&mut self, other: &ReducedWord) {
        let consumed = self.cancel_junction(&other.symbols);
        self.symbols.extend_from_slice(&other.symbols[consumed..]);
    }

    /// The word that undoes this one: reversed, every symbol negated.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            symbols: self.symbols.iter().rev().map(|s| -s).collect(),
        }
    }

    /// True if any symbol occurs more than once anywhere in the word.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.symbols.len());
        self.symbols.iter().any(|s| !seen.insert(*s))
    }

    fn cancel_junction(&mut self, incoming: &[Symbol]) -> usize {
        let mut consumed = 0;
        while let Some(&next) = incoming.get(consumed) {
            if self.symbols.last() != Some(&-next) {
                break;
            }
            self.symbols.pop();
            consumed += 1;
        }
        consumed
    }
}

impl Add for &ReducedWord {
    type Output = ReducedWord;

    fn add(self, rhs: Self) -> ReducedWord {
        let mut out = self.clone();
        out.append(rhs);
        out
    }
}

impl Sub for &ReducedWord {
    type Output = ReducedWord;

    fn sub(self, rhs: Self) -> ReducedWord {
        self + &rhs.inverse()
    }
}

impl Neg for &ReducedWord {
    type Output = ReducedWord;

    fn neg(self) -> ReducedWord {
        self.inverse()
    }
}

impl fmt::Display for ReducedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}")?;
        }
        f.write_str("]")
    }
}
