//! Typed search errors.
//!
//! `SearchError` represents caller misuse only. Search outcomes, including
//! "no path exists", are reported through
//! [`crate::search::Termination`] and the exhaustion sentinel, never here.

use winding_kernel::graph::GraphError;
use winding_kernel::invariant::InvariantError;

/// Fault that aborts a driver call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Inputs have the wrong shape for the operation: an invalid policy, or
    /// a goal of one invariant representation checked against the other.
    #[error("configuration fault: {detail}")]
    Configuration { detail: String },
    /// An index or dimension outside the declared bounds.
    #[error("bounds fault: {detail}")]
    Bounds { detail: String },
}

impl SearchError {
    #[must_use]
    pub fn is_configuration_fault(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    #[must_use]
    pub fn is_bounds_fault(&self) -> bool {
        matches!(self, Self::Bounds { .. })
    }
}

impl From<InvariantError> for SearchError {
    fn from(err: InvariantError) -> Self {
        let detail = err.to_string();
        match err {
            InvariantError::IndexOutOfBounds { .. } | InvariantError::DimensionMismatch { .. } => {
                Self::Bounds { detail }
            }
            InvariantError::ValueOutOfRange { .. }
            | InvariantError::ZeroSymbol
            | InvariantError::KindMismatch { .. } => Self::Configuration { detail },
        }
    }
}

impl From<GraphError> for SearchError {
    fn from(err: GraphError) -> Self {
        Self::Bounds {
            detail: err.to_string(),
        }
    }
}
