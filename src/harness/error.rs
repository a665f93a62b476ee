//! Harness error types.

use crate::algorithms::AlgorithmError;
use thiserror::Error;

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Errors that stop a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// The generator cannot produce `size` distinct values.
    #[error("invalid input size {size}: {reason}")]
    InvalidInputSize {
        /// Requested size.
        size: usize,
        /// Why it cannot be generated.
        reason: String,
    },

    /// A measured algorithm failed.
    #[error("algorithm '{algorithm}' failed at size {size}: {source}")]
    AlgorithmFailure {
        /// Id of the failing algorithm.
        algorithm: String,
        /// Input size it was running at.
        size: usize,
        /// Error the algorithm raised.
        #[source]
        source: AlgorithmError,
    },

    /// The sweep has no sizes.
    #[error("no input sizes to sweep")]
    EmptySweep,

    /// The catalog has no algorithms.
    #[error("catalog has no algorithms to measure")]
    EmptyCatalog,
}

impl HarnessError {
    /// Whether this error came from an algorithm rather than the harness.
    #[must_use]
    pub fn is_algorithm_failure(&self) -> bool {
        matches!(self, Self::AlgorithmFailure { .. })
    }
}
