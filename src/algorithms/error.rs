//! Algorithm and catalog error types.

use thiserror::Error;

/// Result type for algorithm invocations.
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;

/// Errors raised by an algorithm while it runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    /// The algorithm needs at least one element.
    #[error("input sequence is empty")]
    EmptyInput,

    /// The workload does not have the shape the algorithm expects.
    #[error("expected a {expected} workload, got {actual}")]
    WorkloadMismatch {
        /// Workload shape the algorithm accepts.
        expected: &'static str,
        /// Workload shape that was supplied.
        actual: &'static str,
    },

    /// An intermediate result no longer fits the output type.
    #[error("arithmetic overflow computing {what} for n={n}")]
    Overflow {
        /// Quantity being computed.
        what: &'static str,
        /// Argument that overflowed.
        n: u64,
    },
}

/// Errors from looking up or editing a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No algorithm with this id exists in the catalog.
    #[error("unknown algorithm id: {0}")]
    UnknownAlgorithm(String),

    /// Two algorithms share an id.
    #[error("duplicate algorithm id: {0}")]
    DuplicateId(String),

    /// The selection would leave nothing to measure.
    #[error("catalog selection is empty")]
    EmptySelection,
}
