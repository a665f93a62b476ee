//! Report error types.

use thiserror::Error;

/// Report rendering errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The machine-readable report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
