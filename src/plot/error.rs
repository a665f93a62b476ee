//! Plot error types.

use thiserror::Error;

/// Chart rendering errors.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Stdout is not attached to a terminal.
    #[error("no terminal available for the chart")]
    NoTerminal,

    /// No algorithm has any measurement.
    #[error("nothing to plot")]
    NothingToPlot,

    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for plot operations.
pub type PlotResult<T> = Result<T, PlotError>;
