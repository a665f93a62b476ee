//! # Reporting
//!
//! Renders [`SweepResults`](crate::harness::SweepResults) for humans (a
//! fixed-column console table followed by a rating summary) or for machines
//! (pretty-printed JSON). Both are read-only consumers of the results.

mod error;
mod json;
mod table;

pub use error::{ReportError, ReportResult};
pub use json::{AlgorithmReport, PointReport, RetirementReport, SweepReport};
pub use table::{ReportRow, TableReport, PREAMBLE};

use crate::algorithms::Catalog;
use crate::harness::SweepResults;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console table and rating summary.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected table or json)")),
        }
    }
}

/// Render `results` in the requested format.
///
/// # Errors
///
/// Returns an error if the JSON report cannot be serialized.
pub fn render(
    catalog: &Catalog,
    results: &SweepResults,
    format: OutputFormat,
) -> ReportResult<String> {
    match format {
        OutputFormat::Table => Ok(TableReport::new(catalog, results).to_string()),
        OutputFormat::Json => SweepReport::new(catalog, results).to_json(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert!("csv".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().to_string(), "table");
    }
}
