//! Machine-readable sweep report.

use super::error::ReportResult;
use crate::algorithms::{Catalog, Rating};
use crate::harness::SweepResults;
use serde::Serialize;

/// A single measurement.
#[derive(Debug, Clone, Serialize)]
pub struct PointReport {
    /// Input size.
    pub input_size: usize,
    /// Elapsed time in seconds.
    pub seconds: f64,
}

/// One algorithm's series.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmReport {
    /// Catalog id.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Complexity class, e.g. `O(n log n)`.
    pub complexity: &'static str,
    /// Qualitative rating.
    pub rating: Rating,
    /// Size ceiling in effect for the sweep.
    pub ceiling: Option<usize>,
    /// Measurements in sweep order.
    pub points: Vec<PointReport>,
}

/// An algorithm dropped after a failure.
#[derive(Debug, Clone, Serialize)]
pub struct RetirementReport {
    /// Id of the retired algorithm.
    pub algorithm: &'static str,
    /// Size at which it failed.
    pub size: usize,
    /// Failure message.
    pub error: String,
}

/// Whole-sweep report, serialized with `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// RFC 3339 timestamp of report creation.
    pub generated_at: String,
    /// Swept sizes, ascending.
    pub sizes: Vec<usize>,
    /// One entry per catalog algorithm.
    pub algorithms: Vec<AlgorithmReport>,
    /// Algorithms dropped after a failure.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub retirements: Vec<RetirementReport>,
}

impl SweepReport {
    /// Build the report, one entry per catalog algorithm in catalog order.
    #[must_use]
    pub fn new(catalog: &Catalog, results: &SweepResults) -> Self {
        let algorithms = catalog
            .iter()
            .map(|spec| AlgorithmReport {
                id: spec.id,
                name: spec.name,
                complexity: spec.complexity,
                rating: spec.rating,
                ceiling: spec.ceiling,
                points: results
                    .series(spec.id)
                    .map(|series| {
                        series
                            .points()
                            .iter()
                            .map(|p| PointReport {
                                input_size: p.input_size,
                                seconds: p.elapsed_seconds(),
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();

        let retirements = results
            .retirements()
            .iter()
            .map(|r| RetirementReport {
                algorithm: r.algorithm,
                size: r.size,
                error: r.error.to_string(),
            })
            .collect();

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            sizes: results.sizes().to_vec(),
            algorithms,
            retirements,
        }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{SizeGatedRunner, SweepPlan};

    #[test]
    fn test_json_report_shape() {
        let mut catalog = Catalog::standard()
            .select(&["bubble_sort", "factorial"])
            .unwrap();
        catalog.set_ceiling("factorial", Some(12)).unwrap();
        let results = SizeGatedRunner::new(&catalog, SweepPlan::new([10, 15]))
            .run()
            .unwrap();

        let report = SweepReport::new(&catalog, &results);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["sizes"], serde_json::json!([10, 15]));
        assert_eq!(value["algorithms"][0]["id"], "bubble_sort");
        assert_eq!(value["algorithms"][0]["rating"], "Horrible");
        assert_eq!(value["algorithms"][0]["points"].as_array().unwrap().len(), 2);
        assert_eq!(value["algorithms"][1]["ceiling"], 12);
        assert_eq!(value["algorithms"][1]["points"].as_array().unwrap().len(), 1);
        assert!(value.get("retirements").is_none());
        let generated_at = value["generated_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(generated_at).is_ok());
    }
}
