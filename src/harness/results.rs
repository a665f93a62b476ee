//! Collected sweep measurements.

use crate::algorithms::{AlgorithmError, Catalog};
use std::time::Duration;

/// One timed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementPoint {
    /// Id of the measured algorithm.
    pub algorithm: &'static str,
    /// Size of the input it ran against.
    pub input_size: usize,
    /// Wall-clock time of the invocation.
    pub elapsed: Duration,
}

impl MeasurementPoint {
    /// Elapsed time in seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Points for one algorithm, in sweep order.
///
/// The k-th point belongs to the k-th swept size; a series stops early when
/// a ceiling or a retirement cut it short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSeries {
    algorithm: &'static str,
    points: Vec<MeasurementPoint>,
}

impl ResultSeries {
    fn new(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            points: Vec::new(),
        }
    }

    /// Id of the algorithm this series belongs to.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// All points.
    #[must_use]
    pub fn points(&self) -> &[MeasurementPoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing was measured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point measured at `size`, if any.
    #[must_use]
    pub fn at(&self, size: usize) -> Option<&MeasurementPoint> {
        self.points.iter().find(|p| p.input_size == size)
    }

    /// `(size, seconds)` pairs, ready for plotting.
    #[must_use]
    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.input_size as f64, p.elapsed_seconds()))
            .collect()
    }
}

/// An algorithm that was dropped from the sweep after failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retirement {
    /// Id of the failing algorithm.
    pub algorithm: &'static str,
    /// Size at which it failed.
    pub size: usize,
    /// What went wrong.
    pub error: AlgorithmError,
}

/// Everything a sweep produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepResults {
    sizes: Vec<usize>,
    series: Vec<ResultSeries>,
    retirements: Vec<Retirement>,
}

impl SweepResults {
    /// Empty results with one series per catalog entry, in catalog order.
    #[must_use]
    pub fn new(sizes: Vec<usize>, catalog: &Catalog) -> Self {
        Self {
            sizes,
            series: catalog.iter().map(|spec| ResultSeries::new(spec.id)).collect(),
            retirements: Vec::new(),
        }
    }

    /// Append a point to `algorithm`'s series.
    ///
    /// Points for ids outside the catalog are ignored.
    pub(crate) fn record(&mut self, algorithm: &'static str, input_size: usize, elapsed: Duration) {
        if let Some(series) = self.series.iter_mut().find(|s| s.algorithm == algorithm) {
            series.points.push(MeasurementPoint {
                algorithm,
                input_size,
                elapsed,
            });
        }
    }

    pub(crate) fn retire(&mut self, retirement: Retirement) {
        self.retirements.push(retirement);
    }

    /// Sizes that were swept, ascending.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// All series in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ResultSeries> {
        self.series.iter()
    }

    /// Series for one algorithm.
    #[must_use]
    pub fn series(&self, algorithm: &str) -> Option<&ResultSeries> {
        self.series.iter().find(|s| s.algorithm == algorithm)
    }

    /// Algorithms dropped after a failure.
    #[must_use]
    pub fn retirements(&self) -> &[Retirement] {
        &self.retirements
    }

    /// Total number of points across all series.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.series.iter().map(ResultSeries::len).sum()
    }

    /// Longest elapsed time in the sweep.
    #[must_use]
    pub fn max_elapsed(&self) -> Duration {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.elapsed)
            .max()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SweepResults {
        let catalog = Catalog::standard()
            .select(&["bubble_sort", "fibonacci"])
            .unwrap();
        let mut results = SweepResults::new(vec![10, 15], &catalog);
        results.record("bubble_sort", 10, Duration::from_micros(3));
        results.record("fibonacci", 10, Duration::from_micros(7));
        results.record("bubble_sort", 15, Duration::from_micros(5));
        results
    }

    #[test]
    fn test_series_follow_catalog_order() {
        let results = sample();
        let ids: Vec<_> = results.iter().map(ResultSeries::algorithm).collect();
        assert_eq!(ids, vec!["bubble_sort", "fibonacci"]);
        assert_eq!(results.total_points(), 3);
    }

    #[test]
    fn test_series_lookup_and_coordinates() {
        let results = sample();
        let bubble = results.series("bubble_sort").unwrap();
        assert_eq!(bubble.len(), 2);
        assert_eq!(bubble.at(15).unwrap().elapsed, Duration::from_micros(5));
        assert!(bubble.at(20).is_none());

        let coords = bubble.coordinates();
        assert_eq!(coords[0].0, 10.0);
        assert!((coords[0].1 - 0.000_003).abs() < 1e-12);

        assert!(results.series("merge_sort").is_none());
    }

    #[test]
    fn test_record_ignores_unknown_ids() {
        let mut results = sample();
        results.record("merge_sort", 10, Duration::from_micros(1));
        assert_eq!(results.total_points(), 3);
    }

    #[test]
    fn test_max_elapsed() {
        assert_eq!(sample().max_elapsed(), Duration::from_micros(7));

        let catalog = Catalog::standard();
        let empty = SweepResults::new(vec![10], &catalog);
        assert_eq!(empty.max_elapsed(), Duration::ZERO);
    }
}
