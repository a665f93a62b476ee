//! Console table report.

use crate::algorithms::{Catalog, Rating};
use crate::harness::SweepResults;
use std::fmt;

/// Text printed above the table.
pub const PREAMBLE: &str = "This table displays the execution times (in seconds) for various \
algorithms and input sizes. These algorithms represent different time complexities, ranging \
from constant time (O(1)) to exponential time (O(2^n)).";

const RULE_WIDTH: usize = 50;

/// One line of the timing table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Display name, e.g. `Bubble Sort (O(n²))`.
    pub algorithm: String,
    /// Input size of the measurement.
    pub input_size: usize,
    /// Elapsed time in seconds.
    pub seconds: f64,
}

/// Read-only view of a sweep, rendered as the console report.
#[derive(Debug, Clone, Copy)]
pub struct TableReport<'a> {
    catalog: &'a Catalog,
    results: &'a SweepResults,
}

impl<'a> TableReport<'a> {
    /// Create a report over `results`, naming algorithms from `catalog`.
    #[must_use]
    pub fn new(catalog: &'a Catalog, results: &'a SweepResults) -> Self {
        Self { catalog, results }
    }

    /// Table rows grouped by size, then by catalog order.
    ///
    /// Only measured points produce rows.
    #[must_use]
    pub fn rows(&self) -> Vec<ReportRow> {
        self.results
            .sizes()
            .iter()
            .flat_map(|&size| self.rows_for(size))
            .collect()
    }

    /// Rows measured at a single size.
    #[must_use]
    pub fn rows_for(&self, size: usize) -> Vec<ReportRow> {
        self.catalog
            .iter()
            .filter_map(|spec| {
                let point = self.results.series(spec.id)?.at(size)?;
                Some(ReportRow {
                    algorithm: spec.display_name(),
                    input_size: size,
                    seconds: point.elapsed_seconds(),
                })
            })
            .collect()
    }

    /// Display name and rating of every catalog entry, in catalog order.
    #[must_use]
    pub fn summary(&self) -> Vec<(String, Rating)> {
        self.catalog
            .iter()
            .map(|spec| (spec.display_name(), spec.rating))
            .collect()
    }
}

impl fmt::Display for TableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "{PREAMBLE}")?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<30} {:<15} {}",
            "Algorithm", "Input Size", "Execution Time (s)"
        )?;
        writeln!(f, "{rule}")?;

        for &size in self.results.sizes() {
            for row in self.rows_for(size) {
                writeln!(
                    f,
                    "{:<30} {:<15} {:.6}",
                    row.algorithm, row.input_size, row.seconds
                )?;
            }
            writeln!(f, "{rule}")?;
        }

        writeln!(f)?;
        writeln!(f, "Summary of Time Complexities:")?;
        writeln!(f, "{rule}")?;
        for (name, rating) in self.summary() {
            writeln!(f, "{name:<30} {rating}")?;
        }
        writeln!(f, "{rule}")?;

        let retirements = self.results.retirements();
        if !retirements.is_empty() {
            writeln!(f)?;
            writeln!(f, "Retired after failure:")?;
            for retirement in retirements {
                let name = self
                    .catalog
                    .get(retirement.algorithm)
                    .map_or_else(|| retirement.algorithm.to_string(), |s| s.display_name());
                writeln!(f, "{name:<30} {:<15} {}", retirement.size, retirement.error)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{SizeGatedRunner, SweepPlan};

    fn sweep(ids: &[&str], sizes: &[usize]) -> (Catalog, SweepResults) {
        let catalog = Catalog::standard().select(ids).unwrap();
        let results = SizeGatedRunner::new(&catalog, SweepPlan::new(sizes.iter().copied()))
            .run()
            .unwrap();
        (catalog, results)
    }

    #[test]
    fn test_rows_grouped_by_size_then_catalog_order() {
        let (catalog, results) = sweep(&["fibonacci", "bubble_sort"], &[15, 10]);
        let rows = TableReport::new(&catalog, &results).rows();

        let order: Vec<_> = rows
            .iter()
            .map(|r| (r.algorithm.as_str(), r.input_size))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Bubble Sort (O(n²))", 10),
                ("Fibonacci (O(2^n))", 10),
                ("Bubble Sort (O(n²))", 15),
                ("Fibonacci (O(2^n))", 15),
            ]
        );
        assert!(rows.iter().all(|r| r.seconds >= 0.0));
    }

    #[test]
    fn test_ceilinged_algorithm_has_fewer_rows() {
        let mut catalog = Catalog::standard()
            .select(&["bubble_sort", "fibonacci"])
            .unwrap();
        catalog.set_ceiling("fibonacci", Some(12)).unwrap();
        let results = SizeGatedRunner::new(&catalog, SweepPlan::new([10, 15]))
            .run()
            .unwrap();

        let rows = TableReport::new(&catalog, &results).rows();
        assert_eq!(rows.len(), 3);
        let fib: Vec<_> = rows
            .iter()
            .filter(|r| r.algorithm.starts_with("Fibonacci"))
            .collect();
        assert_eq!(fib.len(), 1);
        assert_eq!(fib[0].input_size, 10);
    }

    #[test]
    fn test_summary_in_catalog_order() {
        let (catalog, results) = sweep(&["constant_time", "merge_sort"], &[10]);
        let summary = TableReport::new(&catalog, &results).summary();
        assert_eq!(
            summary,
            vec![
                ("Merge Sort (O(n log n))".to_string(), Rating::Bad),
                ("Constant Time (O(1))".to_string(), Rating::Good),
            ]
        );
    }

    #[test]
    fn test_render_layout() {
        let (catalog, results) = sweep(&["bubble_sort"], &[10, 15]);
        let text = TableReport::new(&catalog, &results).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], PREAMBLE);
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("Algorithm"));
        assert!(lines[3].ends_with("Execution Time (s)"));
        assert_eq!(lines[4], "-".repeat(50));
        assert!(lines[5].starts_with("Bubble Sort (O(n²))"));
        assert_eq!(lines[6], "-".repeat(50));
        assert!(lines[7].starts_with("Bubble Sort (O(n²))"));
        assert_eq!(lines[8], "-".repeat(50));
        assert!(text.contains("Summary of Time Complexities:"));
        assert!(text.contains(&format!("{:<30} Horrible", "Bubble Sort (O(n²))")));
        assert!(!text.contains("Retired after failure"));
    }

    #[test]
    fn test_row_time_has_six_decimals() {
        let (catalog, results) = sweep(&["constant_time"], &[10]);
        let text = TableReport::new(&catalog, &results).to_string();
        let row = text
            .lines()
            .find(|l| l.starts_with("Constant Time"))
            .unwrap();
        let time = row.split_whitespace().last().unwrap();
        assert_eq!(time.split('.').nth(1).unwrap().len(), 6);
    }
}
