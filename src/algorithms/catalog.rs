//! The ordered set of algorithms a sweep measures.

use super::error::{AlgorithmError, AlgorithmResult, CatalogError};
use super::numeric::{factorial, fibonacci};
use super::searching::{binary_search, linear_search};
use super::sorting::{bubble_sort, merge_sort};
use super::spec::{AlgorithmSpec, InputKind, Outcome, Rating, Workload};
use super::synthetic::{constant_time, cubic_time};
use std::collections::HashSet;

/// Default ceiling for exponential-time algorithms.
pub const EXPONENTIAL_CEILING: usize = 20;

/// Default ceiling for factorial-time algorithms.
pub const FACTORIAL_CEILING: usize = 10;

fn mismatch(expected: &'static str, actual: &Workload) -> AlgorithmError {
    AlgorithmError::WorkloadMismatch {
        expected,
        actual: actual.shape(),
    }
}

fn sequence(workload: Workload) -> AlgorithmResult<Vec<i64>> {
    match workload {
        Workload::Sequence(data) => Ok(data),
        other => Err(mismatch("sequence", &other)),
    }
}

fn search(workload: Workload) -> AlgorithmResult<(Vec<i64>, i64)> {
    match workload {
        Workload::Search { data, target } => Ok((data, target)),
        other => Err(mismatch("search", &other)),
    }
}

fn scalar(workload: Workload) -> AlgorithmResult<u64> {
    match workload {
        Workload::Scalar(n) => Ok(n),
        other => Err(mismatch("scalar", &other)),
    }
}

fn run_bubble_sort(workload: Workload) -> AlgorithmResult<Outcome> {
    let mut data = sequence(workload)?;
    bubble_sort(&mut data);
    Ok(Outcome::Sequence(data))
}

fn run_cubic_time(workload: Workload) -> AlgorithmResult<Outcome> {
    let mut data = sequence(workload)?;
    cubic_time(&mut data);
    Ok(Outcome::Sequence(data))
}

fn run_merge_sort(workload: Workload) -> AlgorithmResult<Outcome> {
    let mut data = sequence(workload)?;
    merge_sort(&mut data);
    Ok(Outcome::Sequence(data))
}

fn run_linear_search(workload: Workload) -> AlgorithmResult<Outcome> {
    let (data, target) = search(workload)?;
    Ok(Outcome::Index(linear_search(&data, target)))
}

fn run_binary_search(workload: Workload) -> AlgorithmResult<Outcome> {
    let (data, target) = search(workload)?;
    Ok(Outcome::Index(binary_search(&data, target)))
}

fn run_constant_time(workload: Workload) -> AlgorithmResult<Outcome> {
    let data = sequence(workload)?;
    constant_time(&data).map(Outcome::Element)
}

fn run_fibonacci(workload: Workload) -> AlgorithmResult<Outcome> {
    let n = scalar(workload)?;
    Ok(Outcome::Number(u128::from(fibonacci(n))))
}

fn run_factorial(workload: Workload) -> AlgorithmResult<Outcome> {
    let n = scalar(workload)?;
    factorial(n).map(Outcome::Number)
}

/// Ordered, immutable-by-convention list of algorithm specs.
///
/// Order matters: the runner measures, and the reporter prints, in catalog
/// order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    specs: Vec<AlgorithmSpec>,
}

impl Catalog {
    /// Create a catalog from explicit specs.
    ///
    /// # Errors
    ///
    /// Fails when two specs share an id.
    pub fn new(specs: Vec<AlgorithmSpec>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for spec in &specs {
            if !seen.insert(spec.id) {
                return Err(CatalogError::DuplicateId(spec.id.to_string()));
            }
        }
        Ok(Self { specs })
    }

    /// The eight reference algorithms with their default ceilings.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            specs: vec![
                AlgorithmSpec::new(
                    "bubble_sort",
                    "Bubble Sort",
                    "O(n²)",
                    Rating::Horrible,
                    InputKind::Unsorted,
                    run_bubble_sort,
                ),
                AlgorithmSpec::new(
                    "cubic_time",
                    "Cubic Time",
                    "O(n³)",
                    Rating::Horrible,
                    InputKind::Unsorted,
                    run_cubic_time,
                ),
                AlgorithmSpec::new(
                    "merge_sort",
                    "Merge Sort",
                    "O(n log n)",
                    Rating::Bad,
                    InputKind::Unsorted,
                    run_merge_sort,
                ),
                AlgorithmSpec::new(
                    "linear_search",
                    "Linear Search",
                    "O(n)",
                    Rating::Fair,
                    InputKind::UnsortedSearch,
                    run_linear_search,
                ),
                AlgorithmSpec::new(
                    "binary_search",
                    "Binary Search",
                    "O(log n)",
                    Rating::Good,
                    InputKind::SortedSearch,
                    run_binary_search,
                ),
                AlgorithmSpec::new(
                    "constant_time",
                    "Constant Time",
                    "O(1)",
                    Rating::Good,
                    InputKind::Unsorted,
                    run_constant_time,
                ),
                AlgorithmSpec::new(
                    "fibonacci",
                    "Fibonacci",
                    "O(2^n)",
                    Rating::Horrible,
                    InputKind::Size,
                    run_fibonacci,
                )
                .with_ceiling(Some(EXPONENTIAL_CEILING)),
                AlgorithmSpec::new(
                    "factorial",
                    "Factorial",
                    "O(n!)",
                    Rating::Horrible,
                    InputKind::Size,
                    run_factorial,
                )
                .with_ceiling(Some(FACTORIAL_CEILING)),
            ],
        }
    }

    /// Number of algorithms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterate specs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmSpec> {
        self.specs.iter()
    }

    /// Look up a spec by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AlgorithmSpec> {
        self.specs.iter().find(|spec| spec.id == id)
    }

    /// All ids in catalog order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.specs.iter().map(|spec| spec.id).collect()
    }

    /// Keep only the given ids, preserving catalog order.
    ///
    /// # Errors
    ///
    /// Fails on an id that is not in the catalog, or when `ids` is empty.
    pub fn select<S: AsRef<str>>(mut self, ids: &[S]) -> Result<Self, CatalogError> {
        for id in ids {
            if self.get(id.as_ref()).is_none() {
                return Err(CatalogError::UnknownAlgorithm(id.as_ref().to_string()));
            }
        }
        self.specs
            .retain(|spec| ids.iter().any(|id| id.as_ref() == spec.id));
        if self.specs.is_empty() {
            return Err(CatalogError::EmptySelection);
        }
        Ok(self)
    }

    /// Drop one algorithm.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not in the catalog.
    pub fn remove(&mut self, id: &str) -> Result<AlgorithmSpec, CatalogError> {
        let index = self
            .specs
            .iter()
            .position(|spec| spec.id == id)
            .ok_or_else(|| CatalogError::UnknownAlgorithm(id.to_string()))?;
        Ok(self.specs.remove(index))
    }

    /// Replace one algorithm's ceiling.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not in the catalog.
    pub fn set_ceiling(&mut self, id: &str, ceiling: Option<usize>) -> Result<(), CatalogError> {
        let spec = self
            .specs
            .iter_mut()
            .find(|spec| spec.id == id)
            .ok_or_else(|| CatalogError::UnknownAlgorithm(id.to_string()))?;
        spec.ceiling = ceiling;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a AlgorithmSpec;
    type IntoIter = std::slice::Iter<'a, AlgorithmSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
