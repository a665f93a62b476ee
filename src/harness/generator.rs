//! Input generation.
//!
//! Values are sampled without replacement from `[0, range_factor * size)`,
//! so a dataset of size `n` always holds `n` distinct integers. Only the
//! shape is guaranteed across runs unless the generator is seeded.

use super::error::{HarnessError, HarnessResult};
use crate::algorithms::{InputKind, Workload};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default ratio of sampling range width to dataset size.
pub const DEFAULT_RANGE_FACTOR: usize = 10;

/// Everything an algorithm may be measured against at one size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    size: usize,
    values: Vec<i64>,
    sorted: Vec<i64>,
    search_target: i64,
}

impl Dataset {
    /// Build the derived views from a generated sequence.
    ///
    /// `search_target` must be an element of `values`.
    fn new(values: Vec<i64>, search_target: i64) -> Self {
        let mut sorted = values.clone();
        sorted.sort_unstable();
        Self {
            size: values.len(),
            values,
            sorted,
            search_target,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The generated sequence, in generation order.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Sorted copy of the sequence.
    #[must_use]
    pub fn sorted(&self) -> &[i64] {
        &self.sorted
    }

    /// Target for unsorted searches: a random element of the sequence.
    #[must_use]
    pub fn search_target(&self) -> i64 {
        self.search_target
    }

    /// Target for sorted searches: the middle element of the sorted view.
    #[must_use]
    pub fn sorted_target(&self) -> i64 {
        self.sorted[self.sorted.len() / 2]
    }

    /// Build a fresh, owned workload of the requested kind.
    #[must_use]
    pub fn workload(&self, kind: InputKind) -> Workload {
        match kind {
            InputKind::Unsorted => Workload::Sequence(self.values.clone()),
            InputKind::UnsortedSearch => Workload::Search {
                data: self.values.clone(),
                target: self.search_target,
            },
            InputKind::SortedSearch => Workload::Search {
                data: self.sorted.clone(),
                target: self.sorted_target(),
            },
            InputKind::Size => Workload::Scalar(self.size as u64),
        }
    }
}

/// Random input generator.
#[derive(Debug, Clone)]
pub struct InputGenerator {
    rng: StdRng,
    range_factor: usize,
}

impl Default for InputGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_RANGE_FACTOR)
    }
}

impl InputGenerator {
    /// Create a generator seeded from the operating system.
    #[must_use]
    pub fn new(range_factor: usize) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            range_factor,
        }
    }

    /// Create a generator whose values are reproducible for a given seed.
    #[must_use]
    pub fn seeded(seed: u64, range_factor: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range_factor,
        }
    }

    /// Width of the sampling range for `size`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidInputSize`] if `size` is zero, the
    /// range overflows, or the range is narrower than `size`.
    pub fn range_for(&self, size: usize) -> HarnessResult<usize> {
        if size == 0 {
            return Err(HarnessError::InvalidInputSize {
                size,
                reason: "size must be at least 1".to_string(),
            });
        }
        let range = size
            .checked_mul(self.range_factor)
            .filter(|&range| i64::try_from(range).is_ok())
            .ok_or_else(|| HarnessError::InvalidInputSize {
                size,
                reason: format!("sampling range {size} x {} overflows", self.range_factor),
            })?;
        if size > range {
            return Err(HarnessError::InvalidInputSize {
                size,
                reason: format!("cannot draw {size} distinct values from a range of {range}"),
            });
        }
        Ok(range)
    }

    /// `size` distinct integers from `[0, range_factor * size)` in random order.
    ///
    /// # Errors
    ///
    /// See [`InputGenerator::range_for`].
    pub fn generate(&mut self, size: usize) -> HarnessResult<Vec<i64>> {
        let range = self.range_for(size)?;
        Ok(rand::seq::index::sample(&mut self.rng, range, size)
            .into_iter()
            .map(|value| value as i64)
            .collect())
    }

    /// Generate a sequence and its derived views.
    ///
    /// # Errors
    ///
    /// See [`InputGenerator::range_for`].
    pub fn dataset(&mut self, size: usize) -> HarnessResult<Dataset> {
        let values = self.generate(size)?;
        let search_target = values[self.rng.random_range(0..values.len())];
        Ok(Dataset::new(values, search_target))
    }
}
