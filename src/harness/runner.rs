//! The size-gated sweep.

use super::error::{HarnessError, HarnessResult};
use super::generator::{InputGenerator, DEFAULT_RANGE_FACTOR};
use super::results::{Retirement, SweepResults};
use super::timing::measure;
use crate::algorithms::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hint::black_box;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Input sizes used when nothing else is configured.
pub const DEFAULT_SIZES: [usize; 6] = [10, 15, 20, 25, 30, 35];

/// What to do when an algorithm fails mid-sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the sweep and return the failure (default).
    #[default]
    Abort,
    /// Drop the failing algorithm for the remaining sizes and carry on.
    Retire,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Retire => write!(f, "retire"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "retire" => Ok(Self::Retire),
            other => Err(format!(
                "unknown failure policy '{other}' (expected abort or retire)"
            )),
        }
    }
}

/// Sweep parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    sizes: Vec<usize>,
    range_factor: usize,
    seed: Option<u64>,
    on_failure: FailurePolicy,
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self::new(DEFAULT_SIZES)
    }
}

impl SweepPlan {
    /// Plan a sweep over `sizes`.
    ///
    /// Sizes are sorted ascending and deduplicated, so callers may pass them
    /// in any order.
    #[must_use]
    pub fn new(sizes: impl IntoIterator<Item = usize>) -> Self {
        let mut sizes: Vec<usize> = sizes.into_iter().collect();
        sizes.sort_unstable();
        sizes.dedup();
        Self {
            sizes,
            range_factor: DEFAULT_RANGE_FACTOR,
            seed: None,
            on_failure: FailurePolicy::default(),
        }
    }

    /// Set the sampling range factor.
    #[must_use]
    pub fn with_range_factor(mut self, range_factor: usize) -> Self {
        self.range_factor = range_factor;
        self
    }

    /// Seed the input generator.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, on_failure: FailurePolicy) -> Self {
        self.on_failure = on_failure;
        self
    }

    /// Sizes to sweep, ascending.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Sampling range factor.
    #[must_use]
    pub fn range_factor(&self) -> usize {
        self.range_factor
    }

    /// Generator seed.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Failure policy.
    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        self.on_failure
    }

    fn generator(&self) -> InputGenerator {
        match self.seed {
            Some(seed) => InputGenerator::seeded(seed, self.range_factor),
            None => InputGenerator::new(self.range_factor),
        }
    }
}

/// Runs every catalog algorithm at every admitted size, one at a time.
#[derive(Debug)]
pub struct SizeGatedRunner<'a> {
    catalog: &'a Catalog,
    plan: SweepPlan,
}

impl<'a> SizeGatedRunner<'a> {
    /// Create a runner.
    #[must_use]
    pub fn new(catalog: &'a Catalog, plan: SweepPlan) -> Self {
        Self { catalog, plan }
    }

    /// The plan this runner executes.
    #[must_use]
    pub fn plan(&self) -> &SweepPlan {
        &self.plan
    }

    /// Perform the sweep.
    ///
    /// Sizes are visited ascending; within a size, algorithms run in catalog
    /// order. A pair is skipped when the size exceeds the algorithm's ceiling.
    /// Each measured algorithm gets its own copy of the size's dataset.
    ///
    /// # Errors
    ///
    /// - [`HarnessError::EmptySweep`] / [`HarnessError::EmptyCatalog`] when
    ///   there is nothing to do.
    /// - [`HarnessError::InvalidInputSize`] before anything is measured if any
    ///   size cannot be generated.
    /// - [`HarnessError::AlgorithmFailure`] on the first failure under
    ///   [`FailurePolicy::Abort`].
    pub fn run(&self) -> HarnessResult<SweepResults> {
        if self.plan.sizes.is_empty() {
            return Err(HarnessError::EmptySweep);
        }
        if self.catalog.is_empty() {
            return Err(HarnessError::EmptyCatalog);
        }

        let mut generator = self.plan.generator();
        for &size in &self.plan.sizes {
            generator.range_for(size)?;
        }

        info!(
            sizes = ?self.plan.sizes,
            algorithms = self.catalog.len(),
            on_failure = %self.plan.on_failure,
            "Starting sweep"
        );

        let mut results = SweepResults::new(self.plan.sizes.clone(), self.catalog);
        let mut retired: HashSet<&'static str> = HashSet::new();

        for &size in &self.plan.sizes {
            let dataset = generator.dataset(size)?;

            for spec in self.catalog {
                if retired.contains(spec.id) {
                    continue;
                }
                if !spec.admits(size) {
                    debug!(
                        algorithm = spec.id,
                        size,
                        ceiling = ?spec.ceiling,
                        "Size exceeds ceiling, skipping"
                    );
                    continue;
                }

                let workload = dataset.workload(spec.input);
                match measure(|| spec.invoke(workload)) {
                    Ok(timed) => {
                        black_box(timed.value);
                        debug!(
                            algorithm = spec.id,
                            size,
                            elapsed_us = timed.elapsed.as_secs_f64() * 1e6,
                            "Measured"
                        );
                        results.record(spec.id, size, timed.elapsed);
                    },
                    Err(source) => match self.plan.on_failure {
                        FailurePolicy::Abort => {
                            return Err(HarnessError::AlgorithmFailure {
                                algorithm: spec.id.to_string(),
                                size,
                                source,
                            });
                        },
                        FailurePolicy::Retire => {
                            warn!(
                                algorithm = spec.id,
                                size,
                                error = %source,
                                "Algorithm failed, retiring it for the rest of the sweep"
                            );
                            retired.insert(spec.id);
                            results.retire(Retirement {
                                algorithm: spec.id,
                                size,
                                error: source,
                            });
                        },
                    },
                }
            }
        }

        info!(
            points = results.total_points(),
            retired = results.retirements().len(),
            "Sweep complete"
        );
        Ok(results)
    }
}
