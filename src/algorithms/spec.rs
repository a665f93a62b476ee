//! Algorithm descriptors and the uniform invocation contract.

use super::error::AlgorithmResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative label attached to a complexity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Grows too fast to be usable beyond tiny inputs.
    Horrible,
    /// Acceptable but not ideal.
    Bad,
    /// Scales proportionally.
    Fair,
    /// Effectively free at any size.
    Good,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horrible => write!(f, "Horrible"),
            Self::Bad => write!(f, "Bad"),
            Self::Fair => write!(f, "Fair"),
            Self::Good => write!(f, "Good"),
        }
    }
}

/// Shape of the input an algorithm is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// The generated sequence, unsorted.
    Unsorted,
    /// The unsorted sequence plus a target picked at random from it.
    UnsortedSearch,
    /// The sorted sequence plus its middle element as the target.
    SortedSearch,
    /// Only the size itself, as `n`.
    Size,
}

/// Owned input for a single invocation.
///
/// Every invocation gets its own workload, so algorithms that mutate their
/// input in place cannot affect each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workload {
    /// A sequence to process.
    Sequence(Vec<i64>),
    /// A sequence and a value to look for.
    Search {
        /// Sequence to search.
        data: Vec<i64>,
        /// Value to find.
        target: i64,
    },
    /// A bare argument.
    Scalar(u64),
}

impl Workload {
    /// Short name of this workload's shape, used in error messages.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Sequence(_) => "sequence",
            Self::Search { .. } => "search",
            Self::Scalar(_) => "scalar",
        }
    }
}

/// What an invocation produced. The harness only black-boxes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The (possibly rearranged) input sequence.
    Sequence(Vec<i64>),
    /// Search result.
    Index(Option<usize>),
    /// A single element read from the input.
    Element(i64),
    /// A computed number.
    Number(u128),
}

/// Capability every catalogued algorithm exposes.
pub type AlgorithmFn = fn(Workload) -> AlgorithmResult<Outcome>;

/// An entry in the catalog.
#[derive(Clone)]
pub struct AlgorithmSpec {
    /// Stable identifier used in configuration.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Declared asymptotic class, e.g. `O(n log n)`.
    pub complexity: &'static str,
    /// Qualitative rating.
    pub rating: Rating,
    /// Input the algorithm is measured against.
    pub input: InputKind,
    /// Largest size this algorithm is run at; `None` means unbounded.
    pub ceiling: Option<usize>,
    run: AlgorithmFn,
}

impl fmt::Debug for AlgorithmSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmSpec")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("complexity", &self.complexity)
            .field("rating", &self.rating)
            .field("input", &self.input)
            .field("ceiling", &self.ceiling)
            .finish()
    }
}

impl AlgorithmSpec {
    /// Create an unbounded spec.
    #[must_use]
    pub fn new(
        id: &'static str,
        name: &'static str,
        complexity: &'static str,
        rating: Rating,
        input: InputKind,
        run: AlgorithmFn,
    ) -> Self {
        Self {
            id,
            name,
            complexity,
            rating,
            input,
            ceiling: None,
            run,
        }
    }

    /// Set or clear the size ceiling.
    #[must_use]
    pub fn with_ceiling(mut self, ceiling: Option<usize>) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Whether this algorithm should be run at `size`.
    #[must_use]
    pub fn admits(&self, size: usize) -> bool {
        self.ceiling.is_none_or(|ceiling| size <= ceiling)
    }

    /// Invoke the algorithm once.
    pub fn invoke(&self, workload: Workload) -> AlgorithmResult<Outcome> {
        (self.run)(workload)
    }

    /// Name and class, e.g. `Merge Sort (O(n log n))`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.complexity)
    }

    /// Display name followed by the rating, as shown in chart legends.
    #[must_use]
    pub fn legend_label(&self) -> String {
        format!("{} - {}", self.display_name(), self.rating)
    }
}
