//! # Algorithm Set
//!
//! Reference implementations of textbook algorithms, one per complexity
//! class, plus the catalog the harness sweeps over.
//!
//! Every algorithm is exposed through the same capability, an
//! [`AlgorithmFn`] that takes an owned [`Workload`] and returns an
//! [`Outcome`]. Sorting algorithms mutate the vector they were handed and
//! return it; searches return an index. The harness does not care which.
//!
//! ## Catalog
//!
//! | Algorithm     | Class      | Rating   | Default ceiling |
//! |---------------|------------|----------|-----------------|
//! | Bubble Sort   | O(n²)      | Horrible | -               |
//! | Cubic Time    | O(n³)      | Horrible | -               |
//! | Merge Sort    | O(n log n) | Bad      | -               |
//! | Linear Search | O(n)       | Fair     | -               |
//! | Binary Search | O(log n)   | Good     | -               |
//! | Constant Time | O(1)       | Good     | -               |
//! | Fibonacci     | O(2^n)     | Horrible | 20              |
//! | Factorial     | O(n!)      | Horrible | 10              |

mod catalog;
mod error;
pub mod numeric;
pub mod searching;
pub mod sorting;
mod spec;
pub mod synthetic;

pub use catalog::{Catalog, EXPONENTIAL_CEILING, FACTORIAL_CEILING};
pub use error::{AlgorithmError, AlgorithmResult, CatalogError};
pub use spec::{AlgorithmFn, AlgorithmSpec, InputKind, Outcome, Rating, Workload};
