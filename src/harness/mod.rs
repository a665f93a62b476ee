//! # Measurement Harness
//!
//! Generates inputs, times algorithm invocations and collects the results
//! of a sweep over input sizes.
//!
//! ## Example
//!
//! ```rust
//! use complexity_harness::algorithms::Catalog;
//! use complexity_harness::harness::{SizeGatedRunner, SweepPlan};
//!
//! let catalog = Catalog::standard().select(&["bubble_sort", "fibonacci"]).unwrap();
//! let results = SizeGatedRunner::new(&catalog, SweepPlan::new([10, 15]))
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(results.series("bubble_sort").unwrap().len(), 2);
//! assert_eq!(results.series("fibonacci").unwrap().len(), 2);
//! ```

mod error;
mod generator;
mod results;
mod runner;
mod timing;

pub use error::{HarnessError, HarnessResult};
pub use generator::{Dataset, InputGenerator, DEFAULT_RANGE_FACTOR};
pub use results::{MeasurementPoint, ResultSeries, Retirement, SweepResults};
pub use runner::{FailurePolicy, SizeGatedRunner, SweepPlan, DEFAULT_SIZES};
pub use timing::{measure, Timed};
