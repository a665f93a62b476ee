//! # Complexity Harness
//!
//! Measures the wall-clock time of textbook algorithms across a sweep of
//! input sizes and presents the growth of each complexity class as a
//! console table and a terminal line chart.
//!
//! ## Features
//!
//! - A fixed catalog of algorithms from O(1) to O(n!)
//! - Per-algorithm size ceilings for exponential and factorial growth
//! - Fresh random input per algorithm, optionally seeded
//! - Table or JSON report, plus an interactive ratatui chart
//!
//! ## Architecture
//!
//! The [`harness::SizeGatedRunner`] walks the sizes in ascending order,
//! builds a [`harness::Dataset`] per size and times every admitted
//! [`algorithms::AlgorithmSpec`] through one uniform invocation contract.
//! The collected [`harness::SweepResults`] are then handed read-only to the
//! [`report`] and [`plot`] modules.

pub mod algorithms;
pub mod config;
pub mod harness;
pub mod logging;
pub mod plot;
pub mod report;
