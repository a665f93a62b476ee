//! # Configuration System
//!
//! TOML-based configuration for the harness: sweep sizes, input generation,
//! failure handling, logging, output and per-algorithm overrides.
//! Everything has a default, so an empty file (or no file) is valid.
//!
//! ## Example Configuration
//!
//! ```toml
//! [sweep]
//! sizes = [10, 15, 20, 25, 30, 35]
//! range_factor = 10
//! seed = 42
//! on_failure = "abort"
//!
//! [logging]
//! level = "info"
//! format = "compact"
//!
//! [output]
//! format = "table"
//! plot = true
//!
//! [[algorithms]]
//! id = "fibonacci"
//! ceiling = 25
//! ```

mod error;
mod loader;
mod types;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use types::{
    AlgorithmOverride, HarnessConfig, LogFormat, LogLevel, LoggingConfig, OutputSection,
    SweepSection,
};
pub use validation::{
    AlgorithmValidator, BasicValidator, ValidationError, ValidationResult, ValidationSeverity,
    Validator,
};
