//! Configuration type definitions.

use super::error::ConfigResult;
use crate::algorithms::{Catalog, CatalogError};
use crate::harness::{FailurePolicy, SweepPlan, DEFAULT_RANGE_FACTOR, DEFAULT_SIZES};
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HarnessConfig {
    /// Sweep parameters.
    pub sweep: SweepSection,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Report and chart output.
    pub output: OutputSection,

    /// Per-algorithm overrides.
    #[serde(default)]
    pub algorithms: Vec<AlgorithmOverride>,
}

impl HarnessConfig {
    /// Sweep plan described by the `[sweep]` section.
    #[must_use]
    pub fn plan(&self) -> SweepPlan {
        SweepPlan::new(self.sweep.sizes.iter().copied())
            .with_range_factor(self.sweep.range_factor)
            .with_seed(self.sweep.seed)
            .with_failure_policy(self.sweep.on_failure)
    }

    /// The standard catalog with `[[algorithms]]` overrides applied.
    ///
    /// # Errors
    ///
    /// Fails on an unknown algorithm id, or if every algorithm is disabled.
    pub fn catalog(&self) -> ConfigResult<Catalog> {
        let mut catalog = Catalog::standard();
        for entry in &self.algorithms {
            if !entry.enabled {
                catalog.remove(&entry.id)?;
            } else if entry.unbounded {
                catalog.set_ceiling(&entry.id, None)?;
            } else if let Some(ceiling) = entry.ceiling {
                catalog.set_ceiling(&entry.id, Some(ceiling))?;
            } else if catalog.get(&entry.id).is_none() {
                return Err(CatalogError::UnknownAlgorithm(entry.id.clone()).into());
            }
        }
        if catalog.is_empty() {
            return Err(CatalogError::EmptySelection.into());
        }
        Ok(catalog)
    }
}

/// `[sweep]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SweepSection {
    /// Input sizes to measure at.
    pub sizes: Vec<usize>,

    /// Sampling range width as a multiple of the size.
    pub range_factor: usize,

    /// Seed for reproducible input values.
    pub seed: Option<u64>,

    /// Behaviour when an algorithm fails.
    pub on_failure: FailurePolicy,
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            range_factor: DEFAULT_RANGE_FACTOR,
            seed: None,
            on_failure: FailurePolicy::Abort,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: LogLevel,

    /// Log format (pretty, compact, json).
    pub format: LogFormat,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level (most verbose).
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level (default).
    #[default]
    Warn,
    /// Error level (least verbose).
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human-readable output.
    Pretty,
    /// Compact single-line format (default).
    #[default]
    Compact,
    /// JSON format (machine-readable).
    Json,
}

/// `[output]` section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSection {
    /// How the results are printed.
    pub format: OutputFormat,

    /// Whether to show the chart after the report.
    pub plot: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            plot: true,
        }
    }
}

/// `[[algorithms]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlgorithmOverride {
    /// Catalog id, e.g. `fibonacci`.
    pub id: String,

    /// Whether the algorithm is measured at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Replacement size ceiling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<usize>,

    /// Remove any ceiling.
    #[serde(default, skip_serializing_if = "is_false")]
    pub unbounded: bool,
}

fn default_true() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl AlgorithmOverride {
    /// Create an override that changes nothing.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            enabled: true,
            ceiling: None,
            unbounded: false,
        }
    }

    /// Set the enabled state.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set a ceiling.
    #[must_use]
    pub fn with_ceiling(mut self, ceiling: usize) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    /// Remove the ceiling.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.unbounded = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.sweep.sizes, vec![10, 15, 20, 25, 30, 35]);
        assert_eq!(config.sweep.range_factor, 10);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.output.plot);
        assert!(config.algorithms.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml_str = r#"
            [sweep]
            sizes = [5, 10]
        "#;

        let config: HarnessConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sweep.sizes, vec![5, 10]);
        assert_eq!(config.sweep.range_factor, 10);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [sweep]
            sizes = [10, 20, 40]
            range_factor = 4
            seed = 99
            on_failure = "retire"

            [logging]
            level = "debug"
            format = "json"

            [output]
            format = "json"
            plot = false

            [[algorithms]]
            id = "fibonacci"
            ceiling = 25

            [[algorithms]]
            id = "factorial"
            enabled = false

            [[algorithms]]
            id = "cubic_time"
            unbounded = true
        "#;

        let config: HarnessConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sweep.seed, Some(99));
        assert_eq!(config.sweep.on_failure, FailurePolicy::Retire);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.plot);
        assert_eq!(config.algorithms.len(), 3);
        assert!(config.algorithms[0].enabled);
        assert!(!config.algorithms[1].enabled);
        assert!(config.algorithms[2].unbounded);

        let plan = config.plan();
        assert_eq!(plan.sizes(), &[10, 20, 40]);
        assert_eq!(plan.range_factor(), 4);
        assert_eq!(plan.seed(), Some(99));

        let catalog = config.catalog().unwrap();
        assert!(catalog.get("factorial").is_none());
        assert_eq!(catalog.get("fibonacci").unwrap().ceiling, Some(25));
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_catalog_rejects_unknown_override() {
        let config = HarnessConfig {
            algorithms: vec![AlgorithmOverride::new("bogo_sort")],
            ..Default::default()
        };
        assert!(config.catalog().is_err());
    }

    #[test]
    fn test_catalog_rejects_everything_disabled() {
        let config = HarnessConfig {
            algorithms: Catalog::standard()
                .ids()
                .into_iter()
                .map(|id| AlgorithmOverride::new(id).enabled(false))
                .collect(),
            ..Default::default()
        };
        assert!(config.catalog().is_err());
    }

    #[test]
    fn test_override_builder() {
        let entry = AlgorithmOverride::new("fibonacci").with_ceiling(30);
        assert_eq!(entry.ceiling, Some(30));
        assert!(entry.enabled);

        let entry = AlgorithmOverride::new("factorial").unbounded();
        let config = HarnessConfig {
            algorithms: vec![entry],
            ..Default::default()
        };
        assert_eq!(config.catalog().unwrap().get("factorial").unwrap().ceiling, None);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }
}
