//! Configuration validation system.

use super::types::HarnessConfig;
use crate::algorithms::Catalog;
use std::collections::HashSet;

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field path that failed validation.
    pub field: String,
    /// Error message.
    pub message: String,
    /// Severity level.
    pub severity: ValidationSeverity,
}

impl ValidationError {
    /// Create a new error.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Error,
        }
    }

    /// Create a new warning.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Warning,
        }
    }
}

/// Severity of validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    /// Error - configuration is invalid.
    Error,
    /// Warning - configuration may have issues.
    Warning,
}

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty (valid) result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Check if the validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self
            .errors
            .iter()
            .any(|e| e.severity == ValidationSeverity::Error)
    }

    /// Get all validation issues, errors and warnings alike.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get only errors (not warnings).
    #[must_use]
    pub fn errors_only(&self) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Error)
            .collect()
    }

    /// Get only warnings.
    #[must_use]
    pub fn warnings(&self) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Warning)
            .collect()
    }
}

/// Trait for configuration validators.
pub trait Validator: std::fmt::Debug + Send + Sync {
    /// Validate a configuration and return any errors.
    fn validate(&self, config: &HarnessConfig) -> ValidationResult;
}

/// Checks the `[sweep]` section.
#[derive(Debug, Default)]
pub struct BasicValidator;

impl BasicValidator {
    /// Create a new basic validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Validator for BasicValidator {
    fn validate(&self, config: &HarnessConfig) -> ValidationResult {
        let mut result = ValidationResult::new();
        let sweep = &config.sweep;

        if sweep.sizes.is_empty() {
            result.add_error(ValidationError::error(
                "sweep.sizes",
                "At least one input size is required",
            ));
        }

        if sweep.sizes.contains(&0) {
            result.add_error(ValidationError::error(
                "sweep.sizes",
                "Input sizes must be at least 1",
            ));
        }

        if sweep.range_factor == 0 {
            result.add_error(ValidationError::error(
                "sweep.range_factor",
                "Range factor must be at least 1",
            ));
        }

        let mut seen = HashSet::new();
        for size in &sweep.sizes {
            if !seen.insert(size) {
                result.add_error(ValidationError::warning(
                    "sweep.sizes",
                    format!("Duplicate size {size} will be measured once"),
                ));
            }
        }

        if sweep.sizes.windows(2).any(|w| w[0] > w[1]) {
            result.add_error(ValidationError::warning(
                "sweep.sizes",
                "Sizes are not ascending; they will be swept in ascending order",
            ));
        }

        result
    }
}

/// Checks `[[algorithms]]` overrides against the standard catalog.
#[derive(Debug, Default)]
pub struct AlgorithmValidator;

impl AlgorithmValidator {
    /// Create a new algorithm validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Validator for AlgorithmValidator {
    fn validate(&self, config: &HarnessConfig) -> ValidationResult {
        let mut result = ValidationResult::new();
        let catalog = Catalog::standard();

        let mut seen = HashSet::new();
        let mut disabled = HashSet::new();
        for entry in &config.algorithms {
            let field = format!("algorithms.{}", entry.id);

            if !seen.insert(entry.id.as_str()) {
                result.add_error(ValidationError::error(
                    &field,
                    format!("Duplicate override for algorithm: {}", entry.id),
                ));
            }

            if catalog.get(&entry.id).is_none() {
                result.add_error(ValidationError::error(
                    &field,
                    format!(
                        "Unknown algorithm '{}' (known: {})",
                        entry.id,
                        catalog.ids().join(", ")
                    ),
                ));
                continue;
            }

            if !entry.enabled {
                disabled.insert(entry.id.as_str());
            }

            if entry.unbounded && entry.ceiling.is_some() {
                result.add_error(ValidationError::error(
                    &field,
                    "Set either 'ceiling' or 'unbounded', not both",
                ));
            }
        }

        if disabled.len() == catalog.len() {
            result.add_error(ValidationError::error(
                "algorithms",
                "Every algorithm is disabled",
            ));
        }

        let Some(&smallest) = config.sweep.sizes.iter().min() else {
            return result;
        };
        for spec in &catalog {
            let entry = config.algorithms.iter().find(|e| e.id == spec.id);
            if entry.is_some_and(|e| !e.enabled) {
                continue;
            }
            let ceiling = match entry {
                Some(e) if e.unbounded => None,
                Some(e) => e.ceiling.or(spec.ceiling),
                None => spec.ceiling,
            };
            if let Some(ceiling) = ceiling.filter(|&c| c < smallest) {
                result.add_error(ValidationError::warning(
                    format!("algorithms.{}.ceiling", spec.id),
                    format!(
                        "Ceiling {ceiling} is below the smallest size {smallest}; \
                         {} will not be measured",
                        spec.name
                    ),
                ));
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlgorithmOverride;

    #[test]
    fn test_basic_validator_valid() {
        let config = HarnessConfig::default();
        let result = BasicValidator::new().validate(&config);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_basic_validator_empty_sizes() {
        let mut config = HarnessConfig::default();
        config.sweep.sizes.clear();

        let result = BasicValidator::new().validate(&config);
        assert!(!result.is_valid());
        assert!(result.errors()[0].message.contains("At least one"));
    }

    #[test]
    fn test_basic_validator_zero_size_and_range() {
        let mut config = HarnessConfig::default();
        config.sweep.sizes = vec![0, 10];
        config.sweep.range_factor = 0;

        let result = BasicValidator::new().validate(&config);
        assert_eq!(result.errors_only().len(), 2);
    }

    #[test]
    fn test_basic_validator_warns_on_unsorted_duplicates() {
        let mut config = HarnessConfig::default();
        config.sweep.sizes = vec![20, 10, 20];

        let result = BasicValidator::new().validate(&config);
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 2);
    }

    #[test]
    fn test_algorithm_validator_unknown_and_duplicate() {
        let mut config = HarnessConfig::default();
        config.algorithms.push(AlgorithmOverride::new("fibonacci"));
        config.algorithms.push(AlgorithmOverride::new("fibonacci"));
        config.algorithms.push(AlgorithmOverride::new("quick_sort"));

        let result = AlgorithmValidator::new().validate(&config);
        assert!(!result.is_valid());
        let messages: Vec<_> = result.errors().iter().map(|e| e.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("Duplicate")));
        assert!(messages.iter().any(|m| m.contains("Unknown algorithm 'quick_sort'")));
    }

    #[test]
    fn test_algorithm_validator_conflicting_ceiling() {
        let mut config = HarnessConfig::default();
        config
            .algorithms
            .push(AlgorithmOverride::new("factorial").with_ceiling(8).unbounded());

        let result = AlgorithmValidator::new().validate(&config);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_algorithm_validator_warns_on_unreachable_ceiling() {
        let mut config = HarnessConfig::default();
        config.sweep.sizes = vec![15, 20];

        let result = AlgorithmValidator::new().validate(&config);
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].message.contains("Factorial"));

        config
            .algorithms
            .push(AlgorithmOverride::new("fibonacci").with_ceiling(12));
        let result = AlgorithmValidator::new().validate(&config);
        assert_eq!(result.warnings().len(), 2);
        assert!(result.warnings()[0].message.contains("Fibonacci"));
    }

    #[test]
    fn test_algorithm_validator_skips_disabled_and_unbounded() {
        let mut config = HarnessConfig::default();
        config.sweep.sizes = vec![25, 30];
        config
            .algorithms
            .push(AlgorithmOverride::new("factorial").enabled(false));
        config
            .algorithms
            .push(AlgorithmOverride::new("fibonacci").unbounded());

        let result = AlgorithmValidator::new().validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_algorithm_validator_all_disabled() {
        let mut config = HarnessConfig::default();
        for id in Catalog::standard().ids() {
            config
                .algorithms
                .push(AlgorithmOverride::new(id).enabled(false));
        }

        let result = AlgorithmValidator::new().validate(&config);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_unknown_disabled_id_does_not_count_as_disabled_algorithm() {
        let mut config = HarnessConfig::default();
        for id in Catalog::standard().ids().into_iter().skip(1) {
            config
                .algorithms
                .push(AlgorithmOverride::new(id).enabled(false));
        }
        config
            .algorithms
            .push(AlgorithmOverride::new("bogo_sort").enabled(false));

        let result = AlgorithmValidator::new().validate(&config);
        let errors = result.errors_only();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Unknown algorithm 'bogo_sort'"));
    }
}
