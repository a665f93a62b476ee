//! Configuration file loader.

use super::error::{ConfigError, ConfigResult};
use super::types::HarnessConfig;
use super::validation::{AlgorithmValidator, BasicValidator, ValidationError, Validator};
use std::path::Path;

/// Configuration loader with validation support.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Validators to run on loaded configuration.
    validators: Vec<Box<dyn Validator>>,
}

impl ConfigLoader {
    /// Create a new configuration loader with no validators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with the built-in validators registered.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_validator(BasicValidator::new())
            .with_validator(AlgorithmValidator::new())
    }

    /// Add a validator to the loader.
    #[must_use]
    pub fn with_validator<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Load configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ConfigResult<HarnessConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.load_str(&content)
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML is malformed
    /// - Validation fails
    pub fn load_str(&self, content: &str) -> ConfigResult<HarnessConfig> {
        let config: HarnessConfig = toml::from_str(content)?;
        self.validate(&config)?;
        Ok(config)
    }

    /// Load configuration from `path`, or the defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is given but cannot be read or parsed.
    pub fn load_or_default<P: AsRef<Path>>(&self, path: Option<P>) -> ConfigResult<HarnessConfig> {
        match path {
            Some(path) => self.load(path),
            None => Ok(HarnessConfig::default()),
        }
    }

    /// Validate a configuration against all registered validators.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] listing every error-level
    /// issue from the first failing validator.
    pub fn validate(&self, config: &HarnessConfig) -> ConfigResult<()> {
        for validator in &self.validators {
            let result = validator.validate(config);
            if !result.is_valid() {
                let errors: Vec<String> = result
                    .errors_only()
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                return Err(ConfigError::ValidationError(errors.join("; ")));
            }
        }
        Ok(())
    }

    /// Warning-level issues from every registered validator.
    #[must_use]
    pub fn warnings(&self, config: &HarnessConfig) -> Vec<ValidationError> {
        self.validators
            .iter()
            .flat_map(|validator| {
                validator
                    .validate(config)
                    .warnings()
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Render a configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self, config: &HarnessConfig) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(config)?)
    }
}
