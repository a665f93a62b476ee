//! Configuration error types.

use crate::algorithms::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read configuration file '{path}': {source}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration validation failed.
    #[error("configuration validation failed: {0}")]
    ValidationError(String),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// The algorithm overrides do not fit the catalog.
    #[error("algorithm selection error: {0}")]
    Catalog(#[from] CatalogError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::NotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(
            err.to_string(),
            "configuration file not found: /tmp/missing.toml"
        );

        let err: ConfigError = CatalogError::UnknownAlgorithm("heap_sort".to_string()).into();
        assert_eq!(
            err.to_string(),
            "algorithm selection error: unknown algorithm id: heap_sort"
        );
    }
}
