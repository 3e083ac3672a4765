//! CLI error types.

use finrecipe_models::analytical::AnalyticalError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the user by the `finrecipe` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A formula rejected its inputs or degenerated numerically.
    #[error("Pricing error: {0}")]
    Pricing(#[from] AnalyticalError),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("Serialisation error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use finrecipe_core::{DomainError, Parameter};

    #[test]
    fn test_pricing_error_display() {
        let err: CliError = AnalyticalError::Domain(DomainError::OutOfRange {
            parameter: Parameter::Expiry,
            value: 30.0,
            min: 0.5,
            max: 20.0,
        })
        .into();
        assert_eq!(
            err.to_string(),
            "Pricing error: time to expiry (T) = 30 outside valid range [0.5, 20]"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err: CliError = ConfigError::InvalidFormat("yaml".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.to_string().contains("yaml"));
    }
}
