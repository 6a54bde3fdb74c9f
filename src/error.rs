//! Error types shared across the crate.
//!
//! Numeric operations report bad input through [`NumericError`]; loading a
//! tour configuration reports through [`ConfigError`]. Everything else in
//! the crate is total and never fails.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a numeric operation whose input lies outside its domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error("invalid argument {value} to {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        value: i64,
        reason: &'static str,
    },
}

impl NumericError {
    pub fn invalid_argument(operation: &'static str, value: i64, reason: &'static str) -> Self {
        Self::InvalidArgument {
            operation,
            value,
            reason,
        }
    }

    /// The operation that rejected its input.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::InvalidArgument { operation, .. } => operation,
        }
    }
}

/// Failure to read, parse or validate a tour configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = NumericError::invalid_argument(
            "factorial",
            -5,
            "factorial is not defined for negative numbers",
        );
        assert_eq!(
            err.to_string(),
            "invalid argument -5 to factorial: factorial is not defined for negative numbers"
        );
        assert_eq!(err.operation(), "factorial");
    }

    #[test]
    fn test_config_error_from_toml() {
        let parse_err = toml::from_str::<toml::Value>("key = = 1").unwrap_err();
        let err = ConfigError::from(parse_err);
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigError::invalid_value("counter_steps", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid value for 'counter_steps': must be at least 1"
        );
    }
}
