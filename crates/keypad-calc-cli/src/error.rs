//! Error types for the CLI

use thiserror::Error;

use keypad_calc::core::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that end a CLI run
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Out-of-range calculator setting
    #[error("Invalid setting: {0}")]
    InvalidSetting(#[from] ConfigError),

    /// A `--keys` token with no key mapping
    #[error("Unknown key: {token}")]
    UnknownKey {
        /// Offending token
        token: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown-key error
    #[must_use]
    pub fn unknown_key(token: impl Into<String>) -> Self {
        Self::UnknownKey {
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::config("bad file").to_string(),
            "Configuration error: bad file"
        );
        assert_eq!(CliError::unknown_key("%").to_string(), "Unknown key: %");
        assert_eq!(
            CliError::from(ConfigError::EmptyTape).to_string(),
            "Invalid setting: tape capacity must be at least 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CliError = io.into();
        assert!(matches!(err, CliError::Io(_)));
    }
}
