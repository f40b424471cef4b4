//! Error types for the CLI application.
//!
//! Engine errors, configuration problems and I/O failures are funnelled into
//! [`CliError`] so command handlers can use the `?` operator throughout.

use std::fmt;

use casino_engine::errors::{DeckError, ParseCardError};

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<DeckError> for CliError {
    fn from(error: DeckError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<ParseCardError> for CliError {
    fn from(error: ParseCardError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_errors_map_to_engine() {
        let e: CliError = DeckError::InsufficientCards {
            requested: 60,
            remaining: 52,
        }
        .into();
        assert!(matches!(e, CliError::Engine(_)));
        assert_eq!(
            e.to_string(),
            "Engine error: Not enough cards remaining: requested 60, remaining 52"
        );
    }

    #[test]
    fn parse_errors_map_to_invalid_input() {
        let e: CliError = ParseCardError::InvalidSuit("X".into()).into();
        assert_eq!(e.to_string(), "Invalid input: Invalid suit: X");
    }
}
