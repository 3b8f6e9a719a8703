//! Error types for the CLI application.

use std::fmt;

use sevens_ai::loader::LoaderError;
use sevens_engine::errors::GameError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// Every variant maps to exit code `2`; usage errors never get this far.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, round log, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(GameError),

    /// A strategy module could not be loaded
    Plugin(LoaderError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::Plugin(e) => write!(f, "Plugin error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            CliError::Plugin(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

impl From<LoaderError> for CliError {
    fn from(error: LoaderError) -> Self {
        CliError::Plugin(error)
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
    fn messages_carry_their_category() {
        let e: CliError = GameError::NoPlayers.into();
        assert_eq!(e.to_string(), "Engine error: No players registered");
        let e: CliError = ConfigError::Invalid("bad".into()).into();
        assert_eq!(e.to_string(), "Configuration error: bad");
    }
}
