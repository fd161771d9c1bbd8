//! Error types for game commands and configuration.

use super::position::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// Reason a game command was rejected.
///
/// A rejected command never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The current board already has a winner.
    #[display("Game is already decided")]
    GameAlreadyDecided,

    /// The requested step is not in the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A raw cell index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    InvalidPosition(#[error(not(source))] usize),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read config file: {}", err))
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}
