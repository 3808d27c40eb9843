//! Error types for the engine and configuration.

use derive_more::{Display, Error};

/// Errors raised by the decision engine.
///
/// These are precondition violations: the controller checks
/// [`Board::is_full`](crate::Board::is_full) before asking for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Asked to move on a board with no empty cell.
    #[display("No legal moves: the board is full")]
    NoLegalMoves,
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
