//! Error types for game module
//!
//! Provides custom error types for the bot session: request admission,
//! difficulty selection and failures surfaced by the search.

use chess_engine::ChessEngineError;

/// Errors that can occur while asking the bot for a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BotError {
    /// A move request arrived while a previous one is still in flight
    #[error("Bot is already thinking about a move")]
    Busy,

    /// The side to move has no legal move
    #[error("No legal moves available in this position")]
    NoLegalMoves,

    /// Difficulty name not present in the table
    #[error("Unknown difficulty: {name}")]
    UnknownDifficulty { name: String },

    /// Rules-engine contract violation or a crashed search task
    #[error("Internal search failure: {message}")]
    InternalSearchFailure { message: String },
}

impl From<ChessEngineError> for BotError {
    fn from(err: ChessEngineError) -> Self {
        match err {
            ChessEngineError::NoLegalMoves => BotError::NoLegalMoves,
            other => BotError::InternalSearchFailure {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias for bot operations
pub type BotResult<T> = Result<T, BotError>;
