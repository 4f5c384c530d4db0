//! Error types for chess engine
//!
//! Provides custom error types for move selection, search bookkeeping and
//! the rules-engine collaborator contract.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// The side to move has no legal move (checkmate or stalemate)
    #[error("No legal moves available in this position")]
    NoLegalMoves,

    /// A move was applied that the rules engine does not accept here
    #[error("Illegal move {uci} in position {position}")]
    IllegalMove { uci: String, position: String },

    /// `unmake` was called with nothing left to revert
    #[error("Unmake called with an empty move history")]
    UnbalancedUnmake,

    /// Search depth must be at least one ply
    #[error("Invalid search depth {depth} (must be >= 1)")]
    InvalidDepth { depth: u8 },

    /// FEN could not be parsed or describes an impossible position
    #[error("Invalid FEN '{fen}': {message}")]
    InvalidFen { fen: String, message: String },

    /// Any other broken invariant detected during search
    #[error("Search algorithm error: {message}")]
    SearchError { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
