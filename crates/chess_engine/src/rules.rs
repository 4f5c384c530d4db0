//! Rules-engine capability consumed by the search
//!
//! The search core does not know the rules of chess. Everything it needs from
//! a position (move generation, make/unmake, terminal detection, piece lookup)
//! goes through [`Rules`]. [`crate::board::ShakmatyBoard`] is the stock
//! implementation; tests plug in synthetic game trees.
//!
//! # Make/Unmake Contract
//!
//! `apply` mutates the position in place and `unmake` reverts the most recent
//! `apply`, strictly LIFO. After N applies followed by N unmakes the position
//! must be observably identical to where it started (same pieces, same side
//! to move, same legal moves). The searcher relies on this to share a single
//! position instance across the whole tree.

use crate::error::ChessEngineResult;
use crate::types::{ChessMove, Piece, Side, Square};

/// Move generation, make/unmake and terminal queries for one mutable position
pub trait Rules {
    /// All legal moves for the side to move, in a stable order
    fn legal_moves(&self) -> Vec<ChessMove>;

    /// Same moves as [`Rules::legal_moves`], with `notation` filled in
    ///
    /// Only called at the root, so implementations may spend more here.
    fn annotated_moves(&self) -> Vec<ChessMove> {
        self.legal_moves()
    }

    /// Mobility of the side to move
    fn legal_move_count(&self) -> usize {
        self.legal_moves().len()
    }

    /// Play `mv` in place
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChessEngineError::IllegalMove`] if `mv` is not legal
    /// in the current position. The position is left untouched in that case.
    fn apply(&mut self, mv: &ChessMove) -> ChessEngineResult<()>;

    /// Revert the most recent `apply`
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChessEngineError::UnbalancedUnmake`] when there is no
    /// applied move left to revert.
    fn unmake(&mut self) -> ChessEngineResult<()>;

    fn side_to_move(&self) -> Side;

    fn is_checkmate(&self) -> bool;

    /// Stalemate, insufficient material, repetition or move-count draws
    fn is_draw(&self) -> bool;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Checkmate, draw, or nothing left to play
    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw() || self.legal_moves().is_empty()
    }
}
