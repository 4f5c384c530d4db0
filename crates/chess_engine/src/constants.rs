//! # Chess Engine Constants - Evaluation Values & Search Bounds
//!
//! ## Valuation Units
//!
//! All values are in **tenths of a point** (see [`crate::types::Score`]):
//!
//! | Piece  | Points | Score |
//! |--------|--------|-------|
//! | Pawn   | 10     | 100   |
//! | Knight | 30     | 300   |
//! | Bishop | 30     | 300   |
//! | Rook   | 50     | 500   |
//! | Queen  | 90     | 900   |
//! | King   | 900    | 9000  |
//!
//! The king value never decides a search under legal play (kings are not
//! captured); it is only a margin that keeps every side's own king dominant in
//! the material sum.
//!
//! ## Terminal Sentinels
//!
//! `MATE_SCORE` is 10,000 points. The largest reachable material difference is
//! around 2,000 points (king plus a full set of promoted queens), so a mate
//! score is always an order of magnitude away from any material score.
//!
//! ## Search Window
//!
//! `AB_INF` bounds the initial alpha-beta window and sits above `MATE_SCORE`
//! so that a mated line still improves on the initial window.

use crate::types::{PieceKind, Score};

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 300;
pub const BISHOP_VALUE: Score = 300;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;
pub const KING_VALUE: Score = 9000;

/// Score added per legal move available to the side to move
pub const MOBILITY_WEIGHT: Score = 1;

/// The maximizing side has delivered checkmate
pub const MATE_SCORE: Score = 100_000;

/// Any drawn position
pub const DRAW_SCORE: Score = 0;

/// Initial alpha-beta window bound
pub const AB_INF: Score = 1_000_000;

/// Material value of a piece type
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}
