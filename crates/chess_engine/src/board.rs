//! Shakmaty-backed rules engine
//!
//! [`ShakmatyBoard`] implements [`Rules`] on top of the `shakmaty` crate. It
//! keeps the position history needed for `unmake` and for repetition draws:
//! every `apply` pushes the previous position, every `unmake` pops it back.
//!
//! # Draw Detection
//!
//! A position is drawn when it is stalemate, when neither side has mating
//! material, when the halfmove clock reached 100 (fifty-move rule), or when the
//! current position occurred three times along the applied history.
//!
//! # Notation
//!
//! SAN needs its own legal-move generation per move, so [`Rules::legal_moves`]
//! leaves `notation` empty and only [`Rules::annotated_moves`] fills it. The
//! searcher uses the former, the root of the move selector the latter.

use crate::error::{ChessEngineError, ChessEngineResult};
use crate::rules::Rules;
use crate::types::{ChessMove, Piece, PieceKind, Side, Square};
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{Bitboard, Board, CastlingMode, Chess, Color, EnPassantMode, Move, Position, Role};
use std::fmt;

/// Halfmove clock value at which the fifty-move rule applies
const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Occurrences of one position that make a repetition draw
const REPETITION_LIMIT: usize = 3;

/// Identity of a position for repetition purposes
#[derive(Debug, Clone, PartialEq, Eq)]
struct RepetitionKey {
    board: Board,
    turn: Color,
    castling: Bitboard,
    ep_square: Option<shakmaty::Square>,
}

impl RepetitionKey {
    fn of(pos: &Chess) -> Self {
        Self {
            board: pos.board().clone(),
            turn: pos.turn(),
            castling: pos.castles().castling_rights(),
            ep_square: pos.ep_square(EnPassantMode::Legal),
        }
    }
}

/// Mutable chess position with make/unmake support
#[derive(Debug, Clone)]
pub struct ShakmatyBoard {
    pos: Chess,
    history: Vec<Chess>,
    keys: Vec<RepetitionKey>,
}

impl Default for ShakmatyBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ShakmatyBoard {
    /// Standard initial setup
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// Wrap an existing shakmaty position with an empty history
    pub fn from_position(pos: Chess) -> Self {
        Self {
            pos,
            history: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// Parse a FEN string
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::InvalidFen`] if the string is not valid FEN
    /// or describes an illegal position.
    pub fn from_fen(fen: &str) -> ChessEngineResult<Self> {
        let parsed = fen
            .parse::<Fen>()
            .map_err(|e| ChessEngineError::InvalidFen {
                fen: fen.to_string(),
                message: e.to_string(),
            })?;
        let pos: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| ChessEngineError::InvalidFen {
                fen: fen.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::from_position(pos))
    }

    /// FEN of the current position
    pub fn fen(&self) -> String {
        Fen::from_position(self.pos.clone(), EnPassantMode::Legal).to_string()
    }

    /// The wrapped shakmaty position
    pub fn position(&self) -> &Chess {
        &self.pos
    }

    /// Number of applied moves that can still be unmade
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    fn find_legal(&self, mv: &ChessMove) -> Option<Move> {
        self.pos
            .legal_moves()
            .into_iter()
            .find(|m| Self::convert(m, String::new()) == *mv)
    }

    fn convert(m: &Move, notation: String) -> ChessMove {
        let to = match *m {
            Move::Castle { king, rook } => {
                // Standard castling: the king lands on the g- or c-file of its rank
                let file = if (rook as u8) % 8 > (king as u8) % 8 { 6 } else { 2 };
                (king as u8) / 8 * 8 + file
            }
            _ => m.to() as u8,
        };
        let from = m.from().map(|sq| sq as u8).unwrap_or(to);
        ChessMove::new(
            to_square(from),
            to_square(to),
            m.promotion().map(kind_of),
            notation,
        )
    }

    fn repetitions(&self) -> usize {
        let current = RepetitionKey::of(&self.pos);
        1 + self.keys.iter().filter(|key| **key == current).count()
    }
}

impl Rules for ShakmatyBoard {
    fn legal_moves(&self) -> Vec<ChessMove> {
        self.pos
            .legal_moves()
            .iter()
            .map(|m| Self::convert(m, String::new()))
            .collect()
    }

    fn annotated_moves(&self) -> Vec<ChessMove> {
        self.pos
            .legal_moves()
            .iter()
            .map(|m| Self::convert(m, San::from_move(&self.pos, m).to_string()))
            .collect()
    }

    fn legal_move_count(&self) -> usize {
        self.pos.legal_moves().len()
    }

    fn apply(&mut self, mv: &ChessMove) -> ChessEngineResult<()> {
        let Some(m) = self.find_legal(mv) else {
            return Err(ChessEngineError::IllegalMove {
                uci: mv.uci(),
                position: self.fen(),
            });
        };
        self.keys.push(RepetitionKey::of(&self.pos));
        self.history.push(self.pos.clone());
        self.pos.play_unchecked(&m);
        Ok(())
    }

    fn unmake(&mut self) -> ChessEngineResult<()> {
        let previous = self.history.pop().ok_or(ChessEngineError::UnbalancedUnmake)?;
        self.keys.pop();
        self.pos = previous;
        Ok(())
    }

    fn side_to_move(&self) -> Side {
        side_of(self.pos.turn())
    }

    fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    fn is_draw(&self) -> bool {
        self.pos.is_stalemate()
            || self.pos.is_insufficient_material()
            || self.pos.halfmoves() >= FIFTY_MOVE_HALFMOVES
            || self.repetitions() >= REPETITION_LIMIT
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pos
            .board()
            .piece_at(shakmaty::Square::new(u32::from(square.index())))
            .map(|p| Piece::new(side_of(p.color), kind_of(p.role)))
    }
}

impl fmt::Display for ShakmatyBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen())
    }
}

fn to_square(index: u8) -> Square {
    // shakmaty squares are 0..64 with the same a1 = 0 layout
    Square::new(index & 63).unwrap_or_else(|| unreachable!("index masked to 0..64"))
}

fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn kind_of(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}
