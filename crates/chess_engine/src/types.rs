//! # Chess Engine Core Types
//!
//! ## Overview
//!
//! This module defines the data the search core exchanges with its rules-engine
//! collaborator. The core never owns a board: it sees positions only through the
//! [`crate::rules::Rules`] trait, and everything crossing that boundary is one of
//! the small value types below.
//!
//! ## Sides and Pieces
//!
//! - [`Side`] is the colour of a player. The evaluator is always constructed for
//!   one fixed *maximizing* side (the bot), and every score is relative to it.
//! - [`PieceKind`] is the piece type; [`Piece`] pairs it with its owner.
//!
//! ## Squares
//!
//! [`Square`] is a 0-63 index with `a1 = 0`, `h1 = 7`, `a8 = 56`, `h8 = 63`
//! (`index = rank * 8 + file`). The same layout is used by the shakmaty adapter,
//! so conversion is a plain index copy.
//!
//! ## Moves
//!
//! [`ChessMove`] is produced by the rules engine's move generation and is
//! immutable afterwards. It carries a SAN `notation` string for diagnostics
//! only: two moves are equal when origin, destination and promotion match,
//! whatever their notation says.
//!
//! ## Scores
//!
//! [`Score`] is an integer in **tenths of a point**. A pawn is 10 points, so 100
//! tenths; one legal move of mobility is 0.1 points, so exactly 1 tenth. Keeping
//! the unit this small keeps the whole evaluation in exact integer arithmetic,
//! which is what lets pruned and exhaustive searches be compared bit for bit.

use std::fmt;

/// Position evaluation in tenths of a point, relative to the maximizing side
pub type Score = i32;

/// Player colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Piece type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase letter used in SAN/UCI promotion suffixes
    pub fn char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A piece standing on a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }
}

/// Board square, `a1 = 0` .. `h8 = 63`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Build a square from its 0-63 index, `None` when out of range
    #[inline]
    pub fn new(index: u8) -> Option<Square> {
        (index < 64).then_some(Square(index))
    }

    /// Build a square from file (0 = a) and rank (0 = rank 1)
    #[inline]
    pub fn from_coords(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Iterate all 64 squares from a1 to h8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{}{}", file, rank)
    }
}

/// A candidate transition produced by the rules engine
#[derive(Debug, Clone, Eq)]
pub struct ChessMove {
    /// Origin square
    pub from: Square,
    /// Destination square (the king's destination for castling)
    pub to: Square,
    /// Promotion choice, if the move promotes a pawn
    pub promotion: Option<PieceKind>,
    /// Standard algebraic notation, diagnostics only
    pub notation: String,
}

impl ChessMove {
    pub fn new(from: Square, to: Square, promotion: Option<PieceKind>, notation: String) -> Self {
        Self {
            from,
            to,
            promotion,
            notation,
        }
    }

    /// Coordinate form, e.g. `e2e4` or `e7e8q`
    pub fn uci(&self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.char()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.notation.is_empty() {
            write!(f, "{}", self.uci())
        } else {
            write!(f, "{}", self.notation)
        }
    }
}

/// Counters collected during one move selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Searcher invocations, leaves included
    pub nodes: u64,
    /// Branches abandoned because `beta <= alpha`
    pub cutoffs: u64,
}
