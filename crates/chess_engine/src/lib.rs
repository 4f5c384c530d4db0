//! Chess bot search core
//!
//! Fixed-depth alpha-beta search over a rules engine it does not own:
//! - [`Rules`] is the capability the search consumes (move generation,
//!   make/unmake, terminal queries, piece lookup)
//! - [`ShakmatyBoard`] implements it on top of `shakmaty`
//! - [`Evaluator`] scores positions for one fixed maximizing side
//! - [`AlphaBeta`] searches the shared position with make/unmake
//! - [`select_move`] / [`choose_move`] pick the move at the root, including
//!   the difficulty-driven random branch
//!
//! ```no_run
//! use chess_engine::{select_move, ShakmatyBoard};
//!
//! let mut board = ShakmatyBoard::new();
//! let mv = select_move(&mut board, 2, 0.0, &mut rand::rng()).unwrap();
//! println!("{}", mv);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod rules;
pub mod search;
pub mod types;

pub use board::ShakmatyBoard;
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::Evaluator;
pub use rules::Rules;
pub use search::{choose_move, select_move, AlphaBeta, Selection};
pub use types::{ChessMove, Piece, PieceKind, Score, SearchStats, Side, Square};
