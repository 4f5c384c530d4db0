//! Fixed-depth alpha-beta search and root move selection
//!
//! This module implements the bot's move choice using:
//! - Minimax with alpha-beta pruning (recursive, fixed depth)
//! - Make/unmake on one shared position instead of cloning per node
//! - A difficulty-driven random branch that skips the search entirely
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta search algorithm
//! - `make_unmake` - Balanced apply/unmake around a child search
//! - `selector` - Root move iteration, randomization and tie-breaking

mod alphabeta;
mod make_unmake;
mod selector;

#[cfg(test)]
pub(crate) mod tree;

pub use alphabeta::AlphaBeta;
pub use selector::{choose_move, select_move, Selection};
