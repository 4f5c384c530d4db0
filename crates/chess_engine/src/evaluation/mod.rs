//! Static position evaluation
//!
//! Scores a position from one fixed side's perspective (the *maximizing*
//! side, i.e. the bot) using:
//! - Terminal detection (checkmate sentinels, draws score zero)
//! - Material count (piece values)
//! - Mobility (number of legal moves of the side to move)
//!
//! ## Module Organization
//!
//! - `material` - Material balance evaluation
//! - `position` - Full position evaluation (terminal + material + mobility)

mod material;
mod position;

pub use material::evaluate_material;
pub use position::{evaluate_mobility, Evaluator};
