//! Bot game logic
//!
//! The part of the application that turns a position into a bot move:
//!
//! - `ai` - difficulty profiles and the [`ai::BotSession`] controller
//! - `error` - [`BotError`] reported out-of-band by the session
//!
//! Move generation, evaluation and search live in the `chess_engine` crate;
//! this module only decides *when* to search and *how hard*.

pub mod ai;
pub mod error;

pub use error::{BotError, BotResult};
