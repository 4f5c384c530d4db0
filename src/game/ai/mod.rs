//! Chess bot opponent
//!
//! Connects the `chess_engine` move selector to a caller that wants moves
//! delivered asynchronously.
//!
//! # Architecture
//!
//! - `DifficultyTable` / `DifficultyProfile`: named depth + randomness levels
//! - `BotSession`: active difficulty, busy guard and the request lifecycle
//! - `PendingBotMove`: task handle for an in-flight request
//! - `Rejected`: a request that was not admitted, with the position handed back
//!
//! # Integration Strategy
//!
//! The caller owns the position. A request moves it into the session task,
//! the search works on it in place with make/unmake, and the reply hands it
//! back unchanged. The caller then applies the delivered move through its
//! own rules engine, the same way a human move would be applied.

pub mod resource;
pub mod session;

// Re-export for convenience
pub use resource::{DifficultyProfile, DifficultyTable, DEFAULT_DIFFICULTY, DEFAULT_THINK_DELAY_MS};
pub use session::{BotReply, BotSession, PendingBotMove, Rejected};
