//! Core module - configuration and application infrastructure
//!
//! Everything the bot needs before it can search: the JSON-backed
//! [`BotConfig`] and the validated
//! [`crate::game::ai::DifficultyTable`] built from it.
//!
//! # Configuration Flow
//!
//! 1. [`BotConfig::load_or_default`] reads `chessbot.json` (or falls back to
//!    the built-in easy/medium/hard table with a warning)
//! 2. [`BotConfig::difficulty_table`] validates every profile and the default
//! 3. [`crate::game::ai::BotSession::new`] takes the validated config
//!
//! # Errors
//!
//! [`CoreError`] covers file I/O, JSON and validation failures. Callers that
//! only want a working configuration use `load_or_default`, which never fails.

pub mod config;
pub mod error;

pub use config::{BotConfig, CONFIG_FILENAME};
pub use error::{CoreError, CoreResult};
