pub mod core;
pub mod game;

pub use game::ai::{
    BotReply, BotSession, DifficultyProfile, DifficultyTable, PendingBotMove, Rejected,
};
pub use game::{BotError, BotResult};
