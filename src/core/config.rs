//! Bot configuration persistence
//!
//! Loads and saves [`BotConfig`] as JSON. The configuration holds the
//! thinking delay, the default difficulty and the difficulty profiles.
//!
//! # File Location
//!
//! The demo binary looks for `chessbot.json` in the working directory unless
//! `--config` points somewhere else.
//!
//! # Error Handling
//!
//! [`BotConfig::load`] reports every failure. [`BotConfig::load_or_default`]
//! is the forgiving variant used at startup: a missing file, an unreadable
//! file, malformed JSON or an invalid profile all fall back to the built-in
//! defaults with a `[SETTINGS]` warning.
//!
//! # Format
//!
//! ```json
//! {
//!   "think_delay_ms": 500,
//!   "default_difficulty": "medium",
//!   "profiles": [
//!     { "name": "easy", "depth": 1, "randomness": 0.3 },
//!     { "name": "medium", "depth": 2, "randomness": 0.1 },
//!     { "name": "hard", "depth": 3, "randomness": 0.0 }
//!   ]
//! }
//! ```
//!
//! Missing fields take their default values.

use crate::core::{CoreError, CoreResult};
use crate::game::ai::resource::{
    DifficultyProfile, DifficultyTable, DEFAULT_DIFFICULTY, DEFAULT_THINK_DELAY_MS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Config filename
pub const CONFIG_FILENAME: &str = "chessbot.json";

/// Bot settings as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Pause before each search starts, in milliseconds
    pub think_delay_ms: u64,

    /// Difficulty active when a session starts
    pub default_difficulty: String,

    pub profiles: Vec<DifficultyProfile>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
            default_difficulty: DEFAULT_DIFFICULTY.to_string(),
            profiles: DifficultyTable::default().iter().cloned().collect(),
        }
    }
}

impl BotConfig {
    /// Read a config file
    ///
    /// # Errors
    ///
    /// [`CoreError::ConfigIo`] if the file cannot be read and
    /// [`CoreError::ConfigSerialization`] if it is not valid config JSON.
    /// Profiles are not validated here; see [`BotConfig::difficulty_table`].
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str::<BotConfig>(&contents)?;
        info!("[SETTINGS] Loaded bot config from {:?}", path);
        Ok(config)
    }

    /// Read a config file, falling back to defaults on any problem
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("[SETTINGS] No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => match config.difficulty_table() {
                Ok(_) => config,
                Err(e) => {
                    warn!(
                        "[SETTINGS] Invalid config at {:?}: {}. Using defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load config at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Write the config as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// [`CoreError::ConfigSerialization`] if the config cannot be encoded as
    /// JSON and [`CoreError::ConfigIo`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("[SETTINGS] Saved bot config to {:?}", path);
        Ok(())
    }

    /// Validate the profiles and the default difficulty
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidProfile`] for an unusable profile and
    /// [`CoreError::UnknownDefault`] if `default_difficulty` names no profile.
    pub fn difficulty_table(&self) -> CoreResult<DifficultyTable> {
        let table = DifficultyTable::new(self.profiles.clone())?;
        if !table.contains(&self.default_difficulty) {
            return Err(CoreError::UnknownDefault {
                name: self.default_difficulty.clone(),
            });
        }
        Ok(table)
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}
