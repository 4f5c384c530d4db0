//! Difficulty profiles for the bot opponent
//!
//! A difficulty is a named pair of search depth and randomness. Depth is the
//! number of plies the selector looks ahead; randomness is the probability
//! that the bot skips the search and plays a uniformly random legal move.
//!
//! # Built-in Levels
//!
//! | Difficulty | Depth | Randomness | Behaviour                          |
//! |------------|-------|------------|------------------------------------|
//! | easy       | 1     | 0.3        | Greedy, random move 30% of the time |
//! | medium     | 2     | 0.1        | Sees replies, occasionally random  |
//! | hard       | 3     | 0.0        | Always searches                    |
//!
//! The default active level is `medium`. All three can be replaced through
//! [`crate::core::BotConfig`].
//!
//! # Validation
//!
//! [`DifficultyTable::new`] rejects profiles the selector cannot use (depth
//! zero, randomness outside `[0, 1]`, empty or duplicate names), so a
//! profile reaching the session is always searchable.

use crate::core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Name of the difficulty active when nothing else is configured
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// Cosmetic pause before the bot starts searching
pub const DEFAULT_THINK_DELAY_MS: u64 = 500;

/// Search depth and randomness under one name
///
/// # Examples
///
/// ```rust
/// use chessbot::DifficultyProfile;
///
/// let easy = DifficultyProfile::easy();
/// assert_eq!(easy.depth, 1);
/// assert_eq!(easy.randomness, 0.3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub name: String,

    /// Plies searched from the root, at least 1
    pub depth: u8,

    /// Probability of a random move, in `[0, 1]`
    pub randomness: f64,
}

impl DifficultyProfile {
    pub fn new(name: impl Into<String>, depth: u8, randomness: f64) -> Self {
        Self {
            name: name.into(),
            depth,
            randomness,
        }
    }

    pub fn easy() -> Self {
        Self::new("easy", 1, 0.3)
    }

    pub fn medium() -> Self {
        Self::new("medium", 2, 0.1)
    }

    pub fn hard() -> Self {
        Self::new("hard", 3, 0.0)
    }

    /// Check the profile can be handed to the move selector
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidProfile`] for an empty name, depth zero, or a
    /// randomness that is not a probability (NaN included).
    pub fn validate(&self) -> CoreResult<()> {
        let invalid = |message: &str| CoreError::InvalidProfile {
            name: self.name.clone(),
            message: message.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if self.depth == 0 {
            return Err(invalid("depth must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.randomness) {
            return Err(invalid("randomness must be within [0, 1]"));
        }
        Ok(())
    }
}

/// Validated set of difficulty profiles, looked up by name
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyTable {
    profiles: Vec<DifficultyProfile>,
}

impl Default for DifficultyTable {
    /// The built-in easy/medium/hard levels
    fn default() -> Self {
        Self {
            profiles: vec![
                DifficultyProfile::easy(),
                DifficultyProfile::medium(),
                DifficultyProfile::hard(),
            ],
        }
    }
}

impl DifficultyTable {
    /// Build a table, validating every profile
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidProfile`] if the list is empty, a profile
    /// is invalid, or two profiles share a name.
    pub fn new(profiles: Vec<DifficultyProfile>) -> CoreResult<Self> {
        if profiles.is_empty() {
            return Err(CoreError::InvalidProfile {
                name: String::new(),
                message: "at least one difficulty profile is required".to_string(),
            });
        }

        for (index, profile) in profiles.iter().enumerate() {
            profile.validate()?;
            if profiles[..index].iter().any(|p| p.name == profile.name) {
                return Err(CoreError::InvalidProfile {
                    name: profile.name.clone(),
                    message: "duplicate difficulty name".to_string(),
                });
            }
        }

        Ok(Self { profiles })
    }

    pub fn get(&self, name: &str) -> Option<&DifficultyProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Profile names in configuration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DifficultyProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
