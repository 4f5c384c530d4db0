//! Error types for core module
//!
//! Provides custom error types for core functionality: bot configuration
//! loading and difficulty table validation.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Config file I/O error
    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Config serialization/deserialization error
    #[error("Config serialization error: {0}")]
    ConfigSerialization(#[from] serde_json::Error),

    /// A difficulty profile that can never be searched with
    #[error("Invalid difficulty profile '{name}': {message}")]
    InvalidProfile { name: String, message: String },

    /// The configured default difficulty is not in the table
    #[error("Default difficulty '{name}' is not a configured profile")]
    UnknownDefault { name: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
