//! Rollcall Error Types
//!
//! Centralized error handling for the library; the binary wraps these in `anyhow`.

use thiserror::Error;

/// Central error type for Rollcall
#[derive(Error, Debug)]
pub enum RollError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command error: {0}")]
    Command(String),

    #[error("No student with roll number '{0}'")]
    UnknownRecord(String),

    #[error("Roll number '{0}' is already taken")]
    DuplicateRoll(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Rollcall operations
pub type RollResult<T> = Result<T, RollError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for RollError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        RollError::Lock(err.to_string())
    }
}
