//! Error types for slot-engine operations.

use thiserror::Error;

/// Errors that abort a scheduling query before any slots are computed.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A participant record or clock string was malformed or empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The input source could not be decoded.
    #[error("Parse failure: {0}")]
    ParseFailure(#[from] serde_json::Error),
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
