//! Error types for learnplan

use thiserror::Error;

/// Result type alias for learnplan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for learnplan operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Plan generator failed or produced unusable output
    #[error("Generator error: {0}")]
    Generator(String),

    /// Input rejected by validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// No learning item with the given id
    #[error("Learning item not found: {0}")]
    NotFound(String),
}
