//! Error types for the Dof3a feed

use thiserror::Error;

/// Main error type for feed operations
#[derive(Error, Debug)]
pub enum FeedError {
    /// Reaction name did not match any known kind
    #[error("Unknown reaction: {0}")]
    UnknownReaction(String),

    /// Configuration value rejected during validation
    #[error("Config error: {0}")]
    Config(String),

    /// Config or script JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FeedError
pub type FeedResult<T> = Result<T, FeedError>;
