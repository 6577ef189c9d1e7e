//! Price feed error types.

use thiserror::Error;

/// Errors that can occur while loading a price snapshot.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Feed source could not be read.
    #[error("Failed to read price feed: {0}")]
    Io(#[from] std::io::Error),

    /// Feed payload is not a list of `{currency, price}` entries.
    #[error("Malformed price feed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Feed refused or failed to answer.
    #[error("Price feed unavailable: {0}")]
    Unavailable(String),
}

impl FeedError {
    /// Check if fetching again may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FeedError::Io(_) | FeedError::Unavailable(_))
    }
}

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;
