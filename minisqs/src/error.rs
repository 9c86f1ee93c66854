//! Error types for the queue client

use thiserror::Error;

/// Errors surfaced to callers of the client
///
/// Provider-reported failures other than these ride back to the caller inside
/// the raw response body; the client does not classify them.
#[derive(Debug, Error)]
pub enum SqsError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
}
