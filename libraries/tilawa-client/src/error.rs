//! Error types for the content client.

use thiserror::Error;
use tilawa_core::TilawaError;

/// Errors that can occur when talking to the content APIs.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response envelope did not report success
    #[error("API error ({code} {status}): {message}")]
    Api {
        code: u16,
        status: String,
        message: String,
    },

    /// Invalid base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Surah number outside 1..=114
    #[error("Invalid surah number: {0}")]
    InvalidSurah(u16),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for TilawaError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidSurah(number) => TilawaError::InvalidSurah(number),
            ClientError::InvalidUrl(msg) => TilawaError::invalid_input(msg),
            other => TilawaError::content(other.to_string()),
        }
    }
}
