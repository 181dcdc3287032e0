//! Core error types for Tilawa

use thiserror::Error;

/// Result type alias using `TilawaError`
pub type Result<T> = std::result::Result<T, TilawaError>;

/// Core error type for Tilawa
#[derive(Error, Debug)]
pub enum TilawaError {
    /// Key-value persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Remote content errors (transport or API envelope)
    #[error("Content error: {0}")]
    Content(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity looked up (e.g. "Bookmark")
        entity: String,
        /// Identifier that matched nothing
        id: String,
    },

    /// Surah number outside 1..=114
    #[error("Invalid surah number: {0}")]
    InvalidSurah(u16),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TilawaError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a content error
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
