/// Storage-specific errors
use thiserror::Error;
use tilawa_core::TilawaError;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A stored value could not be (de)serialized
    #[error("Serialization error under '{key}': {message}")]
    Serialization { key: String, message: String },

    /// A value outside what the key accepts
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// The backing store failed
    #[error("Store error: {0}")]
    Store(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid value error for `key`
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error for `key`
    pub fn serialization(key: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::Serialization {
            key: key.into(),
            message: err.to_string(),
        }
    }
}

impl From<StorageError> for TilawaError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => TilawaError::NotFound { entity, id },
            StorageError::Io(e) => TilawaError::Io(e),
            invalid @ StorageError::InvalidValue { .. } => {
                TilawaError::invalid_input(invalid.to_string())
            }
            other => TilawaError::storage(other.to_string()),
        }
    }
}

impl From<TilawaError> for StorageError {
    fn from(err: TilawaError) -> Self {
        match err {
            TilawaError::NotFound { entity, id } => StorageError::NotFound { entity, id },
            TilawaError::Io(e) => StorageError::Io(e),
            other => StorageError::Store(other.to_string()),
        }
    }
}
