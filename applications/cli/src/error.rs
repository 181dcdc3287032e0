/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Surah {surah} has no verse {verse}")]
    VerseNotFound { surah: u16, verse: u16 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Core(#[from] tilawa_core::TilawaError),

    #[error("Playback error: {0}")]
    Playback(#[from] tilawa_playback::PlaybackError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tilawa_storage::StorageError> for CliError {
    fn from(err: tilawa_storage::StorageError) -> Self {
        // StorageError -> TilawaError -> CliError
        CliError::Core(err.into())
    }
}
