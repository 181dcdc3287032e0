//! Error types for recitation playback

use thiserror::Error;

/// Failures reported by an audio backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// The locator could not be opened or decoded
    #[error("Resource unavailable: {0}")]
    Unavailable(String),

    /// The runtime refused to start output (autoplay policy, device busy, ...)
    #[error("Playback rejected: {0}")]
    Rejected(String),

    /// Seek not possible on the loaded resource
    #[error("Seek failed: {0}")]
    Seek(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Playback errors
///
/// None of these are fatal to the player: each is absorbed locally (the
/// player falls back to paused) and handed to the caller for display.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The verse audio could not be loaded
    #[error("Failed to load verse {index} ({locator}): {source}")]
    ResourceLoad {
        /// Queue position
        index: usize,
        /// Locator that failed
        locator: String,
        /// Backend failure
        #[source]
        source: BackendError,
    },

    /// The backend refused to start playback
    #[error("Failed to start verse {index}: {source}")]
    PlaybackStart {
        /// Queue position
        index: usize,
        /// Backend failure
        #[source]
        source: BackendError,
    },

    /// External index outside the queue
    #[error("Index {index} out of range for queue of {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Queue length
        len: usize,
    },

    /// The player has been disposed
    #[error("Player disposed")]
    Disposed,

    /// The session task is gone
    #[error("Player session closed")]
    SessionClosed,
}

impl PlaybackError {
    /// Whether the error came from the audio backend (as opposed to misuse)
    pub fn is_backend_failure(&self) -> bool {
        matches!(self, Self::ResourceLoad { .. } | Self::PlaybackStart { .. })
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

/// Result type for backend operations
pub type BackendResult<T> = std::result::Result<T, BackendError>;
