//! Playback Events
//!
//! Events queued by the player for UI synchronization. Index changes are not
//! part of this stream: they go through the position notifier registered with
//! `VersePlayer::on_index_change`.

use crate::types::PlayerStatus;
use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A new queue was installed
    QueueLoaded {
        /// Number of verses
        len: usize,
        /// Seeded position
        index: usize,
    },

    /// Play/pause/idle state changed
    StateChanged {
        /// The new state
        status: PlayerStatus,
    },

    /// Repeat toggled
    RepeatChanged {
        /// Whether repeat is now on
        enabled: bool,
    },

    /// Progress of the current verse (emitted on each time update)
    Progress {
        /// Elapsed / duration in [0, 1]
        fraction: f32,
    },

    /// The last verse finished with repeat off
    QueueFinished,

    /// A load or start failure was absorbed
    Error {
        /// Human readable description
        message: String,
    },
}
