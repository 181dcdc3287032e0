//! Core types for recitation playback

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one loaded audio resource
///
/// Every load gets a fresh id. Resource events carry the id they were
/// produced for, which lets the player drop events from resources it has
/// already released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(u64);

impl ResourceId {
    /// Wrap a raw id
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "res#{}", self.0)
    }
}

/// Coarse player state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// No queue loaded (or player disposed)
    Idle,

    /// Queue loaded, output stopped
    Paused,

    /// Queue loaded, output running
    Playing,
}

/// Read-only view of the player for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Current position in the queue (0 when idle)
    pub current_index: usize,

    /// Number of verses in the queue
    pub queue_len: usize,

    /// Whether output is running
    pub is_playing: bool,

    /// Whether the current verse restarts when it ends
    pub is_repeat_enabled: bool,

    /// Elapsed / duration of the current verse, in [0, 1]
    pub progress_fraction: f32,

    /// Duration of the current verse once metadata is known, else 0
    pub duration_seconds: f64,

    /// Coarse state
    pub status: PlayerStatus,
}

impl PlaybackState {
    /// 1-based "current/total" label
    pub fn position_label(&self) -> String {
        if self.queue_len == 0 {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.current_index + 1, self.queue_len)
        }
    }
}
