//! Progress tracking for the current verse

use std::time::Duration;

/// Elapsed time and duration of the loaded verse
///
/// Pure read-side bookkeeping: updated from resource events, never feeds back
/// into playback decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Progress {
    elapsed: Duration,
    duration: Option<Duration>,
}

impl Progress {
    /// Record the latest elapsed time
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Record the duration once metadata is available
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = Some(duration);
    }

    /// Rewind to the start, keeping the known duration
    pub fn rewind(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Forget everything (new resource)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Elapsed time
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Duration in seconds (0 until metadata arrives)
    pub fn duration_seconds(&self) -> f64 {
        self.duration.map_or(0.0, |d| d.as_secs_f64())
    }

    /// `elapsed / duration`, clamped to [0, 1]; 0 while the duration is unknown
    pub fn fraction(&self) -> f32 {
        match self.duration {
            Some(duration) if !duration.is_zero() => {
                (self.elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0) as f32
            }
            _ => 0.0,
        }
    }
}
