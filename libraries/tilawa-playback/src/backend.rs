//! Platform-agnostic audio backend trait
//!
//! Abstracts the media engine that actually decodes and outputs a verse
//! (a browser audio element, a native player, a test double, ...).

use crate::error::BackendResult;
use crate::types::ResourceId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Notifications a loaded resource reports back to the player
///
/// Backends deliver these tagged with the `ResourceId` passed to
/// [`AudioBackend::load`]; the player ignores events whose id is no longer
/// active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ResourceEvent {
    /// Playback position advanced
    TimeUpdate {
        /// Time played so far
        elapsed: Duration,
    },

    /// Duration became known
    MetadataLoaded {
        /// Total length of the clip
        duration: Duration,
    },

    /// The clip played to its end
    Ended,
}

/// Media engine driven by the player
///
/// The player owns its backend exclusively and holds at most one resource
/// loaded at a time: it always calls [`release`](Self::release) before
/// loading the next verse.
#[async_trait]
pub trait AudioBackend: Send {
    /// Load `locator` as the active resource
    ///
    /// Events for this resource must be reported with `resource`. Loading does
    /// not start output.
    fn load(&mut self, resource: ResourceId, locator: &str) -> BackendResult<()>;

    /// Start or resume output of the loaded resource
    ///
    /// Resolves once output is running; rejects when the runtime refuses.
    async fn play(&mut self) -> BackendResult<()>;

    /// Pause output, keeping the position
    fn pause(&mut self);

    /// Move the play head of the loaded resource
    fn seek(&mut self, position: Duration) -> BackendResult<()>;

    /// Stop output and detach every event subscription of the loaded resource
    ///
    /// After this returns the backend must not report further events for it.
    fn release(&mut self);
}

/// Backend that accepts every request and produces no sound and no events
///
/// Useful for hosts that only need the queue bookkeeping.
#[derive(Debug, Default, Clone)]
pub struct NullBackend {
    loaded: Option<ResourceId>,
}

impl NullBackend {
    /// Create a null backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource currently loaded
    pub fn loaded(&self) -> Option<ResourceId> {
        self.loaded
    }
}

#[async_trait]
impl AudioBackend for NullBackend {
    fn load(&mut self, resource: ResourceId, _locator: &str) -> BackendResult<()> {
        self.loaded = Some(resource);
        Ok(())
    }

    async fn play(&mut self) -> BackendResult<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn seek(&mut self, _position: Duration) -> BackendResult<()> {
        Ok(())
    }

    fn release(&mut self) {
        self.loaded = None;
    }
}

/// Recording backend for unit tests
///
/// Keeps a log of calls and can be told to fail loads or starts.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedBackend {
    pub calls: Vec<String>,
    pub loaded: Option<ResourceId>,
    pub fail_load: bool,
    pub fail_play: bool,
}

#[cfg(test)]
#[async_trait]
impl AudioBackend for ScriptedBackend {
    fn load(&mut self, resource: ResourceId, locator: &str) -> BackendResult<()> {
        self.calls.push(format!("load {locator}"));
        if self.fail_load {
            return Err(crate::error::BackendError::Unavailable(locator.to_string()));
        }
        self.loaded = Some(resource);
        Ok(())
    }

    async fn play(&mut self) -> BackendResult<()> {
        self.calls.push("play".to_string());
        if self.fail_play {
            return Err(crate::error::BackendError::Rejected("autoplay blocked".into()));
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push("pause".to_string());
    }

    fn seek(&mut self, position: Duration) -> BackendResult<()> {
        self.calls.push(format!("seek {}", position.as_millis()));
        Ok(())
    }

    fn release(&mut self) {
        self.calls.push("release".to_string());
        self.loaded = None;
    }
}
