//! Dry-run audio backend
//!
//! Pretends to recite: every verse is a clip of fixed length whose progress is
//! reported on a timer. Nothing is fetched or played, which keeps the
//! recitation flow usable on machines without an audio device.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tilawa_playback::{AudioBackend, BackendResult, ResourceEvent, ResourceEventSink, ResourceId};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Timer-driven stand-in for an audio device
pub struct DryRunBackend {
    sink: ResourceEventSink,
    clip: Duration,
    tick: Duration,
    loaded: Option<ResourceId>,
    /// Play head of the loaded clip, in milliseconds
    ///
    /// Each clock task gets its own counter, so a clock that is still winding
    /// down after `abort` cannot move the play head of a later clip.
    position: Arc<AtomicU64>,
    clock: Option<JoinHandle<()>>,
}

impl DryRunBackend {
    pub fn new(sink: ResourceEventSink, clip: Duration, tick: Duration) -> Self {
        Self {
            sink,
            clip,
            tick,
            loaded: None,
            position: Arc::new(AtomicU64::new(0)),
            clock: None,
        }
    }

    fn stop_clock(&mut self) {
        if let Some(clock) = self.clock.take() {
            clock.abort();
        }
    }

    /// Detach from the current counter and start a new one at `millis`
    fn reset_position(&mut self, millis: u64) -> Arc<AtomicU64> {
        self.position = Arc::new(AtomicU64::new(millis));
        Arc::clone(&self.position)
    }

    /// Play head of the loaded clip
    pub fn position(&self) -> Duration {
        Duration::from_millis(self.position.load(Ordering::SeqCst))
    }
}

#[async_trait]
impl AudioBackend for DryRunBackend {
    fn load(&mut self, resource: ResourceId, locator: &str) -> BackendResult<()> {
        self.stop_clock();
        self.reset_position(0);
        self.loaded = Some(resource);

        debug!(%resource, locator, "Dry-run clip loaded");
        self.sink.send(
            resource,
            ResourceEvent::MetadataLoaded {
                duration: self.clip,
            },
        );
        Ok(())
    }

    async fn play(&mut self) -> BackendResult<()> {
        let Some(resource) = self.loaded else {
            return Ok(());
        };
        self.stop_clock();

        let sink = self.sink.clone();
        let resume_at = self.position.load(Ordering::SeqCst);
        let position = self.reset_position(resume_at);
        let clip_ms = self.clip.as_millis() as u64;
        let tick = self.tick;
        let tick_ms = tick.as_millis().max(1) as u64;

        self.clock = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(tick);
            // First tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let elapsed = (position.fetch_add(tick_ms, Ordering::SeqCst) + tick_ms).min(clip_ms);

                if !sink.send(
                    resource,
                    ResourceEvent::TimeUpdate {
                        elapsed: Duration::from_millis(elapsed),
                    },
                ) {
                    break;
                }

                if elapsed >= clip_ms {
                    trace!(%resource, "Dry-run clip ended");
                    sink.send(resource, ResourceEvent::Ended);
                    break;
                }
            }
        }));

        Ok(())
    }

    fn pause(&mut self) {
        self.stop_clock();
    }

    fn seek(&mut self, position: Duration) -> BackendResult<()> {
        let millis = (position.as_millis() as u64).min(self.clip.as_millis() as u64);
        self.position.store(millis, Ordering::SeqCst);
        Ok(())
    }

    fn release(&mut self) {
        self.stop_clock();
        self.loaded = None;
        self.reset_position(0);
    }
}

impl Drop for DryRunBackend {
    fn drop(&mut self) {
        self.stop_clock();
    }
}
