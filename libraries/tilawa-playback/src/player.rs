//! Verse player - sequential recitation controller
//!
//! Plays a surah verse by verse: one audio resource at a time, auto-advancing
//! on end of clip, optionally repeating the current verse, and accepting
//! position changes pushed from outside (a reader tapping a verse).

use crate::{
    backend::{AudioBackend, ResourceEvent},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    progress::Progress,
    queue::PlaybackQueue,
    types::{PlaybackState, PlayerStatus, ResourceId},
};
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Callback invoked with the new index whenever the player's position changes
pub type IndexNotifier = Box<dyn FnMut(usize) + Send>;

/// Sequential verse playback controller
///
/// State machine:
///
/// ```text
/// Idle ──initialize──▶ Paused ◀──toggle──▶ Playing
///                        ▲                    │ end of clip
///                        │ last verse         ├─ repeat: restart same verse
///                        └────────────────────┴─ otherwise: next verse, keep playing
/// ```
///
/// All mutation goes through `&mut self`, so commands and resource events are
/// serialized by whoever owns the player (typically [`crate::PlayerSession`]).
pub struct VersePlayer<B: AudioBackend> {
    backend: B,
    queue: PlaybackQueue,
    current_index: usize,
    is_playing: bool,
    repeat: bool,
    progress: Progress,

    // Subscription bookkeeping: only events tagged with this id are honoured
    active_resource: Option<ResourceId>,
    next_resource_id: u64,

    notifier: Option<IndexNotifier>,
    last_notified: Option<usize>,

    pending_events: Vec<PlaybackEvent>,
    disposed: bool,
}

impl<B: AudioBackend> VersePlayer<B> {
    /// Create an idle player driving `backend`
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            queue: PlaybackQueue::default(),
            current_index: 0,
            is_playing: false,
            repeat: false,
            progress: Progress::default(),
            active_resource: None,
            next_resource_id: 0,
            notifier: None,
            last_notified: None,
            pending_events: Vec::new(),
            disposed: false,
        }
    }

    /// Register the position notifier, replacing any previous one
    pub fn on_index_change(&mut self, notifier: impl FnMut(usize) + Send + 'static) {
        self.notifier = Some(Box::new(notifier));
    }

    // ===== Commands =====

    /// Install a new queue and seed the position
    ///
    /// An empty queue returns the player to idle. An initial index past the end
    /// is clamped to the last verse. The seeded index came from the caller, so
    /// it is not echoed through the notifier. Play state carries over: a player
    /// that was playing starts the new queue immediately.
    pub async fn initialize(&mut self, locators: Vec<String>, initial_index: usize) -> Result<()> {
        self.ensure_live()?;
        self.release_resource();

        if locators.is_empty() {
            debug!("Empty queue, player idle");
            self.queue = PlaybackQueue::default();
            self.current_index = 0;
            self.last_notified = None;
            if self.is_playing {
                self.set_playing(false);
            } else {
                self.emit(PlaybackEvent::StateChanged {
                    status: PlayerStatus::Idle,
                });
            }
            return Ok(());
        }

        self.queue = PlaybackQueue::new(locators);
        let index = self.queue.clamp(initial_index);
        if index != initial_index {
            warn!(
                requested = initial_index,
                len = self.queue.len(),
                "Initial index out of range, clamped"
            );
        }

        self.current_index = index;
        self.last_notified = Some(index);
        self.emit(PlaybackEvent::QueueLoaded {
            len: self.queue.len(),
            index,
        });

        debug!(len = self.queue.len(), index, "Queue installed");
        let resume = self.is_playing;
        self.activate_current(resume).await
    }

    /// Start or pause output of the current verse
    ///
    /// A verse whose earlier load failed is loaded again here; this is the only
    /// retry path. Start failures leave the player paused.
    pub async fn toggle_play_pause(&mut self) -> Result<()> {
        self.ensure_live()?;
        if self.queue.is_empty() {
            return Ok(());
        }

        if self.is_playing {
            self.backend.pause();
            self.set_playing(false);
            return Ok(());
        }

        if self.active_resource.is_none() {
            return self.activate_current(true).await;
        }

        self.start_playback().await
    }

    /// Move to the following verse (no-op on the last verse)
    pub async fn skip_to_next(&mut self) -> Result<()> {
        self.ensure_live()?;
        if !self.queue.has_next(self.current_index) {
            return Ok(());
        }
        self.move_to(self.current_index + 1).await
    }

    /// Move to the preceding verse (no-op on the first verse)
    pub async fn skip_to_previous(&mut self) -> Result<()> {
        self.ensure_live()?;
        if !self.queue.has_previous(self.current_index) {
            return Ok(());
        }
        self.move_to(self.current_index - 1).await
    }

    /// Flip verse repeat
    pub fn toggle_repeat(&mut self) -> Result<()> {
        self.ensure_live()?;
        self.repeat = !self.repeat;
        debug!(enabled = self.repeat, "Repeat toggled");
        self.emit(PlaybackEvent::RepeatChanged {
            enabled: self.repeat,
        });
        Ok(())
    }

    /// Adopt a position chosen outside the player
    ///
    /// Equal indices are ignored, which is what breaks the notify/adopt loop
    /// when the host feeds the notifier's value straight back in. Indices past
    /// the end are rejected and leave the position untouched.
    pub async fn set_external_index(&mut self, index: usize) -> Result<()> {
        self.ensure_live()?;
        if self.queue.is_empty() || index == self.current_index {
            return Ok(());
        }

        if !self.queue.contains(index) {
            warn!(index, len = self.queue.len(), "External index rejected");
            return Err(PlaybackError::IndexOutOfRange {
                index,
                len: self.queue.len(),
            });
        }

        debug!(from = self.current_index, to = index, "Adopting external index");
        self.move_to(index).await
    }

    /// Feed a resource event into the player
    ///
    /// Events from any resource other than the active one (released verses,
    /// or everything after disposal) are dropped without touching state.
    pub async fn handle_resource_event(
        &mut self,
        resource: ResourceId,
        event: ResourceEvent,
    ) -> Result<()> {
        if self.disposed || self.active_resource != Some(resource) {
            trace!(%resource, ?event, "Ignoring event from inactive resource");
            return Ok(());
        }

        match event {
            ResourceEvent::TimeUpdate { elapsed } => {
                self.progress.set_elapsed(elapsed);
                self.emit(PlaybackEvent::Progress {
                    fraction: self.progress.fraction(),
                });
                Ok(())
            }
            ResourceEvent::MetadataLoaded { duration } => {
                trace!(%resource, ?duration, "Verse metadata loaded");
                self.progress.set_duration(duration);
                Ok(())
            }
            ResourceEvent::Ended => self.handle_clip_ended().await,
        }
    }

    /// Stop output and release the resource
    ///
    /// Synchronous: once this returns the backend holds no subscriptions and
    /// later events are ignored. Further commands fail with `Disposed`.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        self.active_resource = None;
        self.backend.release();
        self.queue = PlaybackQueue::default();
        self.current_index = 0;
        self.is_playing = false;
        self.progress.clear();
        self.notifier = None;
        self.disposed = true;
        debug!("Player disposed");
    }

    // ===== State Queries =====

    /// Current position (0 when idle)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether output is running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether verse repeat is on
    pub fn is_repeat_enabled(&self) -> bool {
        self.repeat
    }

    /// Number of verses queued
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Locator of the current verse
    pub fn current_locator(&self) -> Option<&str> {
        self.queue.get(self.current_index)
    }

    /// Elapsed / duration of the current verse
    pub fn progress_fraction(&self) -> f32 {
        self.progress.fraction()
    }

    /// Whether `dispose` has run
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Coarse state
    pub fn status(&self) -> PlayerStatus {
        if self.queue.is_empty() {
            PlayerStatus::Idle
        } else if self.is_playing {
            PlayerStatus::Playing
        } else {
            PlayerStatus::Paused
        }
    }

    /// Everything a view needs to render the player
    pub fn snapshot(&self) -> PlaybackState {
        PlaybackState {
            current_index: self.current_index,
            queue_len: self.queue.len(),
            is_playing: self.is_playing,
            is_repeat_enabled: self.repeat,
            progress_fraction: self.progress.fraction(),
            duration_seconds: self.progress.duration_seconds(),
            status: self.status(),
        }
    }

    /// The backend (read-only)
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ===== Events =====

    /// Drain all pending events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn ensure_live(&self) -> Result<()> {
        if self.disposed {
            Err(PlaybackError::Disposed)
        } else {
            Ok(())
        }
    }

    async fn move_to(&mut self, index: usize) -> Result<()> {
        self.current_index = index;
        self.notify_index(index);
        let resume = self.is_playing;
        self.activate_current(resume).await
    }

    /// Load the current verse, detaching the previous one first, and start it
    /// when `start` is set
    async fn activate_current(&mut self, start: bool) -> Result<()> {
        self.release_resource();
        self.progress.clear();

        let index = self.current_index;
        let Some(locator) = self.queue.get(index).map(str::to_owned) else {
            return Ok(());
        };

        self.next_resource_id += 1;
        let resource = ResourceId::new(self.next_resource_id);
        debug!(index, %resource, locator = %locator, "Loading verse audio");

        if let Err(source) = self.backend.load(resource, &locator) {
            warn!(index, locator = %locator, error = %source, "Verse audio failed to load");
            self.set_playing(false);
            let err = PlaybackError::ResourceLoad {
                index,
                locator,
                source,
            };
            self.emit_error(&err);
            return Err(err);
        }

        self.active_resource = Some(resource);

        if start {
            self.start_playback().await
        } else {
            Ok(())
        }
    }

    async fn start_playback(&mut self) -> Result<()> {
        match self.backend.play().await {
            Ok(()) => {
                self.set_playing(true);
                Ok(())
            }
            Err(source) => {
                warn!(index = self.current_index, error = %source, "Playback start rejected");
                self.set_playing(false);
                let err = PlaybackError::PlaybackStart {
                    index: self.current_index,
                    source,
                };
                self.emit_error(&err);
                Err(err)
            }
        }
    }

    async fn handle_clip_ended(&mut self) -> Result<()> {
        if self.repeat {
            trace!(index = self.current_index, "Repeating verse");
            self.progress.rewind();
            if let Err(source) = self.backend.seek(Duration::ZERO) {
                warn!(index = self.current_index, error = %source, "Rewind failed");
                self.set_playing(false);
                let err = PlaybackError::PlaybackStart {
                    index: self.current_index,
                    source,
                };
                self.emit_error(&err);
                return Err(err);
            }
            return self.start_playback().await;
        }

        if self.queue.has_next(self.current_index) {
            return self.move_to(self.current_index + 1).await;
        }

        debug!(index = self.current_index, "Reached end of queue");
        self.progress.rewind();
        self.set_playing(false);
        self.emit(PlaybackEvent::QueueFinished);
        Ok(())
    }

    fn release_resource(&mut self) {
        if let Some(resource) = self.active_resource.take() {
            trace!(%resource, "Releasing verse audio");
            self.backend.release();
        }
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.emit(PlaybackEvent::StateChanged {
                status: self.status(),
            });
        }
    }

    fn notify_index(&mut self, index: usize) {
        if self.last_notified == Some(index) {
            return;
        }
        self.last_notified = Some(index);
        if let Some(notifier) = self.notifier.as_mut() {
            notifier(index);
        }
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    fn emit_error(&mut self, err: &PlaybackError) {
        self.pending_events.push(PlaybackEvent::Error {
            message: err.to_string(),
        });
    }
}

impl<B: AudioBackend> Drop for VersePlayer<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ScriptedBackend;
    use std::sync::{Arc, Mutex};

    fn locators(len: usize) -> Vec<String> {
        (1..=len).map(|n| format!("https://cdn/{n}.mp3")).collect()
    }

    fn recording_player() -> (VersePlayer<ScriptedBackend>, Arc<Mutex<Vec<usize>>>) {
        let mut player = VersePlayer::new(ScriptedBackend::default());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        player.on_index_change(move |index| sink.lock().unwrap().push(index));
        (player, seen)
    }

    #[tokio::test]
    async fn new_player_is_idle() {
        let player = VersePlayer::new(ScriptedBackend::default());
        assert_eq!(player.status(), PlayerStatus::Idle);
        assert_eq!(player.snapshot().position_label(), "0/0");
    }

    #[tokio::test]
    async fn initialize_loads_seeded_verse_without_notifying() {
        let (mut player, seen) = recording_player();

        player.initialize(locators(4), 2).await.unwrap();

        assert_eq!(player.current_index(), 2);
        assert_eq!(player.status(), PlayerStatus::Paused);
        assert_eq!(player.backend().calls, vec!["load https://cdn/3.mp3"]);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn initialize_clamps_seed() {
        let mut player = VersePlayer::new(ScriptedBackend::default());
        player.initialize(locators(3), 10).await.unwrap();
        assert_eq!(player.current_index(), 2);
    }

    #[tokio::test]
    async fn empty_queue_is_a_no_op() {
        let mut player = VersePlayer::new(ScriptedBackend::default());
        player.initialize(Vec::new(), 0).await.unwrap();
        player.toggle_play_pause().await.unwrap();
        player.skip_to_next().await.unwrap();
        player.set_external_index(3).await.unwrap();

        assert_eq!(player.status(), PlayerStatus::Idle);
        assert!(player.backend().calls.is_empty());
    }

    #[tokio::test]
    async fn start_failure_reverts_to_paused() {
        let mut player = VersePlayer::new(ScriptedBackend {
            fail_play: true,
            ..Default::default()
        });
        player.initialize(locators(2), 0).await.unwrap();

        let err = player.toggle_play_pause().await.unwrap_err();
        assert!(matches!(err, PlaybackError::PlaybackStart { index: 0, .. }));
        assert!(!player.is_playing());
        assert!(player
            .drain_events()
            .iter()
            .any(|e| matches!(e, PlaybackEvent::Error { .. })));
    }

    #[tokio::test]
    async fn skip_releases_before_loading() {
        let (mut player, seen) = recording_player();
        player.initialize(locators(3), 0).await.unwrap();
        player.toggle_play_pause().await.unwrap();

        player.skip_to_next().await.unwrap();

        assert_eq!(
            player.backend().calls,
            vec![
                "load https://cdn/1.mp3",
                "play",
                "release",
                "load https://cdn/2.mp3",
                "play",
            ]
        );
        assert!(player.is_playing());
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn repeat_rewinds_current_verse() {
        let mut player = VersePlayer::new(ScriptedBackend::default());
        player.initialize(locators(3), 1).await.unwrap();
        player.toggle_play_pause().await.unwrap();
        player.toggle_repeat().unwrap();

        let resource = player.backend().loaded.unwrap();
        player
            .handle_resource_event(resource, ResourceEvent::Ended)
            .await
            .unwrap();

        assert_eq!(player.current_index(), 1);
        assert!(player.is_playing());
        assert!(player.backend().calls.contains(&"seek 0".to_string()));
    }

    #[tokio::test]
    async fn dispose_ignores_late_events() {
        let (mut player, seen) = recording_player();
        player.initialize(locators(3), 0).await.unwrap();
        player.toggle_play_pause().await.unwrap();
        let resource = player.backend().loaded.unwrap();

        player.dispose();
        let before = player.snapshot();
        player
            .handle_resource_event(resource, ResourceEvent::Ended)
            .await
            .unwrap();

        assert_eq!(player.snapshot(), before);
        assert!(seen.lock().unwrap().is_empty());
        assert!(matches!(
            player.toggle_play_pause().await,
            Err(PlaybackError::Disposed)
        ));
    }
}
