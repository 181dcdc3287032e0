//! Player session - runs a `VersePlayer` on its own task
//!
//! Hosts talk to the player through a cloneable [`PlayerHandle`]; the media
//! engine reports back through a [`ResourceEventSink`]. Both feed one task,
//! so commands and resource events are applied strictly one at a time.

use crate::{
    backend::{AudioBackend, ResourceEvent},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    player::VersePlayer,
    types::{PlaybackState, ResourceId},
};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace, warn};

/// Notifications published by a running session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The player moved to a new verse (skip, auto-advance, external adoption)
    VerseChanged(usize),

    /// Anything else the player queued
    Playback(PlaybackEvent),
}

enum Command {
    Initialize {
        locators: Vec<String>,
        initial_index: usize,
        reply: oneshot::Sender<Result<()>>,
    },
    TogglePlayPause(oneshot::Sender<Result<()>>),
    SkipNext(oneshot::Sender<Result<()>>),
    SkipPrevious(oneshot::Sender<Result<()>>),
    ToggleRepeat(oneshot::Sender<Result<()>>),
    SetExternalIndex {
        index: usize,
        reply: oneshot::Sender<Result<()>>,
    },
    Snapshot(oneshot::Sender<PlaybackState>),
    Shutdown(oneshot::Sender<()>),
}

/// Where backends deliver resource events
///
/// Cheap to clone; hand one to the backend at construction.
#[derive(Debug, Clone)]
pub struct ResourceEventSink {
    tx: mpsc::UnboundedSender<(ResourceId, ResourceEvent)>,
}

impl ResourceEventSink {
    /// Report an event for `resource`
    ///
    /// Returns `false` once the session has stopped.
    pub fn send(&self, resource: ResourceId, event: ResourceEvent) -> bool {
        self.tx.send((resource, event)).is_ok()
    }
}

/// Cloneable handle to a running session
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl PlayerHandle {
    /// Install a queue (see [`VersePlayer::initialize`])
    pub async fn initialize(&self, locators: Vec<String>, initial_index: usize) -> Result<()> {
        self.request(|reply| Command::Initialize {
            locators,
            initial_index,
            reply,
        })
        .await?
    }

    /// Play or pause
    pub async fn toggle_play_pause(&self) -> Result<()> {
        self.request(Command::TogglePlayPause).await?
    }

    /// Next verse
    pub async fn skip_next(&self) -> Result<()> {
        self.request(Command::SkipNext).await?
    }

    /// Previous verse
    pub async fn skip_previous(&self) -> Result<()> {
        self.request(Command::SkipPrevious).await?
    }

    /// Flip verse repeat
    pub async fn toggle_repeat(&self) -> Result<()> {
        self.request(Command::ToggleRepeat).await?
    }

    /// Adopt a position chosen by the host
    pub async fn set_external_index(&self, index: usize) -> Result<()> {
        self.request(|reply| Command::SetExternalIndex { index, reply })
            .await?
    }

    /// Current player state
    pub async fn snapshot(&self) -> Result<PlaybackState> {
        self.request(Command::Snapshot).await
    }

    /// Dispose the player and stop the session
    ///
    /// Resolves after the backend has released its resource. Calling it on an
    /// already stopped session is fine.
    pub async fn shutdown(&self) {
        if self.request(Command::Shutdown).await.is_err() {
            trace!("Session already stopped");
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(build(reply))
            .map_err(|_| PlaybackError::SessionClosed)?;
        rx.await.map_err(|_| PlaybackError::SessionClosed)
    }
}

/// Spawns players onto the tokio runtime
pub struct PlayerSession;

impl PlayerSession {
    /// Start a session
    ///
    /// `make_backend` receives the sink its resources should report to. The
    /// returned receiver carries index changes and playback events; the
    /// session keeps running if it is dropped.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<B, F>(make_backend: F) -> (PlayerHandle, mpsc::UnboundedReceiver<SessionEvent>)
    where
        B: AudioBackend + 'static,
        F: FnOnce(ResourceEventSink) -> B,
    {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (resource_tx, resource_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let backend = make_backend(ResourceEventSink { tx: resource_tx });
        let mut player = VersePlayer::new(backend);

        let notify_tx = event_tx.clone();
        player.on_index_change(move |index| {
            let _ = notify_tx.send(SessionEvent::VerseChanged(index));
        });

        tokio::spawn(run(player, command_rx, resource_rx, event_tx));

        (PlayerHandle { tx: command_tx }, event_rx)
    }
}

async fn run<B: AudioBackend>(
    mut player: VersePlayer<B>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    mut resources: mpsc::UnboundedReceiver<(ResourceId, ResourceEvent)>,
    events: mpsc::UnboundedSender<SessionEvent>,
) {
    debug!("Player session started");

    loop {
        tokio::select! {
            biased;

            command = commands.recv() => {
                let Some(command) = command else {
                    debug!("All player handles dropped");
                    break;
                };
                if let Some(ack) = apply(&mut player, command, &events).await {
                    let _ = ack.send(());
                    break;
                }
            }

            Some((resource, event)) = resources.recv() => {
                if let Err(e) = player.handle_resource_event(resource, event).await {
                    warn!(error = %e, "Resource event failed");
                }
            }
        }

        forward(&mut player, &events);
    }

    player.dispose();
    debug!("Player session stopped");
}

/// Apply one command; returns the shutdown acknowledgement when asked to stop
///
/// Queued events are forwarded before the reply goes out, so a caller that
/// awaited a command finds its events already on the channel.
async fn apply<B: AudioBackend>(
    player: &mut VersePlayer<B>,
    command: Command,
    events: &mpsc::UnboundedSender<SessionEvent>,
) -> Option<oneshot::Sender<()>> {
    match command {
        Command::Initialize {
            locators,
            initial_index,
            reply,
        } => {
            let result = player.initialize(locators, initial_index).await;
            forward(player, events);
            let _ = reply.send(result);
        }
        Command::TogglePlayPause(reply) => {
            let result = player.toggle_play_pause().await;
            forward(player, events);
            let _ = reply.send(result);
        }
        Command::SkipNext(reply) => {
            let result = player.skip_to_next().await;
            forward(player, events);
            let _ = reply.send(result);
        }
        Command::SkipPrevious(reply) => {
            let result = player.skip_to_previous().await;
            forward(player, events);
            let _ = reply.send(result);
        }
        Command::ToggleRepeat(reply) => {
            let result = player.toggle_repeat();
            forward(player, events);
            let _ = reply.send(result);
        }
        Command::SetExternalIndex { index, reply } => {
            let result = player.set_external_index(index).await;
            forward(player, events);
            let _ = reply.send(result);
        }
        Command::Snapshot(reply) => {
            let _ = reply.send(player.snapshot());
        }
        Command::Shutdown(ack) => {
            player.dispose();
            forward(player, events);
            return Some(ack);
        }
    }
    None
}

fn forward<B: AudioBackend>(
    player: &mut VersePlayer<B>,
    events: &mpsc::UnboundedSender<SessionEvent>,
) {
    for event in player.drain_events() {
        let _ = events.send(SessionEvent::Playback(event));
    }
}
