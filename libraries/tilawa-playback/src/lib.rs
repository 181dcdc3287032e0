//! Tilawa - Recitation Playback
//!
//! Verse-by-verse playback of a surah's recitation.
//!
//! This crate provides:
//! - A sequential controller that plays one verse after another
//! - Verse repeat
//! - Skip to next / previous verse
//! - Adoption of a position chosen by the reader (tap on a verse)
//! - Progress tracking for the current verse
//! - A session wrapper that runs the controller on its own tokio task
//!
//! # Architecture
//!
//! `tilawa-playback` knows nothing about HTTP, storage or any audio device.
//! The media engine is supplied through the [`AudioBackend`] trait and reports
//! back with [`ResourceEvent`]s tagged by [`ResourceId`], so events from a
//! verse that was already released are recognised and dropped.
//!
//! # Example: Driving the player directly
//!
//! ```rust
//! use tilawa_playback::{NullBackend, PlayerStatus, VersePlayer};
//!
//! # tokio_test_block_on(async {
//! let mut player = VersePlayer::new(NullBackend::new());
//! player.on_index_change(|index| println!("now reciting verse {}", index + 1));
//!
//! let queue = vec![
//!     "https://cdn.islamic.network/quran/audio/128/ar.alafasy/1.mp3".to_string(),
//!     "https://cdn.islamic.network/quran/audio/128/ar.alafasy/2.mp3".to_string(),
//! ];
//! player.initialize(queue, 0).await.unwrap();
//! player.toggle_play_pause().await.unwrap();
//! assert_eq!(player.status(), PlayerStatus::Playing);
//!
//! player.skip_to_next().await.unwrap();
//! assert_eq!(player.current_index(), 1);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```
//!
//! # Example: Session
//!
//! ```rust,no_run
//! use tilawa_playback::{NullBackend, PlayerSession, SessionEvent};
//!
//! # async fn demo() -> tilawa_playback::Result<()> {
//! let (player, mut events) = PlayerSession::spawn(|_sink| NullBackend::new());
//!
//! player.initialize(vec!["https://cdn/1.mp3".into()], 0).await?;
//! player.toggle_play_pause().await?;
//!
//! while let Some(event) = events.recv().await {
//!     if let SessionEvent::VerseChanged(index) = event {
//!         println!("highlight verse {}", index + 1);
//!     }
//! }
//! player.shutdown().await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod error;
pub mod events;
pub mod player;
pub mod progress;
pub mod queue;
pub mod session;
pub mod types;

pub use backend::{AudioBackend, NullBackend, ResourceEvent};
pub use error::{BackendError, BackendResult, PlaybackError, Result};
pub use events::PlaybackEvent;
pub use player::{IndexNotifier, VersePlayer};
pub use progress::Progress;
pub use queue::PlaybackQueue;
pub use session::{PlayerHandle, PlayerSession, ResourceEventSink, SessionEvent};
pub use types::{PlaybackState, PlayerStatus, ResourceId};
