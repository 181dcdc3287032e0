//! Property-based tests for the verse player
//!
//! Drives the player with random command and event sequences and checks the
//! invariants that must hold in every reachable state.

mod common;

use common::{notifications, verse_urls, MockBackend};
use proptest::prelude::*;
use std::time::Duration;
use tilawa_playback::{PlayerStatus, ResourceEvent, VersePlayer};

// ===== Helpers =====

#[derive(Debug, Clone)]
enum Op {
    Toggle,
    Next,
    Previous,
    Repeat,
    External(usize),
    Ended,
    Tick(u64),
    Reinitialize(usize, usize),
    FailNextLoads,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Toggle),
        3 => Just(Op::Next),
        3 => Just(Op::Previous),
        1 => Just(Op::Repeat),
        3 => (0usize..20).prop_map(Op::External),
        4 => Just(Op::Ended),
        2 => (0u64..20).prop_map(Op::Tick),
        1 => (0usize..12, 0usize..15).prop_map(|(len, idx)| Op::Reinitialize(len, idx)),
        1 => Just(Op::FailNextLoads),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

async fn apply(player: &mut VersePlayer<MockBackend>, backend: &MockBackend, op: &Op) {
    // Failures are absorbed by the player; only state matters here
    let _ = match op {
        Op::Toggle => player.toggle_play_pause().await,
        Op::Next => player.skip_to_next().await,
        Op::Previous => player.skip_to_previous().await,
        Op::Repeat => player.toggle_repeat(),
        Op::External(index) => player.set_external_index(*index).await,
        Op::Ended => match backend.loaded() {
            Some(resource) => {
                player
                    .handle_resource_event(resource, ResourceEvent::Ended)
                    .await
            }
            None => Ok(()),
        },
        Op::Tick(secs) => match backend.loaded() {
            Some(resource) => {
                player
                    .handle_resource_event(
                        resource,
                        ResourceEvent::TimeUpdate {
                            elapsed: Duration::from_secs(*secs),
                        },
                    )
                    .await
            }
            None => Ok(()),
        },
        Op::Reinitialize(len, index) => player.initialize(verse_urls(*len), *index).await,
        Op::FailNextLoads => {
            for url in verse_urls(12) {
                if url.ends_with("/3.mp3") {
                    backend.fail_locator(&url);
                }
            }
            Ok(())
        }
    };
}

// ===== Property Tests =====

proptest! {
    /// Property: the index always addresses a queued verse
    #[test]
    fn index_stays_in_queue(
        len in 1usize..12,
        start in 0usize..15,
        ops in prop::collection::vec(arbitrary_op(), 0..60),
    ) {
        runtime().block_on(async {
            let backend = MockBackend::new();
            let mut player = VersePlayer::new(backend.clone());
            player.initialize(verse_urls(len), start).await.unwrap();

            for op in &ops {
                apply(&mut player, &backend, op).await;

                let len = player.queue_len();
                if len > 0 {
                    prop_assert!(player.current_index() < len, "index {} escaped queue of {}", player.current_index(), len);
                } else {
                    prop_assert_eq!(player.status(), PlayerStatus::Idle);
                    prop_assert!(!player.is_playing());
                }
                let fraction = player.progress_fraction();
                prop_assert!((0.0..=1.0).contains(&fraction));
            }
            Ok(())
        })?;
    }

    /// Property: the notifier never reports the same index twice in a row
    #[test]
    fn notifier_never_repeats_itself(
        len in 1usize..10,
        ops in prop::collection::vec(arbitrary_op(), 0..60),
    ) {
        runtime().block_on(async {
            let backend = MockBackend::new();
            let mut player = VersePlayer::new(backend.clone());
            let (seen, notifier) = notifications();
            player.on_index_change(notifier);
            player.initialize(verse_urls(len), 0).await.unwrap();

            for op in &ops {
                if matches!(op, Op::Reinitialize(..)) {
                    continue;
                }
                apply(&mut player, &backend, op).await;
            }

            let seen = seen.lock().unwrap();
            prop_assert!(seen.windows(2).all(|w| w[0] != w[1]), "duplicate notification in {:?}", *seen);
            if let Some(&last) = seen.last() {
                prop_assert_eq!(last, player.current_index());
            }
            Ok(())
        })?;
    }

    /// Property: toggling twice restores the play state whenever the backend cooperates
    #[test]
    fn double_toggle_is_identity(
        len in 1usize..10,
        ops in prop::collection::vec(arbitrary_op(), 0..30),
    ) {
        runtime().block_on(async {
            let backend = MockBackend::new();
            let mut player = VersePlayer::new(backend.clone());
            player.initialize(verse_urls(len), 0).await.unwrap();

            for op in ops.iter().filter(|op| !matches!(op, Op::FailNextLoads)) {
                apply(&mut player, &backend, op).await;
            }

            let before = player.is_playing();
            player.toggle_play_pause().await.ok();
            player.toggle_play_pause().await.ok();
            prop_assert_eq!(player.is_playing(), before);
            Ok(())
        })?;
    }
}
