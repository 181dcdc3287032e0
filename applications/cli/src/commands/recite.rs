//! `tilawa recite`
//!
//! Plays a surah verse by verse through a [`PlayerSession`]. The whole verse
//! list is always queued; `--verse` and `--resume` only pick the starting
//! point. Every verse change is printed and saved as the reading position.
//!
//! Interactive commands (one per line):
//!
//! | input    | action                  |
//! |----------|-------------------------|
//! | `n`      | next verse              |
//! | `p`      | previous verse          |
//! | `t`      | play / pause            |
//! | `r`      | toggle verse repeat     |
//! | `<n>`    | jump to verse `n`       |
//! | `q`      | stop                    |

use super::{write_surah_heading, write_verse};
use crate::error::{CliError, Result};
use std::future::Future;
use std::io::Write;
use tilawa_core::{ContentProvider, KeyValueStore, Label, Language, SurahDetail};
use tilawa_playback::{
    AudioBackend, PlaybackEvent, PlayerHandle, PlayerSession, ResourceEventSink, SessionEvent,
};
use tilawa_storage::reading_position;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

/// What to recite and where to start
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReciteOptions {
    pub surah: u16,
    /// Verse number to start from
    pub verse: Option<u16>,
    /// Start from the saved reading position when it is in this surah
    pub resume: bool,
    /// Repeat each verse until told otherwise
    pub repeat: bool,
}

/// How a recitation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReciteOutcome {
    /// Last verse finished
    Finished,
    /// `q` typed
    Quit,
    /// Interrupted (Ctrl-C)
    Interrupted,
}

/// One parsed line of interactive input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Next,
    Previous,
    TogglePlay,
    ToggleRepeat,
    Jump(u16),
    Quit,
}

impl Control {
    /// Parse one line; blank or unknown input yields `None`
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "n" | "next" => Some(Self::Next),
            "p" | "prev" | "previous" => Some(Self::Previous),
            "t" | "toggle" => Some(Self::TogglePlay),
            "r" | "repeat" => Some(Self::ToggleRepeat),
            "q" | "quit" => Some(Self::Quit),
            other => other.parse().ok().map(Self::Jump),
        }
    }
}

/// Recite a surah until it ends, `q` is read from `input`, or `interrupt`
/// resolves
pub async fn run<B, F, R, I, W>(
    provider: &dyn ContentProvider,
    store: &dyn KeyValueStore,
    language: Language,
    options: &ReciteOptions,
    make_backend: F,
    input: R,
    interrupt: I,
    out: &mut W,
) -> Result<ReciteOutcome>
where
    B: AudioBackend + 'static,
    F: FnOnce(ResourceEventSink) -> B,
    R: AsyncBufRead + Unpin,
    I: Future<Output = ()>,
    W: Write,
{
    let detail = provider.fetch_surah_detail(options.surah, language).await?;
    if detail.verses.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "surah {} has no verses",
            options.surah
        )));
    }

    let start = start_index(store, &detail, options)?;
    reading_position::set_last_read_surah(store, options.surah)?;

    write_surah_heading(out, &detail, language)?;
    let (player, mut events) = PlayerSession::spawn(make_backend);

    player.initialize(detail.audio_queue(), start).await?;
    if options.repeat {
        player.toggle_repeat().await?;
    }

    show_verse(store, &detail, start, out)?;
    if let Err(e) = player.toggle_play_pause().await {
        warn!(error = %e, "Could not start recitation");
        writeln!(out, "! {e}")?;
    }

    info!(surah = options.surah, start, "Recitation started");

    let mut lines = input.lines();
    let mut input_open = true;
    tokio::pin!(interrupt);

    let outcome = loop {
        tokio::select! {
            event = events.recv() => match event {
                Some(SessionEvent::VerseChanged(index)) => {
                    show_verse(store, &detail, index, out)?;
                }
                Some(SessionEvent::Playback(PlaybackEvent::QueueFinished)) => {
                    writeln!(out, "{}", language.label(Label::EndOfSurah))?;
                    break ReciteOutcome::Finished;
                }
                Some(SessionEvent::Playback(PlaybackEvent::RepeatChanged { enabled })) => {
                    writeln!(out, "(repeat {})", if enabled { "on" } else { "off" })?;
                }
                Some(SessionEvent::Playback(PlaybackEvent::Error { message })) => {
                    writeln!(out, "! {message}")?;
                }
                Some(SessionEvent::Playback(_)) => {}
                None => break ReciteOutcome::Interrupted,
            },

            line = lines.next_line(), if input_open => match line? {
                Some(line) => {
                    let Some(control) = Control::parse(&line) else {
                        continue;
                    };
                    if control == Control::Quit {
                        break ReciteOutcome::Quit;
                    }
                    if let Err(e) = apply(&player, &detail, control).await {
                        writeln!(out, "! {e}")?;
                    }
                }
                None => {
                    debug!("Input closed, reciting without controls");
                    input_open = false;
                }
            },

            () = &mut interrupt => break ReciteOutcome::Interrupted,
        }
    };

    player.shutdown().await;
    info!(surah = options.surah, ?outcome, "Recitation stopped");
    Ok(outcome)
}

/// Where the queue starts: explicit verse, then saved position, then verse 1
fn start_index(
    store: &dyn KeyValueStore,
    detail: &SurahDetail,
    options: &ReciteOptions,
) -> Result<usize> {
    if let Some(verse) = options.verse {
        return detail.verse_index(verse).ok_or(CliError::VerseNotFound {
            surah: options.surah,
            verse,
        });
    }

    if options.resume {
        if let Some(position) = reading_position::get(store)? {
            if position.surah_number == options.surah {
                return Ok(detail.verse_index(position.verse_number).unwrap_or(0));
            }
        }
    }

    Ok(0)
}

/// Forward a control to the player
///
/// Verse changes, jumps included, come back as `SessionEvent::VerseChanged`
/// and are shown from the event loop.
async fn apply(player: &PlayerHandle, detail: &SurahDetail, control: Control) -> Result<()> {
    match control {
        Control::Next => player.skip_next().await?,
        Control::Previous => player.skip_previous().await?,
        Control::TogglePlay => player.toggle_play_pause().await?,
        Control::ToggleRepeat => player.toggle_repeat().await?,
        Control::Jump(verse) => {
            let index = detail.verse_index(verse).ok_or(CliError::VerseNotFound {
                surah: detail.surah.number,
                verse,
            })?;
            player.set_external_index(index).await?;
        }
        Control::Quit => {}
    }
    Ok(())
}

fn show_verse(
    store: &dyn KeyValueStore,
    detail: &SurahDetail,
    index: usize,
    out: &mut impl Write,
) -> Result<()> {
    let Some(verse) = detail.verses.get(index) else {
        return Ok(());
    };

    write_verse(out, verse)?;
    reading_position::record(store, detail.surah.number, verse.number, &detail.surah.name)?;
    Ok(())
}
