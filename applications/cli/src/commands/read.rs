//! `tilawa read`

use super::{write_surah_heading, write_verse};
use crate::error::{CliError, Result};
use std::io::Write;
use tilawa_core::{filter_verses, ContentProvider, KeyValueStore, Label, Language};
use tilawa_storage::reading_position;
use tracing::debug;

/// Print a surah (or one verse, or the verses matching `search`)
///
/// Opening a surah records it as the last read surah and moves the reading
/// position to the requested verse (the first verse by default).
pub async fn run(
    provider: &dyn ContentProvider,
    store: &dyn KeyValueStore,
    language: Language,
    surah: u16,
    search: Option<&str>,
    verse: Option<u16>,
    out: &mut impl Write,
) -> Result<()> {
    let detail = provider.fetch_surah_detail(surah, language).await?;
    write_surah_heading(out, &detail, language)?;

    let focus = match verse {
        Some(number) => Some(
            detail
                .verse_index(number)
                .ok_or(CliError::VerseNotFound { surah, verse: number })?,
        ),
        None => None,
    };

    match (focus, search) {
        (Some(index), _) => write_verse(out, &detail.verses[index])?,
        (None, Some(query)) => {
            let hits = filter_verses(&detail.verses, query);
            if hits.is_empty() {
                writeln!(out, "{}: '{query}'", language.label(Label::NoResults))?;
            }
            for (_, verse) in hits {
                write_verse(out, verse)?;
            }
        }
        (None, None) => {
            for verse in &detail.verses {
                write_verse(out, verse)?;
            }
        }
    }

    reading_position::set_last_read_surah(store, surah)?;
    let verse_number = focus
        .and_then(|index| detail.verses.get(index))
        .or_else(|| detail.verses.first())
        .map_or(1, |v| v.number);
    reading_position::record(store, surah, verse_number, &detail.surah.name)?;

    debug!(surah, verse = verse_number, "Reading position updated");
    Ok(())
}
