//! `tilawa bookmarks` and `tilawa resume`

use crate::error::{CliError, Result};
use std::io::Write;
use tilawa_core::{Bookmark, ContentProvider, KeyValueStore, Label, Language, NewBookmark};
use tilawa_storage::{bookmarks, reading_position};

fn write_bookmark(
    out: &mut impl Write,
    bookmark: &Bookmark,
    language: Language,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{}  {} {}:{}  {}",
        bookmark.id, bookmark.surah_name, bookmark.surah_number, bookmark.verse_number, bookmark.verse_text
    )?;
    if let Some(notes) = &bookmark.notes {
        writeln!(out, "    {}: {notes}", language.label(Label::Note))?;
    }
    Ok(())
}

/// List bookmarks, optionally filtered
pub fn list(
    store: &dyn KeyValueStore,
    language: Language,
    search: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let found = match search {
        Some(term) => bookmarks::search(store, term)?,
        None => bookmarks::list(store)?,
    };

    if found.is_empty() {
        writeln!(out, "{}", language.label(Label::NoBookmarks))?;
    }
    for bookmark in &found {
        write_bookmark(out, bookmark, language)?;
    }
    Ok(())
}

/// Bookmark a verse, looking up its text
pub async fn add(
    provider: &dyn ContentProvider,
    store: &dyn KeyValueStore,
    language: Language,
    surah: u16,
    verse: u16,
    note: Option<String>,
    out: &mut impl Write,
) -> Result<Bookmark> {
    let detail = provider.fetch_surah_detail(surah, language).await?;
    let index = detail
        .verse_index(verse)
        .ok_or(CliError::VerseNotFound { surah, verse })?;

    let saved = bookmarks::add(
        store,
        NewBookmark {
            surah_number: surah,
            verse_number: verse,
            surah_name: detail.surah.name.clone(),
            verse_text: detail.verses[index].text.clone(),
            notes: note.filter(|n| !n.trim().is_empty()),
        },
    )?;

    writeln!(
        out,
        "{}: {}:{} ({})",
        language.label(Label::BookmarkAdded),
        surah,
        verse,
        saved.id
    )?;
    Ok(saved)
}

/// Delete a bookmark
pub fn remove(
    store: &dyn KeyValueStore,
    language: Language,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    if bookmarks::remove(store, id)? {
        writeln!(out, "{}: {id}", language.label(Label::BookmarkRemoved))?;
        Ok(())
    } else {
        Err(tilawa_core::TilawaError::not_found("Bookmark", id).into())
    }
}

/// Replace a bookmark's notes
pub fn note(
    store: &dyn KeyValueStore,
    language: Language,
    id: &str,
    text: &str,
    out: &mut impl Write,
) -> Result<()> {
    let updated = bookmarks::update_notes(store, id, text)?;
    write_bookmark(out, &updated, language)?;
    Ok(())
}

/// Show where reading stopped last time
pub fn resume(store: &dyn KeyValueStore, language: Language, out: &mut impl Write) -> Result<()> {
    let surah_label = language.label(Label::Surah);
    match reading_position::get(store)? {
        Some(position) => writeln!(
            out,
            "{}: {} ({} {}), {} {}",
            language.label(Label::ContinueReading),
            position.surah_name,
            surah_label,
            position.surah_number,
            language.label(Label::Verse),
            position.verse_number
        )?,
        None => match reading_position::last_read_surah(store)? {
            Some(surah) => writeln!(
                out,
                "{}: {surah_label} {surah}",
                language.label(Label::RecentlyRead)
            )?,
            None => writeln!(out, "{}", language.label(Label::NothingRead))?,
        },
    }
    Ok(())
}
