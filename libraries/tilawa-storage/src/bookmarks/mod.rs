//! Bookmarked verses
//!
//! All bookmarks live under one key as a JSON array, in insertion order.
//!
//! # Example
//!
//! ```rust
//! use tilawa_core::NewBookmark;
//! use tilawa_storage::{bookmarks, MemoryStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//! let saved = bookmarks::add(
//!     &store,
//!     NewBookmark {
//!         surah_number: 2,
//!         verse_number: 255,
//!         surah_name: "Al-Baqara".to_string(),
//!         verse_text: "Allah - there is no deity except Him".to_string(),
//!         notes: None,
//!     },
//! )?;
//!
//! bookmarks::update_notes(&store, &saved.id, "Ayat al-Kursi")?;
//! assert_eq!(bookmarks::list(&store)?.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::error::{Result, StorageError};
use crate::json::{get_json, set_json};
use tilawa_core::{filter_bookmarks, Bookmark, KeyValueStore, NewBookmark};
use tracing::debug;

/// Key holding the bookmark array
pub const BOOKMARKS_KEY: &str = "quran-bookmarks";

/// All bookmarks, oldest first
pub fn list(store: &dyn KeyValueStore) -> Result<Vec<Bookmark>> {
    Ok(get_json(store, BOOKMARKS_KEY)?.unwrap_or_default())
}

/// Save a new bookmark stamped with the current time
pub fn add(store: &dyn KeyValueStore, bookmark: NewBookmark) -> Result<Bookmark> {
    add_at(store, bookmark, chrono::Utc::now().timestamp_millis())
}

/// Save a new bookmark stamped with `date_added` (milliseconds since the epoch)
///
/// The id is derived from surah, verse and timestamp, so the same verse can
/// be bookmarked more than once.
pub fn add_at(store: &dyn KeyValueStore, bookmark: NewBookmark, date_added: i64) -> Result<Bookmark> {
    let mut all = list(store)?;
    let saved = Bookmark::from_new(bookmark, date_added);
    all.push(saved.clone());
    set_json(store, BOOKMARKS_KEY, &all)?;

    debug!(id = %saved.id, "Bookmark added");
    Ok(saved)
}

/// Delete the bookmark with `id`
///
/// Returns whether anything was removed.
pub fn remove(store: &dyn KeyValueStore, id: &str) -> Result<bool> {
    let mut all = list(store)?;
    let before = all.len();
    all.retain(|b| b.id != id);

    if all.len() == before {
        return Ok(false);
    }

    set_json(store, BOOKMARKS_KEY, &all)?;
    debug!(id, "Bookmark removed");
    Ok(true)
}

/// Replace the notes of bookmark `id`
///
/// Empty notes clear the field.
pub fn update_notes(store: &dyn KeyValueStore, id: &str, notes: &str) -> Result<Bookmark> {
    let mut all = list(store)?;
    let bookmark = all
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| StorageError::not_found("Bookmark", id))?;

    let notes = notes.trim();
    bookmark.notes = (!notes.is_empty()).then(|| notes.to_string());
    let updated = bookmark.clone();

    set_json(store, BOOKMARKS_KEY, &all)?;
    Ok(updated)
}

/// Bookmarks matching `term` (surah name, verse text or "surah N")
pub fn search(store: &dyn KeyValueStore, term: &str) -> Result<Vec<Bookmark>> {
    let all = list(store)?;
    Ok(filter_bookmarks(&all, term).into_iter().cloned().collect())
}
