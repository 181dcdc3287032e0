//! Reading position persistence
//!
//! Two independent records: the detailed position (surah, verse, time) the
//! reader last stopped at, and the bare number of the last surah opened.

use crate::error::Result;
use crate::json::{get_json, set_json};
use tilawa_core::{is_valid_surah_number, KeyValueStore, ReadingPosition};
use tracing::{debug, warn};

/// Key holding the last reading position
pub const READING_POSITION_KEY: &str = "quran-reading-position";

/// Key holding the last opened surah number
pub const LAST_READ_SURAH_KEY: &str = "last-read-surah";

/// Last saved reading position
pub fn get(store: &dyn KeyValueStore) -> Result<Option<ReadingPosition>> {
    get_json(store, READING_POSITION_KEY)
}

/// Replace the saved reading position
pub fn set(store: &dyn KeyValueStore, position: &ReadingPosition) -> Result<()> {
    set_json(store, READING_POSITION_KEY, position)?;
    debug!(
        surah = position.surah_number,
        verse = position.verse_number,
        "Reading position saved"
    );
    Ok(())
}

/// Record `surah_number` / `verse_number` as the reading position, stamped now
pub fn record(
    store: &dyn KeyValueStore,
    surah_number: u16,
    verse_number: u16,
    surah_name: &str,
) -> Result<ReadingPosition> {
    let position = ReadingPosition {
        surah_number,
        verse_number,
        surah_name: surah_name.to_string(),
        timestamp: chrono::Utc::now().timestamp_millis(),
    };
    set(store, &position)?;
    Ok(position)
}

/// Number of the last surah opened
///
/// The value is stored as plain decimal text; anything unparsable or outside
/// 1..=114 reads as absent.
pub fn last_read_surah(store: &dyn KeyValueStore) -> Result<Option<u16>> {
    let Some(raw) = store.get(LAST_READ_SURAH_KEY)? else {
        return Ok(None);
    };

    match raw.trim().parse::<u16>() {
        Ok(number) if is_valid_surah_number(number) => Ok(Some(number)),
        _ => {
            warn!(value = %raw, "Ignoring invalid last-read surah");
            Ok(None)
        }
    }
}

/// Remember `surah_number` as the last surah opened
pub fn set_last_read_surah(store: &dyn KeyValueStore, surah_number: u16) -> Result<()> {
    store.set(LAST_READ_SURAH_KEY, &surah_number.to_string())?;
    Ok(())
}
