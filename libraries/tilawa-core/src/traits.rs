//! Collaborator traits for Tilawa

use crate::error::Result;
use crate::types::{Language, PrayerTimes, Surah, SurahDetail};
use async_trait::async_trait;

/// Flat key-value persistence
///
/// Collaborators that persist preferences, bookmarks or the reading position
/// receive a store explicitly instead of reaching for global state. Keys and
/// values are plain strings; structured values are stored as JSON text.
///
/// Implementations use interior mutability so a single store can be shared
/// behind `&dyn KeyValueStore` or an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// Returns `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key
    fn clear(&self) -> Result<()>;

    /// All keys currently stored, in sorted order
    fn keys(&self) -> Result<Vec<String>>;
}

/// Remote content source
///
/// Supplies the surah index, a surah's verses (text, translation and one audio
/// locator per verse) and daily prayer times.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch the list of all surahs
    async fn fetch_surahs(&self) -> Result<Vec<Surah>>;

    /// Fetch a surah with its verses translated into `language`
    ///
    /// # Errors
    /// Returns `TilawaError::InvalidSurah` for numbers outside 1..=114.
    async fn fetch_surah_detail(&self, number: u16, language: Language) -> Result<SurahDetail>;

    /// Fetch today's prayer times for a location
    async fn fetch_prayer_times(&self, latitude: f64, longitude: f64) -> Result<PrayerTimes>;
}
