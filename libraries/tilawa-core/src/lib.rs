//! Tilawa Core
//!
//! Platform-agnostic domain types, collaborator traits, and error handling for
//! the Tilawa Quran reader.
//!
//! This crate is the foundation shared by every other Tilawa crate:
//! - **Domain Types**: `Surah`, `Verse`, `SurahDetail`, `Bookmark`,
//!   `ReadingPosition`, `PrayerTimes`, `Language`
//! - **Interface Text**: `Label` keys resolved per language by `Language::label`
//! - **Core Traits**: `KeyValueStore` (flat preference persistence) and
//!   `ContentProvider` (remote surah / prayer-time data)
//! - **Error Handling**: Unified `TilawaError` and `Result` types
//! - **Search**: filtering helpers for surah lists, verse lists and bookmarks
//!
//! # Example
//!
//! ```rust
//! use tilawa_core::{filter_verses, Verse};
//!
//! let verses = vec![
//!     Verse::new(1, "بِسْمِ ٱللَّهِ", "In the name of Allah", "https://cdn/1.mp3"),
//!     Verse::new(2, "ٱلْحَمْدُ لِلَّهِ", "All praise is due to Allah", "https://cdn/2.mp3"),
//! ];
//!
//! // Filtered views keep the index into the full verse list
//! let hits = filter_verses(&verses, "praise");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].0, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Error type and `Result` alias
pub mod error;
/// Filtering and pagination for surah, verse and bookmark lists
pub mod search;
/// Store and content-provider seams
pub mod traits;
/// Domain types
pub mod types;

// Re-export commonly used types
pub use error::{Result, TilawaError};
pub use search::{filter_bookmarks, filter_surahs, filter_verses, paginate, Page};
pub use traits::{ContentProvider, KeyValueStore};

pub use types::{
    is_valid_surah_number, AudioQuality, Bookmark, Gregorian, GregorianMonth, Hijri, HijriMonth,
    Label, Language, NewBookmark, NextPrayer, Prayer, PrayerDate, PrayerTimes, ReadingPosition,
    Surah, SurahDetail, Verse, SURAH_COUNT,
};
