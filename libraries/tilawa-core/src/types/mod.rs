//! Domain types for Tilawa

mod bookmark;
mod label;
mod language;
mod prayer;
mod surah;

pub use bookmark::{Bookmark, NewBookmark, ReadingPosition};
pub use label::Label;
pub use language::{AudioQuality, Language};
pub use prayer::{
    Gregorian, GregorianMonth, Hijri, HijriMonth, NextPrayer, Prayer, PrayerDate, PrayerTimes,
};
pub use surah::{is_valid_surah_number, Surah, SurahDetail, Verse, SURAH_COUNT};
