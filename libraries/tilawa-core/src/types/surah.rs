use serde::{Deserialize, Serialize};

/// Number of surahs in the Quran
pub const SURAH_COUNT: u16 = 114;

/// Check whether `number` names a surah (1-based)
#[must_use]
pub fn is_valid_surah_number(number: u16) -> bool {
    (1..=SURAH_COUNT).contains(&number)
}

/// Surah summary as listed in the surah index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    /// Position in the mushaf (1-114)
    pub number: u16,

    /// Arabic name
    pub name: String,

    /// Transliterated name (e.g. "Al-Faatiha")
    pub english_name: String,

    /// Meaning of the name (e.g. "The Opening")
    pub english_name_translation: String,

    /// "Meccan" or "Medinan"
    pub revelation_type: String,

    /// Verse count
    pub number_of_ayahs: u16,
}

/// A single verse with its translation and audio locator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    /// Number within the surah (1-based)
    pub number: u16,

    /// Arabic text
    pub text: String,

    /// Translation in the requested language (empty when unavailable)
    #[serde(default)]
    pub translation: String,

    /// Opaque locator of the recitation for this verse
    pub audio_url: String,
}

impl Verse {
    /// Create a verse
    pub fn new(
        number: u16,
        text: impl Into<String>,
        translation: impl Into<String>,
        audio_url: impl Into<String>,
    ) -> Self {
        Self {
            number,
            text: text.into(),
            translation: translation.into(),
            audio_url: audio_url.into(),
        }
    }
}

/// A surah together with its verses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahDetail {
    /// Summary fields
    #[serde(flatten)]
    pub surah: Surah,

    /// Verses in order
    pub verses: Vec<Verse>,
}

impl SurahDetail {
    /// Audio locators for every verse, in verse order
    ///
    /// Always spans the full verse list; filtered views translate their
    /// positions back through the original index (see `filter_verses`).
    pub fn audio_queue(&self) -> Vec<String> {
        self.verses.iter().map(|v| v.audio_url.clone()).collect()
    }

    /// Index of the verse with the given in-surah number
    pub fn verse_index(&self, verse_number: u16) -> Option<usize> {
        self.verses.iter().position(|v| v.number == verse_number)
    }
}
