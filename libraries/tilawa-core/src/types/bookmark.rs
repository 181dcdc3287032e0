use serde::{Deserialize, Serialize};

/// A saved verse
///
/// Serialized in camelCase so stored collections stay readable by other
/// front ends sharing the same key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// `"{surah}-{verse}-{date_added}"`
    pub id: String,

    /// Surah number (1-114)
    pub surah_number: u16,

    /// Verse number within the surah
    pub verse_number: u16,

    /// Surah name at the time of bookmarking
    pub surah_name: String,

    /// Verse text at the time of bookmarking
    pub verse_text: String,

    /// Creation time (Unix epoch milliseconds)
    pub date_added: i64,

    /// Free-form user notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Bookmark {
    /// Build a bookmark from user input, stamping id and creation time
    pub fn from_new(new: NewBookmark, date_added: i64) -> Self {
        Self {
            id: format!("{}-{}-{}", new.surah_number, new.verse_number, date_added),
            surah_number: new.surah_number,
            verse_number: new.verse_number,
            surah_name: new.surah_name,
            verse_text: new.verse_text,
            date_added,
            notes: new.notes,
        }
    }
}

/// Bookmark fields supplied by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookmark {
    /// Surah number (1-114)
    pub surah_number: u16,
    /// Verse number within the surah
    pub verse_number: u16,
    /// Surah name shown in the bookmark list
    pub surah_name: String,
    /// Verse text shown in the bookmark list
    pub verse_text: String,
    /// Free-form user notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Where the reader last stopped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPosition {
    /// Surah being read
    pub surah_number: u16,
    /// Last verse shown
    pub verse_number: u16,
    /// Surah name, for "continue reading" prompts
    pub surah_name: String,
    /// Unix epoch milliseconds
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmark_id_format() {
        let bookmark = Bookmark::from_new(
            NewBookmark {
                surah_number: 2,
                verse_number: 255,
                surah_name: "البقرة".to_string(),
                verse_text: "ٱللَّهُ لَآ إِلَٰهَ إِلَّا هُوَ".to_string(),
                notes: None,
            },
            1_700_000_000_000,
        );

        assert_eq!(bookmark.id, "2-255-1700000000000");
        assert_eq!(bookmark.date_added, 1_700_000_000_000);
    }

    #[test]
    fn bookmark_json_is_camel_case() {
        let bookmark = Bookmark {
            id: "1-1-5".to_string(),
            surah_number: 1,
            verse_number: 1,
            surah_name: "الفاتحة".to_string(),
            verse_text: "بِسْمِ".to_string(),
            date_added: 5,
            notes: None,
        };

        let json = serde_json::to_value(&bookmark).unwrap();
        assert_eq!(json["surahNumber"], 1);
        assert_eq!(json["dateAdded"], 5);
        assert!(json.get("notes").is_none());
    }
}
