use super::{Language, Prayer};

/// Interface text shown to readers
///
/// Each key maps to one phrase per [`Language`]; see [`Language::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// "Surah", before a surah number
    Surah,
    /// "Verse", before a verse number
    Verse,
    /// "verses", after a verse count
    Verses,
    /// "Page", before "n/total"
    Page,
    /// Empty search result
    NoResults,
    /// Last verse of a recitation finished
    EndOfSurah,
    /// "Continue reading", before the saved position
    ContinueReading,
    /// "Recently read", before a surah opened without a verse position
    RecentlyRead,
    /// No reading history
    NothingRead,
    /// Empty bookmark list
    NoBookmarks,
    /// A bookmark was saved
    BookmarkAdded,
    /// A bookmark was deleted
    BookmarkRemoved,
    /// Bookmark note prefix
    Note,
    /// Heading for the upcoming prayer
    NextPrayer,
    /// Countdown prefix
    TimeRemaining,
    /// Hijri year suffix
    Hijri,
    /// Name of a prayer
    Prayer(Prayer),
    /// Preferences reset
    AppDataCleared,
}

impl Language {
    /// Interface text for `key` in this language
    #[must_use]
    pub fn label(self, key: Label) -> &'static str {
        // Columns: ar, en, bn, hi
        let [ar, en, bn, hi] = match key {
            Label::Surah => ["سورة", "Surah", "সূরা", "सूरा"],
            Label::Verse => ["آية", "Verse", "আয়াত", "आयत"],
            Label::Verses => ["آيات", "verses", "আয়াত", "आयतें"],
            Label::Page => ["صفحة", "Page", "পৃষ্ঠা", "पृष्ठ"],
            Label::NoResults => ["لا توجد نتائج", "No results", "কোন ফলাফল নেই", "कोई परिणाम नहीं"],
            Label::EndOfSurah => ["نهاية السورة", "End of surah", "সূরা শেষ", "सूरा समाप्त"],
            Label::ContinueReading => [
                "متابعة القراءة",
                "Continue reading",
                "পড়া চালিয়ে যান",
                "पढ़ना जारी रखें",
            ],
            Label::RecentlyRead => ["قرأت مؤخرًا", "Recently read", "সম্প্রতি পঠিত", "हाल ही में पढ़ा गया"],
            Label::NothingRead => [
                "لم تقرأ شيئًا بعد",
                "Nothing read yet",
                "এখনও কিছু পড়া হয়নি",
                "अभी तक कुछ नहीं पढ़ा",
            ],
            Label::NoBookmarks => [
                "لا توجد إشارات مرجعية",
                "No bookmarks yet",
                "কোন বুকমার্ক নেই",
                "कोई बुकमार्क नहीं",
            ],
            Label::BookmarkAdded => [
                "تمت إضافة إشارة مرجعية",
                "Bookmark added",
                "বুকমার্ক যোগ হয়েছে",
                "बुकमार्क जोड़ा गया",
            ],
            Label::BookmarkRemoved => [
                "تمت إزالة الإشارة المرجعية",
                "Bookmark removed",
                "বুকমার্ক সরানো হয়েছে",
                "बुकमार्क हटा दिया गया",
            ],
            Label::Note => ["ملاحظة", "note", "নোট", "नोट"],
            Label::NextPrayer => ["الصلاة القادمة", "Next prayer", "পরবর্তী নামাজ", "अगली नमाज़"],
            Label::TimeRemaining => ["متبقي", "Time remaining", "বাকি আছে", "शेष है"],
            Label::Hijri => ["هـ", "AH", "হিজরি", "हिजरी"],
            Label::Prayer(prayer) => match prayer {
                Prayer::Fajr => ["الفجر", "Fajr", "ফজর", "फजर"],
                Prayer::Sunrise => ["الشروق", "Sunrise", "সূর্যোদয়", "सूर्योदय"],
                Prayer::Dhuhr => ["الظهر", "Dhuhr", "যোহর", "जुहर"],
                Prayer::Asr => ["العصر", "Asr", "আসর", "अस्र"],
                Prayer::Maghrib => ["المغرب", "Maghrib", "মাগরিব", "मग़रिब"],
                Prayer::Isha => ["العشاء", "Isha", "এশা", "इशा"],
            },
            Label::AppDataCleared => [
                "تم مسح بيانات التطبيق",
                "App data cleared",
                "অ্যাপ্লিকেশন ডেটা সাফ করা হয়েছে",
                "ऐप डेटा साफ़ किया गया",
            ],
        };

        match self {
            Self::Arabic => ar,
            Self::English => en,
            Self::Bengali => bn,
            Self::Hindi => hi,
        }
    }
}
