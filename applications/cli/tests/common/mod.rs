/// Common test utilities and fixtures
use async_trait::async_trait;
use std::sync::Mutex;
use tilawa_core::{
    is_valid_surah_number, ContentProvider, Gregorian, GregorianMonth, Hijri, HijriMonth,
    Language, PrayerDate, PrayerTimes, Result, Surah, SurahDetail, TilawaError, Verse,
};

/// Content provider serving two canned surahs
///
/// Al-Faatiha (1, seven verses) and Al-Ikhlaas (112, four verses). Every
/// request is recorded so tests can check what was fetched.
#[derive(Default)]
pub struct FakeProvider {
    requests: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }
}

pub fn surah_index() -> Vec<Surah> {
    vec![
        surah(1, "سُورَةُ ٱلْفَاتِحَةِ", "Al-Faatiha", "The Opening", "Meccan", 7),
        surah(112, "سُورَةُ الإِخْلَاصِ", "Al-Ikhlaas", "Sincerity", "Meccan", 4),
    ]
}

fn surah(
    number: u16,
    name: &str,
    english_name: &str,
    translation: &str,
    revelation_type: &str,
    number_of_ayahs: u16,
) -> Surah {
    Surah {
        number,
        name: name.to_string(),
        english_name: english_name.to_string(),
        english_name_translation: translation.to_string(),
        revelation_type: revelation_type.to_string(),
        number_of_ayahs,
    }
}

pub fn audio_url(surah: u16, verse: u16) -> String {
    format!("fake://audio/{surah}/{verse}.mp3")
}

#[async_trait]
impl ContentProvider for FakeProvider {
    async fn fetch_surahs(&self) -> Result<Vec<Surah>> {
        self.record("surahs".to_string());
        Ok(surah_index())
    }

    async fn fetch_surah_detail(&self, number: u16, language: Language) -> Result<SurahDetail> {
        self.record(format!("surah {number} {}", language.code()));

        if !is_valid_surah_number(number) {
            return Err(TilawaError::InvalidSurah(number));
        }
        let summary = surah_index()
            .into_iter()
            .find(|s| s.number == number)
            .ok_or_else(|| TilawaError::content(format!("surah {number} unavailable")))?;

        let verses = (1..=summary.number_of_ayahs)
            .map(|n| {
                Verse::new(
                    n,
                    format!("آية {n}"),
                    format!("{} verse {n} of {}", language.code(), summary.english_name),
                    audio_url(number, n),
                )
            })
            .collect();

        Ok(SurahDetail {
            surah: summary,
            verses,
        })
    }

    async fn fetch_prayer_times(&self, latitude: f64, longitude: f64) -> Result<PrayerTimes> {
        self.record(format!("prayer {latitude} {longitude}"));

        Ok(PrayerTimes {
            fajr: "05:12".to_string(),
            sunrise: "06:30".to_string(),
            dhuhr: "12:15".to_string(),
            asr: "15:30".to_string(),
            maghrib: "18:01".to_string(),
            isha: "19:15".to_string(),
            date: PrayerDate {
                readable: "19 Oct 2026".to_string(),
                timestamp: "1792368000".to_string(),
                gregorian: Gregorian {
                    date: "19-10-2026".to_string(),
                    month: GregorianMonth {
                        number: 10,
                        en: "October".to_string(),
                    },
                    year: "2026".to_string(),
                },
                hijri: Hijri {
                    date: "08-05-1448".to_string(),
                    day: "08".to_string(),
                    month: HijriMonth {
                        number: 5,
                        en: "Jumādá al-ūlá".to_string(),
                        ar: "جُمادى الأولى".to_string(),
                    },
                    year: "1448".to_string(),
                },
            },
        })
    }
}

/// Command output as text
pub fn text(out: &[u8]) -> String {
    String::from_utf8_lossy(out).into_owned()
}
