use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily prayer times for one location
///
/// Times are "HH:MM" strings in the location's local time, as returned by the
/// prayer-times API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimes {
    /// Dawn prayer
    pub fajr: String,
    /// Sunrise (not a prayer; ends the Fajr window)
    pub sunrise: String,
    /// Midday prayer
    pub dhuhr: String,
    /// Afternoon prayer
    pub asr: String,
    /// Sunset prayer
    pub maghrib: String,
    /// Night prayer
    pub isha: String,
    /// Day the times apply to
    pub date: PrayerDate,
}

/// A named time in the daily schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    /// Dawn prayer
    Fajr,
    /// Sunrise
    Sunrise,
    /// Midday prayer
    Dhuhr,
    /// Afternoon prayer
    Asr,
    /// Sunset prayer
    Maghrib,
    /// Night prayer
    Isha,
}

impl Prayer {
    /// Transliterated name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The upcoming prayer and how long until it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayer<'a> {
    /// Which prayer
    pub prayer: Prayer,
    /// Its time as listed in the schedule
    pub time: &'a str,
    /// Time left from the reference time
    pub remaining: Duration,
}

impl PrayerTimes {
    /// Named times in the order they occur during the day
    pub fn entries(&self) -> [(Prayer, &str); 6] {
        [
            (Prayer::Fajr, self.fajr.as_str()),
            (Prayer::Sunrise, self.sunrise.as_str()),
            (Prayer::Dhuhr, self.dhuhr.as_str()),
            (Prayer::Asr, self.asr.as_str()),
            (Prayer::Maghrib, self.maghrib.as_str()),
            (Prayer::Isha, self.isha.as_str()),
        ]
    }

    /// First of the five prayers strictly after `now`
    ///
    /// Sunrise is skipped. Once Isha has passed, tomorrow's Fajr is returned
    /// (assuming it falls at today's time). Times that do not parse as
    /// "HH:MM" are ignored; `None` means nothing usable was left.
    #[must_use]
    pub fn next_after(&self, now: NaiveTime) -> Option<NextPrayer<'_>> {
        let mut prayers = self
            .entries()
            .into_iter()
            .filter(|(prayer, _)| *prayer != Prayer::Sunrise)
            .filter_map(|(prayer, time)| parse_time(time).map(|at| (prayer, time, at)));

        if let Some((prayer, time, at)) = prayers.clone().find(|(_, _, at)| *at > now) {
            return Some(NextPrayer {
                prayer,
                time,
                remaining: at.signed_duration_since(now),
            });
        }

        prayers.next().map(|(prayer, time, at)| NextPrayer {
            prayer,
            time,
            remaining: at.signed_duration_since(now) + Duration::days(1),
        })
    }
}

/// Parse the leading "HH:MM" of a schedule entry
///
/// The API sometimes appends a zone, e.g. "05:12 (EET)".
fn parse_time(time: &str) -> Option<NaiveTime> {
    let clock = time.get(..5)?;
    NaiveTime::parse_from_str(clock, "%H:%M").ok()
}

/// Calendar information accompanying prayer times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerDate {
    /// Human-readable Gregorian date (e.g. "19 Oct 2026")
    pub readable: String,
    /// Unix epoch seconds, as a string
    pub timestamp: String,
    /// Gregorian calendar date
    pub gregorian: Gregorian,
    /// Hijri calendar date
    pub hijri: Hijri,
}

/// Gregorian date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gregorian {
    /// "DD-MM-YYYY"
    pub date: String,
    /// Month
    pub month: GregorianMonth,
    /// Year
    pub year: String,
}

/// Gregorian month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GregorianMonth {
    /// 1-12
    pub number: u8,
    /// English name
    pub en: String,
}

/// Hijri date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hijri {
    /// "DD-MM-YYYY"
    pub date: String,
    /// Day of the month
    pub day: String,
    /// Month
    pub month: HijriMonth,
    /// Year
    pub year: String,
}

/// Hijri month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriMonth {
    /// 1-12
    pub number: u8,
    /// Transliterated name
    pub en: String,
    /// Arabic name
    pub ar: String,
}
