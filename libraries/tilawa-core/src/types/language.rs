use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TilawaError;

/// Interface and translation language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Arabic (`ar`)
    #[serde(rename = "ar")]
    Arabic,
    /// English (`en`)
    #[default]
    #[serde(rename = "en")]
    English,
    /// Bengali (`bn`)
    #[serde(rename = "bn")]
    Bengali,
    /// Hindi (`hi`)
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 4] = [
        Language::Arabic,
        Language::English,
        Language::Bengali,
        Language::Hindi,
    ];

    /// Two-letter language code
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
            Self::Bengali => "bn",
            Self::Hindi => "hi",
        }
    }

    /// Translation edition served by the Quran API for this language
    ///
    /// Arabic readers get the Muyassar tafsir rather than a second copy of the
    /// Arabic text.
    #[must_use]
    pub fn translation_edition(&self) -> &'static str {
        match self {
            Self::Arabic => "ar.muyassar",
            Self::Bengali => "bn.bengali",
            Self::Hindi => "hi.hindi",
            Self::English => "en.sahih",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TilawaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Self::Arabic),
            "en" => Ok(Self::English),
            "bn" => Ok(Self::Bengali),
            "hi" => Ok(Self::Hindi),
            other => Err(TilawaError::invalid_input(format!(
                "unsupported language '{other}' (expected ar, en, bn or hi)"
            ))),
        }
    }
}

/// Recitation quality preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
    /// 64 kbps
    Low,
    /// 128 kbps
    #[default]
    Medium,
    /// 192 kbps
    High,
}

impl AudioQuality {
    /// Bitrate (kbps) of the recitation files for this quality
    #[must_use]
    pub fn bitrate(&self) -> u32 {
        match self {
            Self::Low => 64,
            Self::Medium => 128,
            Self::High => 192,
        }
    }

    /// Lowercase name, as accepted by `FromStr`
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioQuality {
    type Err = TilawaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(TilawaError::invalid_input(format!(
                "unsupported audio quality '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_editions() {
        assert_eq!(Language::Arabic.translation_edition(), "ar.muyassar");
        assert_eq!(Language::English.translation_edition(), "en.sahih");
        assert_eq!(Language::Bengali.translation_edition(), "bn.bengali");
        assert_eq!(Language::Hindi.translation_edition(), "hi.hindi");
    }

    #[test]
    fn language_round_trips_through_code() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
        }
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Bengali).unwrap(), "\"bn\"");
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn quality_bitrates() {
        assert_eq!(AudioQuality::Low.bitrate(), 64);
        assert_eq!(AudioQuality::default().bitrate(), 128);
        assert_eq!("HIGH".parse::<AudioQuality>().unwrap(), AudioQuality::High);
    }
}
