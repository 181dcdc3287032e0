//! Client configuration.

use std::time::Duration;
use tilawa_core::AudioQuality;

/// Default Quran text API
pub const DEFAULT_QURAN_BASE_URL: &str = "https://api.alquran.cloud/v1";

/// Default prayer-times API
pub const DEFAULT_PRAYER_BASE_URL: &str = "https://api.aladhan.com/v1";

/// Default recitation CDN
pub const DEFAULT_AUDIO_BASE_URL: &str = "https://cdn.islamic.network/quran/audio";

/// Default reciter edition (Mishary Rashid Alafasy)
pub const DEFAULT_RECITER: &str = "ar.alafasy";

/// Default prayer-time calculation method (ISNA)
pub const DEFAULT_PRAYER_METHOD: u8 = 2;

/// Where and how the client fetches content.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the Quran text API
    pub quran_base_url: String,

    /// Base URL of the prayer-times API
    pub prayer_base_url: String,

    /// Base URL of the recitation CDN
    pub audio_base_url: String,

    /// Reciter edition used in audio locators
    pub reciter: String,

    /// Recitation bitrate used in audio locators
    pub audio_quality: AudioQuality,

    /// Prayer-time calculation method id
    pub prayer_method: u8,

    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            quran_base_url: DEFAULT_QURAN_BASE_URL.to_string(),
            prayer_base_url: DEFAULT_PRAYER_BASE_URL.to_string(),
            audio_base_url: DEFAULT_AUDIO_BASE_URL.to_string(),
            reciter: DEFAULT_RECITER.to_string(),
            audio_quality: AudioQuality::default(),
            prayer_method: DEFAULT_PRAYER_METHOD,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Default configuration with every API rooted at `base_url`.
    ///
    /// Handy for pointing the client at a single mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            quran_base_url: base_url.clone(),
            prayer_base_url: base_url.clone(),
            audio_base_url: base_url,
            ..Self::default()
        }
    }
}
