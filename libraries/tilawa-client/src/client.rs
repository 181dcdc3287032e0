//! Content client.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::types::{ApiAyah, ApiEnvelope, SurahEdition, TimingsData};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tilawa_core::{
    is_valid_surah_number, ContentProvider, Language, PrayerTimes, Surah, SurahDetail, Verse,
};
use tracing::{debug, info, warn};
use url::Url;

/// Client for the Quran text, recitation and prayer-time APIs.
///
/// # Example
///
/// ```no_run
/// use tilawa_client::{ClientConfig, TilawaClient};
/// use tilawa_core::Language;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TilawaClient::new(ClientConfig::default())?;
///
/// let surahs = client.surahs().await?;
/// println!("{} surahs", surahs.len());
///
/// let kahf = client.surah_detail(18, Language::English).await?;
/// println!("{} verses", kahf.verses.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TilawaClient {
    http: Client,
    config: ClientConfig,
}

impl TilawaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = ClientConfig {
            quran_base_url: normalize_base_url(&config.quran_base_url)?,
            prayer_base_url: normalize_base_url(&config.prayer_base_url)?,
            audio_base_url: normalize_base_url(&config.audio_base_url)?,
            ..config
        };

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Tilawa/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    /// Active configuration (base URLs normalized).
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the surah index.
    pub async fn surahs(&self) -> Result<Vec<Surah>> {
        let url = format!("{}/surah", self.config.quran_base_url);
        let surahs: Vec<Surah> = self.get_data(&url, &[]).await?;

        info!(count = surahs.len(), "Fetched surah index");
        Ok(surahs)
    }

    /// Fetch a surah with verse text, translation and audio locators.
    ///
    /// The Arabic text and the translation are fetched concurrently. The
    /// translation is best effort: when it fails the verses carry empty
    /// translations.
    pub async fn surah_detail(&self, number: u16, language: Language) -> Result<SurahDetail> {
        if !is_valid_surah_number(number) {
            return Err(ClientError::InvalidSurah(number));
        }

        let arabic_url = format!("{}/surah/{}", self.config.quran_base_url, number);
        let edition = language.translation_edition();
        let translation_url = format!(
            "{}/surah/{}/{}",
            self.config.quran_base_url, number, edition
        );

        let (arabic, translation) = tokio::join!(
            self.get_data::<SurahEdition>(&arabic_url, &[]),
            self.get_data::<SurahEdition>(&translation_url, &[]),
        );

        let arabic = arabic?;
        let translated = match translation {
            Ok(edition) => edition.ayahs,
            Err(e) => {
                warn!(surah = number, edition, error = %e, "Translation unavailable");
                Vec::new()
            }
        };

        let verses = arabic
            .ayahs
            .iter()
            .enumerate()
            .map(|(index, ayah)| {
                let translation = translated
                    .get(index)
                    .map(|t| t.text.clone())
                    .unwrap_or_default();
                Verse::new(
                    ayah.number_in_surah,
                    ayah.text.clone(),
                    translation,
                    self.audio_url(ayah),
                )
            })
            .collect::<Vec<_>>();

        debug!(surah = number, verses = verses.len(), edition, "Fetched surah");

        Ok(SurahDetail {
            surah: Surah {
                number: arabic.number,
                name: arabic.name,
                english_name: arabic.english_name,
                english_name_translation: arabic.english_name_translation,
                revelation_type: arabic.revelation_type,
                number_of_ayahs: arabic.number_of_ayahs,
            },
            verses,
        })
    }

    /// Fetch today's prayer times for a location.
    pub async fn prayer_times(&self, latitude: f64, longitude: f64) -> Result<PrayerTimes> {
        let url = format!("{}/timings", self.config.prayer_base_url);
        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("method", self.config.prayer_method.to_string()),
        ];

        let data: TimingsData = self.get_data(&url, &query).await?;
        let timings = data.timings;

        Ok(PrayerTimes {
            fajr: timings.fajr,
            sunrise: timings.sunrise,
            dhuhr: timings.dhuhr,
            asr: timings.asr,
            maghrib: timings.maghrib,
            isha: timings.isha,
            date: data.date,
        })
    }

    /// Recitation locator for a verse, keyed by its global number.
    fn audio_url(&self, ayah: &ApiAyah) -> String {
        format!(
            "{}/{}/{}/{}.mp3",
            self.config.audio_base_url,
            self.config.audio_quality.bitrate(),
            self.config.reciter,
            ayah.number
        )
    }

    /// GET `url` and unwrap the response envelope.
    async fn get_data<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        debug!(url = %url, "Fetching");

        let response = self.http.get(url).query(query).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();
        let body = response.text().await?;

        // Error responses usually still carry an envelope with a message
        let envelope = serde_json::from_str::<ApiEnvelope>(&body);

        if !status.is_success() {
            return Err(match envelope {
                Ok(envelope) => match envelope.into_data::<serde_json::Value>() {
                    Err(api) => api,
                    Ok(_) => ClientError::ServerError {
                        status: status.as_u16(),
                        message: body,
                    },
                },
                Err(_) => ClientError::ServerError {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        envelope
            .map_err(|e| ClientError::ParseError(format!("Invalid response envelope: {}", e)))?
            .into_data()
    }
}

/// Trim a trailing slash and require an absolute http(s) URL.
fn normalize_base_url(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = raw.trim().trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ClientError::InvalidUrl(format!(
            "{url}: URL must start with http:// or https://"
        )));
    }

    Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))?;
    Ok(url)
}

#[async_trait]
impl ContentProvider for TilawaClient {
    async fn fetch_surahs(&self) -> tilawa_core::Result<Vec<Surah>> {
        Ok(self.surahs().await?)
    }

    async fn fetch_surah_detail(
        &self,
        number: u16,
        language: Language,
    ) -> tilawa_core::Result<SurahDetail> {
        Ok(self.surah_detail(number, language).await?)
    }

    async fn fetch_prayer_times(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> tilawa_core::Result<PrayerTimes> {
        Ok(self.prayer_times(latitude, longitude).await?)
    }
}
