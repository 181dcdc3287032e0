//! Wire types of the content APIs.

use crate::error::{ClientError, Result};
use serde::{de::DeserializeOwned, Deserialize};
use tilawa_core::PrayerDate;

/// Envelope wrapping every response: `{ "code": 200, "status": "OK", "data": ... }`
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    pub code: u16,
    pub status: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ApiEnvelope {
    /// Whether the envelope reports success
    pub fn is_ok(&self) -> bool {
        self.code == 200 && self.status == "OK"
    }

    /// Decode the payload, failing unless the envelope reports success
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T> {
        if !self.is_ok() {
            let message = match self.data {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            return Err(ClientError::Api {
                code: self.code,
                status: self.status,
                message,
            });
        }

        serde_json::from_value(self.data).map_err(|e| ClientError::ParseError(e.to_string()))
    }
}

/// One surah edition (`/surah/{n}` or `/surah/{n}/{edition}`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahEdition {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub revelation_type: String,
    pub number_of_ayahs: u16,
    pub ayahs: Vec<ApiAyah>,
}

/// One verse of an edition
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAyah {
    /// Global verse number across the whole Quran (1-6236)
    pub number: u32,
    pub text: String,
    pub number_in_surah: u16,
}

/// Payload of `/timings`
#[derive(Debug, Clone, Deserialize)]
pub struct TimingsData {
    pub timings: Timings,
    pub date: PrayerDate,
}

/// Named prayer times (the API capitalizes the keys)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Timings {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}
