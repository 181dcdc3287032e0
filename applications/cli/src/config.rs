/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tilawa_client::{
    ClientConfig, DEFAULT_AUDIO_BASE_URL, DEFAULT_PRAYER_BASE_URL, DEFAULT_PRAYER_METHOD,
    DEFAULT_QURAN_BASE_URL, DEFAULT_RECITER,
};
use tilawa_core::AudioQuality;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "tilawa.toml";

/// Prefix of environment overrides (`TILAWA_API__RECITER=ar.husary`)
pub const ENV_PREFIX: &str = "TILAWA";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TilawaConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_quran_base_url")]
    pub quran_base_url: String,

    #[serde(default = "default_prayer_base_url")]
    pub prayer_base_url: String,

    #[serde(default = "default_audio_base_url")]
    pub audio_base_url: String,

    #[serde(default = "default_reciter")]
    pub reciter: String,

    #[serde(default = "default_prayer_method")]
    pub prayer_method: u8,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

/// Dry-run recitation timing
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    /// Simulated length of every verse clip
    #[serde(default = "default_clip_millis")]
    pub clip_millis: u64,

    /// Interval between progress updates
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

impl TilawaConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `tilawa.toml` in the working
    /// directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (TILAWA_SECTION__KEY)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("api.quran_base_url", &self.api.quran_base_url),
            ("api.prayer_base_url", &self.api.prayer_base_url),
            ("api.audio_base_url", &self.api.audio_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(CliError::Config(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        if self.api.reciter.trim().is_empty() {
            return Err(CliError::Config("api.reciter cannot be empty".to_string()));
        }

        if self.api.timeout_secs == 0 {
            return Err(CliError::Config("api.timeout_secs must be positive".to_string()));
        }

        if self.playback.clip_millis == 0 || self.playback.tick_millis == 0 {
            return Err(CliError::Config(
                "playback.clip_millis and playback.tick_millis must be positive".to_string(),
            ));
        }

        if self.storage.data_file.as_os_str().is_empty() {
            return Err(CliError::Config("storage.data_file cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Client settings for the given recitation quality
    pub fn client_config(&self, audio_quality: AudioQuality) -> ClientConfig {
        ClientConfig {
            quran_base_url: self.api.quran_base_url.clone(),
            prayer_base_url: self.api.prayer_base_url.clone(),
            audio_base_url: self.api.audio_base_url.clone(),
            reciter: self.api.reciter.clone(),
            audio_quality,
            prayer_method: self.api.prayer_method,
            timeout: Duration::from_secs(self.api.timeout_secs),
        }
    }
}

impl PlaybackSettings {
    pub fn clip(&self) -> Duration {
        Duration::from_millis(self.clip_millis)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        quran_base_url: default_quran_base_url(),
        prayer_base_url: default_prayer_base_url(),
        audio_base_url: default_audio_base_url(),
        reciter: default_reciter(),
        prayer_method: default_prayer_method(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_quran_base_url() -> String {
    DEFAULT_QURAN_BASE_URL.to_string()
}

fn default_prayer_base_url() -> String {
    DEFAULT_PRAYER_BASE_URL.to_string()
}

fn default_audio_base_url() -> String {
    DEFAULT_AUDIO_BASE_URL.to_string()
}

fn default_reciter() -> String {
    DEFAULT_RECITER.to_string()
}

fn default_prayer_method() -> u8 {
    DEFAULT_PRAYER_METHOD
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        data_file: default_data_file(),
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./tilawa-data.json")
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        clip_millis: default_clip_millis(),
        tick_millis: default_tick_millis(),
    }
}

fn default_clip_millis() -> u64 {
    3000
}

fn default_tick_millis() -> u64 {
    250
}

impl Default for TilawaConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            storage: default_storage(),
            playback: default_playback(),
        }
    }
}
