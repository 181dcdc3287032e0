//! App preferences
//!
//! Three keys, kept separate so that clearing app data can spare the
//! language and theme:
//! - `quran-app-settings`: [`AppSettings`] as camelCase JSON
//! - `quran-app-language`: bare language code (`en`, `ar`, ...)
//! - `ui-theme`: bare theme name (`light`, `dark`, `system`)
//!
//! # Example
//!
//! ```rust
//! use tilawa_core::{AudioQuality, Language};
//! use tilawa_storage::{settings, MemoryStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//!
//! let mut prefs = settings::load(&store)?;
//! prefs.audio_quality = AudioQuality::High;
//! settings::save(&store, &prefs)?;
//!
//! settings::set_language(&store, Language::Arabic)?;
//! settings::clear_app_data(&store)?;
//! assert_eq!(settings::language(&store)?, Language::Arabic);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::error::{Result, StorageError};
use crate::json::{get_json, set_json};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use tilawa_core::{AudioQuality, KeyValueStore, Language};
use tracing::{info, warn};

/// Key holding [`AppSettings`]
pub const SETTINGS_KEY: &str = "quran-app-settings";

/// Key holding the interface language code
pub const LANGUAGE_KEY: &str = "quran-app-language";

/// Key holding the theme name
pub const THEME_KEY: &str = "ui-theme";

/// Accepted font scale, in percent
pub const FONT_SIZE_RANGE: RangeInclusive<u16> = 50..=200;

/// Font scale granularity, in percent
pub const FONT_SIZE_STEP: u16 = 10;

/// General app preferences
///
/// Fields missing from stored JSON take their defaults, so settings written
/// by older versions still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Recitation bitrate
    pub audio_quality: AudioQuality,
    /// Continue with the next verse when one finishes
    pub auto_play_next: bool,
    /// Keep downloaded audio for offline use
    pub download_enabled: bool,
    /// Prayer time notifications
    pub notifications_enabled: bool,
    /// Verse text scale in percent
    pub font_size: u16,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            audio_quality: AudioQuality::Medium,
            auto_play_next: true,
            download_enabled: false,
            notifications_enabled: true,
            font_size: 100,
        }
    }
}

/// Colour scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background
    Light,
    /// Dark background
    Dark,
    /// Follow the operating system
    #[default]
    System,
}

impl Theme {
    /// Stored name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = StorageError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(StorageError::invalid_value(
                THEME_KEY,
                format!("unknown theme '{other}' (expected light, dark or system)"),
            )),
        }
    }
}

// ===== App Settings =====

/// Stored preferences, or defaults when none are saved
pub fn load(store: &dyn KeyValueStore) -> Result<AppSettings> {
    Ok(get_json(store, SETTINGS_KEY)?.unwrap_or_default())
}

/// Persist preferences
pub fn save(store: &dyn KeyValueStore, settings: &AppSettings) -> Result<()> {
    validate_font_size(settings.font_size)?;
    set_json(store, SETTINGS_KEY, settings)
}

/// Load, modify and save preferences in one step
pub fn update(
    store: &dyn KeyValueStore,
    change: impl FnOnce(&mut AppSettings),
) -> Result<AppSettings> {
    let mut settings = load(store)?;
    change(&mut settings);
    save(store, &settings)?;
    Ok(settings)
}

fn validate_font_size(size: u16) -> Result<()> {
    if !FONT_SIZE_RANGE.contains(&size) || size % FONT_SIZE_STEP != 0 {
        return Err(StorageError::invalid_value(
            SETTINGS_KEY,
            format!(
                "font size {size} must be between {} and {} in steps of {FONT_SIZE_STEP}",
                FONT_SIZE_RANGE.start(),
                FONT_SIZE_RANGE.end()
            ),
        ));
    }
    Ok(())
}

// ===== Language =====

/// Interface language (English when unset)
///
/// An unrecognised stored code falls back to English rather than failing.
pub fn language(store: &dyn KeyValueStore) -> Result<Language> {
    let Some(raw) = store.get(LANGUAGE_KEY)? else {
        return Ok(Language::default());
    };

    Ok(raw.parse().unwrap_or_else(|_| {
        warn!(value = %raw, "Unknown stored language, using default");
        Language::default()
    }))
}

/// Persist the interface language
pub fn set_language(store: &dyn KeyValueStore, language: Language) -> Result<()> {
    store.set(LANGUAGE_KEY, language.code())?;
    Ok(())
}

// ===== Theme =====

/// Colour scheme (system when unset)
pub fn theme(store: &dyn KeyValueStore) -> Result<Theme> {
    let Some(raw) = store.get(THEME_KEY)? else {
        return Ok(Theme::default());
    };

    Ok(raw.parse().unwrap_or_else(|_| {
        warn!(value = %raw, "Unknown stored theme, using default");
        Theme::default()
    }))
}

/// Persist the colour scheme
pub fn set_theme(store: &dyn KeyValueStore, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())?;
    Ok(())
}

// ===== Reset =====

/// Wipe all stored data except the language and theme
///
/// Bookmarks, reading position, last-read surah and app settings are all
/// removed. The language and theme in effect before the wipe are written
/// back, explicitly, even when they were only defaults.
pub fn clear_app_data(store: &dyn KeyValueStore) -> Result<()> {
    let language = language(store)?;
    let theme = theme(store)?;

    store.clear()?;

    set_language(store, language)?;
    set_theme(store, theme)?;

    info!(%language, %theme, "App data cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn defaults_when_nothing_stored() {
        let store = MemoryStore::new();
        let settings = load(&store).unwrap();

        assert_eq!(settings.audio_quality, AudioQuality::Medium);
        assert!(settings.auto_play_next);
        assert!(!settings.download_enabled);
        assert!(settings.notifications_enabled);
        assert_eq!(settings.font_size, 100);
        assert_eq!(language(&store).unwrap(), Language::English);
        assert_eq!(theme(&store).unwrap(), Theme::System);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let store = MemoryStore::new();
        store
            .set(SETTINGS_KEY, r#"{"audioQuality":"high","fontSize":120}"#)
            .unwrap();

        let settings = load(&store).unwrap();
        assert_eq!(settings.audio_quality, AudioQuality::High);
        assert_eq!(settings.font_size, 120);
        assert!(settings.auto_play_next);
    }

    #[test]
    fn update_persists_change() {
        let store = MemoryStore::new();
        update(&store, |s| s.download_enabled = true).unwrap();

        let raw = store.get(SETTINGS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"downloadEnabled\":true"));
        assert!(load(&store).unwrap().download_enabled);
    }

    #[test]
    fn font_size_is_validated() {
        let store = MemoryStore::new();
        for bad in [40, 210, 105] {
            let err = update(&store, |s| s.font_size = bad).unwrap_err();
            assert!(matches!(err, StorageError::InvalidValue { .. }), "{bad}");
        }
        assert_eq!(load(&store).unwrap().font_size, 100);
    }

    #[test]
    fn language_and_theme_are_bare_strings() {
        let store = MemoryStore::new();
        set_language(&store, Language::Bengali).unwrap();
        set_theme(&store, Theme::Dark).unwrap();

        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("bn"));
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn unknown_stored_values_fall_back() {
        let store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "fr").unwrap();
        store.set(THEME_KEY, "ocean").unwrap();

        assert_eq!(language(&store).unwrap(), Language::English);
        assert_eq!(theme(&store).unwrap(), Theme::System);
    }

    #[test]
    fn clear_app_data_keeps_language_and_theme() {
        let store = MemoryStore::new();
        set_language(&store, Language::Hindi).unwrap();
        set_theme(&store, Theme::Light).unwrap();
        update(&store, |s| s.font_size = 150).unwrap();
        store.set("quran-bookmarks", "[]").unwrap();
        store.set("last-read-surah", "2").unwrap();

        clear_app_data(&store).unwrap();

        assert_eq!(store.keys().unwrap(), vec![LANGUAGE_KEY, THEME_KEY]);
        assert_eq!(language(&store).unwrap(), Language::Hindi);
        assert_eq!(theme(&store).unwrap(), Theme::Light);
        assert_eq!(load(&store).unwrap(), AppSettings::default());
    }

    #[test]
    fn theme_parsing() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
    }
}
