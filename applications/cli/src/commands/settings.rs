//! `tilawa settings`

use crate::error::Result;
use std::io::Write;
use tilawa_core::{AudioQuality, KeyValueStore, Label, Language};
use tilawa_storage::{settings, Theme};

/// Print every preference
pub fn show(store: &dyn KeyValueStore, out: &mut impl Write) -> Result<()> {
    let prefs = settings::load(store)?;

    writeln!(out, "language        {}", settings::language(store)?)?;
    writeln!(out, "theme           {}", settings::theme(store)?)?;
    writeln!(
        out,
        "audio quality   {} ({} kbps)",
        prefs.audio_quality,
        prefs.audio_quality.bitrate()
    )?;
    writeln!(out, "auto-play next  {}", prefs.auto_play_next)?;
    writeln!(out, "downloads       {}", prefs.download_enabled)?;
    writeln!(out, "notifications   {}", prefs.notifications_enabled)?;
    writeln!(out, "font size       {}%", prefs.font_size)?;
    Ok(())
}

pub fn set_language(store: &dyn KeyValueStore, language: Language, out: &mut impl Write) -> Result<()> {
    settings::set_language(store, language)?;
    writeln!(out, "Language set to {language}")?;
    Ok(())
}

pub fn set_theme(store: &dyn KeyValueStore, theme: Theme, out: &mut impl Write) -> Result<()> {
    settings::set_theme(store, theme)?;
    writeln!(out, "Theme set to {theme}")?;
    Ok(())
}

pub fn set_quality(store: &dyn KeyValueStore, quality: AudioQuality, out: &mut impl Write) -> Result<()> {
    settings::update(store, |prefs| prefs.audio_quality = quality)?;
    writeln!(out, "Audio quality set to {quality}")?;
    Ok(())
}

/// Wipe stored data, keeping language and theme
pub fn clear(store: &dyn KeyValueStore, language: Language, out: &mut impl Write) -> Result<()> {
    settings::clear_app_data(store)?;
    writeln!(out, "{}", language.label(Label::AppDataCleared))?;
    Ok(())
}
