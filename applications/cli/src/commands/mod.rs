//! Command implementations
//!
//! Every command receives its collaborators explicitly (content provider,
//! key-value store, output writer) so it can run against fakes in tests.

pub mod bookmarks;
pub mod prayer;
pub mod read;
pub mod recite;
pub mod settings;
pub mod surahs;

use std::io::Write;
use tilawa_core::{Label, Language, SurahDetail, Verse};

/// Surahs listed per page
pub const SURAHS_PER_PAGE: usize = 20;

/// Print one verse with its translation
pub(crate) fn write_verse(out: &mut impl Write, verse: &Verse) -> std::io::Result<()> {
    writeln!(out, "[{}] {}", verse.number, verse.text)?;
    if !verse.translation.is_empty() {
        writeln!(out, "    {}", verse.translation)?;
    }
    Ok(())
}

/// Print a surah heading
pub(crate) fn write_surah_heading(
    out: &mut impl Write,
    detail: &SurahDetail,
    language: Language,
) -> std::io::Result<()> {
    let surah = &detail.surah;
    writeln!(
        out,
        "{}. {} ({}) - {}, {} {}",
        surah.number,
        surah.english_name,
        surah.name,
        surah.english_name_translation,
        surah.number_of_ayahs,
        language.label(Label::Verses)
    )
}
