//! `tilawa surahs`

use super::SURAHS_PER_PAGE;
use crate::error::Result;
use std::io::Write;
use tilawa_core::{filter_surahs, paginate, ContentProvider, Label, Language};

/// List surahs, optionally filtered, one page at a time (pages are 1-based)
pub async fn run(
    provider: &dyn ContentProvider,
    language: Language,
    search: Option<&str>,
    page: usize,
    out: &mut impl Write,
) -> Result<()> {
    let surahs = provider.fetch_surahs().await?;
    let matches = filter_surahs(&surahs, search.unwrap_or_default());

    if matches.is_empty() {
        writeln!(
            out,
            "{}: '{}'",
            language.label(Label::NoResults),
            search.unwrap_or_default()
        )?;
        return Ok(());
    }

    let page = paginate(&matches, page, SURAHS_PER_PAGE);
    for surah in page.items {
        writeln!(
            out,
            "{:>3}. {:<20} {:<28} {:<8} {:>3} {}",
            surah.number,
            surah.english_name,
            surah.english_name_translation,
            surah.revelation_type,
            surah.number_of_ayahs,
            language.label(Label::Verses)
        )?;
    }
    writeln!(
        out,
        "{} {}/{}",
        language.label(Label::Page),
        page.page,
        page.total_pages
    )?;

    Ok(())
}
