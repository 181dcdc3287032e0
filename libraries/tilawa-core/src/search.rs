//! Search and pagination helpers
//!
//! All matching is case-insensitive substring matching. Verse filtering keeps
//! each hit's index into the original list so a filtered view can drive the
//! full-surah audio queue.

use crate::types::{Bookmark, Surah, Verse};

/// Surahs whose name, English name, English meaning or number contains `term`
///
/// A blank term matches every surah.
pub fn filter_surahs<'a>(surahs: &'a [Surah], term: &str) -> Vec<&'a Surah> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return surahs.iter().collect();
    }

    surahs
        .iter()
        .filter(|surah| {
            surah.name.to_lowercase().contains(&term)
                || surah.english_name.to_lowercase().contains(&term)
                || surah.english_name_translation.to_lowercase().contains(&term)
                || surah.number.to_string().contains(&term)
        })
        .collect()
}

/// Verses whose text or translation contains `query`, paired with their index
/// in `verses`
pub fn filter_verses<'a>(verses: &'a [Verse], query: &str) -> Vec<(usize, &'a Verse)> {
    let query = query.trim().to_lowercase();

    verses
        .iter()
        .enumerate()
        .filter(|(_, verse)| {
            query.is_empty()
                || verse.text.to_lowercase().contains(&query)
                || verse.translation.to_lowercase().contains(&query)
        })
        .collect()
}

/// Bookmarks matching `term` on surah name, verse text or "surah N"
pub fn filter_bookmarks<'a>(bookmarks: &'a [Bookmark], term: &str) -> Vec<&'a Bookmark> {
    let term = term.trim().to_lowercase();

    bookmarks
        .iter()
        .filter(|bookmark| {
            term.is_empty()
                || bookmark.surah_name.to_lowercase().contains(&term)
                || bookmark.verse_text.to_lowercase().contains(&term)
                || format!("surah {}", bookmark.surah_number).contains(&term)
        })
        .collect()
}

/// One page of a longer list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    /// Items on this page
    pub items: &'a [T],
    /// 1-based page number actually served (after clamping)
    pub page: usize,
    /// Total number of pages (0 for an empty list)
    pub total_pages: usize,
}

/// Slice `items` into 1-based pages of `per_page`
///
/// Out-of-range page numbers are clamped to the first or last page.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());

    Page {
        items: &items[start..end],
        page,
        total_pages,
    }
}
