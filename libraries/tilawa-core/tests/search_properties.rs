//! Property-based tests for search and pagination helpers

use proptest::prelude::*;
use tilawa_core::{filter_verses, paginate, Verse};

fn arbitrary_verses() -> impl Strategy<Value = Vec<Verse>> {
    prop::collection::vec(("[a-z ]{0,20}", "[A-Za-z ]{0,30}"), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (text, translation))| {
                let number = u16::try_from(i + 1).unwrap();
                Verse::new(number, text, translation, format!("https://cdn/{number}.mp3"))
            })
            .collect()
    })
}

proptest! {
    /// Property: every hit maps back to the same verse in the full list
    #[test]
    fn filtered_indices_point_into_full_list(
        verses in arbitrary_verses(),
        query in "[a-z]{0,3}"
    ) {
        let hits = filter_verses(&verses, &query);

        let mut last = None;
        for (index, verse) in hits {
            prop_assert!(index < verses.len());
            prop_assert_eq!(&verses[index], verse);
            prop_assert!(last.map_or(true, |prev| index > prev), "hits must stay in order");
            last = Some(index);
        }
    }

    /// Property: walking every page yields every item exactly once
    #[test]
    fn pages_cover_all_items(len in 0usize..200, per_page in 1usize..30) {
        let items: Vec<usize> = (0..len).collect();
        let total_pages = paginate(&items, 1, per_page).total_pages;

        let mut seen = Vec::new();
        for page in 1..=total_pages {
            seen.extend_from_slice(paginate(&items, page, per_page).items);
        }

        prop_assert_eq!(seen, items);
    }
}
