//! Property-based tests for store invariants

mod common;

use common::new_store;
use proptest::prelude::*;
use quotebook_core::{codec, Quote};

/// Field content with at least one visible character
fn arb_field() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[A-Za-z0-9][A-Za-z0-9 .,']{0,20}[ \t]{0,3}"
}

fn arb_quote() -> impl Strategy<Value = Quote> {
    (arb_field(), prop_oneof![Just("X"), Just("Y"), Just("Z")])
        .prop_map(|(text, category)| Quote::new(text, category))
}

proptest! {
    #[test]
    fn prop_add_grows_by_one_with_trimmed_last(text in arb_field(), category in arb_field()) {
        let (mut store, _, _) = new_store();
        let before = store.len();

        store.add(&text, &category).unwrap();

        prop_assert_eq!(store.len(), before + 1);
        let last = store.quotes().last().unwrap();
        prop_assert_eq!(last.text.as_str(), text.trim());
        prop_assert_eq!(last.category.as_str(), category.trim());
    }

    #[test]
    fn prop_whitespace_only_is_rejected(blank in "[ \t\n]{0,5}", other in arb_field()) {
        let (mut store, _, _) = new_store();

        prop_assert!(store.add(&blank, &other).unwrap_err().is_validation());
        prop_assert!(store.add(&other, &blank).unwrap_err().is_validation());
        prop_assert_eq!(store.len(), 4);
    }

    #[test]
    fn prop_filter_matches_count(quotes in prop::collection::vec(arb_quote(), 0..30)) {
        let (mut store, _, _) = new_store();
        store.replace_all(quotes.clone()).unwrap();

        for category in ["X", "Y", "Z"] {
            let filtered = store.filter_by_category(category);
            prop_assert!(filtered.iter().all(|q| q.category == category));
            prop_assert_eq!(
                filtered.len(),
                quotes.iter().filter(|q| q.category == category).count()
            );
        }
    }

    #[test]
    fn prop_export_import_round_trip(quotes in prop::collection::vec(arb_quote(), 0..30)) {
        let (mut store, _, _) = new_store();
        store.replace_all(quotes).unwrap();
        let before = store.quotes().to_vec();

        let parsed = codec::decode_import(&store.export_snapshot().unwrap()).unwrap();
        store.replace_all(parsed).unwrap();

        prop_assert_eq!(store.quotes(), before.as_slice());
    }

    #[test]
    fn prop_categories_are_distinct_and_cover_collection(
        quotes in prop::collection::vec(arb_quote(), 0..30)
    ) {
        let (mut store, _, _) = new_store();
        store.replace_all(quotes.clone()).unwrap();
        let categories = store.categories();

        let unique: std::collections::HashSet<_> = categories.iter().collect();
        prop_assert_eq!(unique.len(), categories.len());
        prop_assert!(quotes.iter().all(|q| categories.contains(&q.category)));
        if let Some(first) = quotes.first() {
            prop_assert_eq!(&categories[0], &first.category);
        }
    }
}
