mod common;

use common::{new_store, xyx_store};
use quotebook_core::Quote;

#[test]
fn test_categories_first_occurrence_deduplicated() {
    let store = xyx_store();
    assert_eq!(store.categories(), vec!["X", "Y"]);
}

#[test]
fn test_filter_returns_only_matching_in_order() {
    let store = xyx_store();
    let filtered = store.filter_by_category("X");

    assert_eq!(filtered, vec![Quote::new("a", "X"), Quote::new("c", "X")]);
    assert!(filtered.iter().all(|q| q.category == "X"));
}

#[test]
fn test_filter_empty_string_returns_empty() {
    let store = xyx_store();
    assert!(store.filter_by_category("").is_empty());
}

#[test]
fn test_filter_unknown_category_returns_empty() {
    let (store, _, _) = new_store();
    assert!(store.filter_by_category("Nope").is_empty());
}

#[test]
fn test_filter_result_is_a_copy() {
    let mut store = xyx_store();
    let mut filtered = store.filter_by_category("Y");
    filtered.clear();

    store.add("d", "Y").unwrap();
    assert_eq!(store.filter_by_category("Y").len(), 2);
}

#[test]
fn test_random_from_unknown_category_is_none() {
    let store = xyx_store();
    assert_eq!(store.random_from_category("Z"), None);
    assert_eq!(store.random_from_category(""), None);
}

#[test]
fn test_random_from_category_returns_member() {
    let store = xyx_store();
    for _ in 0..50 {
        let quote = store.random_from_category("X").unwrap();
        assert_eq!(quote.category, "X");
    }
}
