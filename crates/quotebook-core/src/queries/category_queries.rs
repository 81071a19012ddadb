use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Quote;

/// Distinct categories in first-occurrence order
///
/// # Example
/// ```
/// use quotebook_core::model::Quote;
/// use quotebook_core::queries::distinct_categories;
///
/// let quotes = vec![Quote::new("a", "X"), Quote::new("b", "Y"), Quote::new("c", "X")];
/// assert_eq!(distinct_categories(&quotes), vec!["X", "Y"]);
/// ```
pub fn distinct_categories(quotes: &[Quote]) -> Vec<String> {
    let mut seen = HashSet::new();
    quotes
        .iter()
        .filter(|q| seen.insert(q.category.as_str()))
        .map(|q| q.category.clone())
        .collect()
}

/// All quotes filed under exactly `category`, in collection order
///
/// Matching is exact and case-sensitive. An empty category matches nothing,
/// since no stored quote has an empty category.
pub fn filter_by_category(quotes: &[Quote], category: &str) -> Vec<Quote> {
    quotes.iter().filter(|q| q.is_in(category)).cloned().collect()
}

/// Uniformly pick one quote filed under `category`
///
/// Returns None when nothing matches.
pub fn pick_random<R: Rng + ?Sized>(quotes: &[Quote], category: &str, rng: &mut R) -> Option<Quote> {
    let matching: Vec<&Quote> = quotes.iter().filter(|q| q.is_in(category)).collect();
    matching.choose(rng).map(|q| (*q).clone())
}
