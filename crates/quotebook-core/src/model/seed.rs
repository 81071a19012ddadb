//! Built-in seed collection
//!
//! Used whenever no valid collection has been persisted yet.

use super::Quote;

const SEED: [(&str, &str); 4] = [
    (
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Inspiration",
    ),
    (
        "Do not go where the path may lead, go instead where there is no path and leave a trail.",
        "Inspiration",
    ),
    (
        "Life is what happens when you're busy making other plans.",
        "Life",
    ),
    (
        "The purpose of life is not to be happy. It is to be useful, to be honorable, to be compassionate, to have it make some difference that you have lived and lived well.",
        "Life",
    ),
];

/// The four default quotes, in their fixed order
pub fn seed_collection() -> Vec<Quote> {
    SEED.iter()
        .map(|(text, category)| Quote::new(*text, *category))
        .collect()
}
