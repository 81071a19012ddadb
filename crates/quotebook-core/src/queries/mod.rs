//! Read-only queries over a quote collection
//!
//! All functions are pure: they borrow the collection and return owned copies.

pub mod category_queries;

pub use category_queries::{distinct_categories, filter_by_category, pick_random};
