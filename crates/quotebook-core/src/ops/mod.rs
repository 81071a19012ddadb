pub mod store;

pub use store::{CollectionSource, QuoteStore};
