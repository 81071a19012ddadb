//! Storage key configuration

/// Keys the store reads and writes
///
/// `collection_key` and `categories_key` live in the long-lived capability;
/// `selected_category_key` and `last_viewed_key` live in the session one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub collection_key: String,
    pub categories_key: String,
    pub selected_category_key: String,
    pub last_viewed_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            collection_key: "quotes".to_string(),
            categories_key: "categories".to_string(),
            selected_category_key: "lastSelectedCategory".to_string(),
            last_viewed_key: "lastViewedQuote".to_string(),
        }
    }
}

impl StoreConfig {
    /// Use a different collection key, keeping the other defaults
    ///
    /// The category cache key is derived from it so that two collections
    /// sharing one capability never share a cache.
    pub fn for_collection(collection_key: impl Into<String>) -> Self {
        let collection_key = collection_key.into();
        Self {
            categories_key: format!("{}.categories", collection_key),
            collection_key,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let config = StoreConfig::default();
        assert_eq!(config.collection_key, "quotes");
        assert_eq!(config.categories_key, "categories");
        assert_eq!(config.selected_category_key, "lastSelectedCategory");
        assert_eq!(config.last_viewed_key, "lastViewedQuote");
    }

    #[test]
    fn test_for_collection_derives_cache_key() {
        let config = StoreConfig::for_collection("work");
        assert_eq!(config.collection_key, "work");
        assert_eq!(config.categories_key, "work.categories");
    }
}
