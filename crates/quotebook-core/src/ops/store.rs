use std::io::Read;
use std::time::Instant;

use rand::Rng;

use crate::codec;
use crate::config::StoreConfig;
use crate::errors::{QuoteBookError, Result};
use crate::kv::KeyValueStore;
use crate::model::{seed_collection, Quote};
use crate::queries;
use crate::rules::validation;
use crate::{log_op_end, log_op_error, log_op_start};

/// Where the collection came from at initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionSource {
    /// Loaded from the long-lived capability
    Persisted,
    /// Nothing valid was stored; the built-in seed is in use
    Seed,
}

/// Owner of the quote collection
///
/// Every mutation goes through `add` or `replace_all`, which persist the
/// full collection before the in-memory copy changes. Queries hand out
/// owned copies.
///
/// Not thread-safe - designed for single-threaded, run-to-completion use.
pub struct QuoteStore {
    quotes: Vec<Quote>,
    source: CollectionSource,
    config: StoreConfig,
    local: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
}

impl QuoteStore {
    /// Load the collection with the default storage keys
    ///
    /// See [`QuoteStore::initialize_with`].
    pub fn initialize(local: Box<dyn KeyValueStore>, session: Box<dyn KeyValueStore>) -> Self {
        Self::initialize_with(StoreConfig::default(), local, session)
    }

    /// Load the collection from `local`, falling back to the seed
    ///
    /// Never fails. A missing value, a read failure, or a value that does
    /// not decode as a valid collection all yield the seed collection; the
    /// seed is not written back until the first mutation.
    pub fn initialize_with(
        config: StoreConfig,
        local: Box<dyn KeyValueStore>,
        session: Box<dyn KeyValueStore>,
    ) -> Self {
        let start = Instant::now();
        log_op_start!("initialize", storage_key = config.collection_key.as_str());

        let loaded = match local.get(&config.collection_key) {
            Ok(Some(raw)) => match codec::decode_persisted(&config.collection_key, &raw) {
                Ok(quotes) => Some(quotes),
                Err(err) => {
                    tracing::warn!(
                        storage_key = config.collection_key.as_str(),
                        error = %err,
                        "Persisted collection is corrupt, using seed"
                    );
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(
                    storage_key = config.collection_key.as_str(),
                    error = %err,
                    "Persisted collection unreadable, using seed"
                );
                None
            }
        };

        let (quotes, source) = match loaded {
            Some(quotes) => (quotes, CollectionSource::Persisted),
            None => (seed_collection(), CollectionSource::Seed),
        };

        let mut store = Self {
            quotes,
            source,
            config,
            local,
            session,
        };

        if store.source == CollectionSource::Persisted && !store.category_cache_is_current() {
            store.write_category_cache();
        }

        log_op_end!(
            "initialize",
            duration_ms = start.elapsed().as_millis() as u64,
            quote_count = store.quotes.len(),
            seeded = store.source == CollectionSource::Seed
        );
        store
    }

    /// The current collection, in insertion order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of quotes in the collection
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the collection is empty (possible after replacing with `[]`)
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Where the collection came from at initialization
    pub fn source(&self) -> CollectionSource {
        self.source
    }

    /// Storage keys in use
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ===== Mutations =====

    /// Append a quote built from caller input
    ///
    /// Both fields are trimmed. The collection is persisted before the
    /// in-memory copy changes, so a storage failure leaves it untouched.
    ///
    /// # Errors
    /// * `EmptyField` - If text or category is blank after trimming
    /// * `Storage` - If the collection cannot be persisted
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote> {
        let start = Instant::now();
        log_op_start!("add_quote");

        let result = self.add_inner(text, category);
        match &result {
            Ok(quote) => {
                log_op_end!(
                    "add_quote",
                    duration_ms = start.elapsed().as_millis() as u64,
                    category = quote.category.as_str(),
                    quote_count = self.quotes.len()
                );
            }
            Err(err) => {
                log_op_error!(
                    "add_quote",
                    err,
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }
        result
    }

    fn add_inner(&mut self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::parse(text, category)?;

        let mut next = Vec::with_capacity(self.quotes.len() + 1);
        next.extend_from_slice(&self.quotes);
        next.push(quote.clone());
        self.persist_collection(&next)?;

        self.quotes = next;
        self.source = CollectionSource::Persisted;
        self.write_category_cache();
        Ok(quote)
    }

    /// Replace the whole collection
    ///
    /// Every record is validated first and stored exactly as given; one
    /// record with a blank field rejects the call and the current
    /// collection stays as it was.
    ///
    /// # Errors
    /// * `InvalidRecord` - With the index of the first malformed record
    /// * `Storage` - If the new collection cannot be persisted
    pub fn replace_all(&mut self, quotes: Vec<Quote>) -> Result<()> {
        let start = Instant::now();
        log_op_start!("replace_all", quote_count = quotes.len());

        let result = self.replace_all_inner(quotes);
        match &result {
            Ok(()) => {
                log_op_end!(
                    "replace_all",
                    duration_ms = start.elapsed().as_millis() as u64,
                    quote_count = self.quotes.len(),
                    category_count = self.categories().len()
                );
            }
            Err(err) => {
                log_op_error!(
                    "replace_all",
                    err,
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }
        result
    }

    fn replace_all_inner(&mut self, quotes: Vec<Quote>) -> Result<()> {
        validation::validate_collection(&quotes)?;
        self.persist_collection(&quotes)?;

        self.quotes = quotes;
        self.source = CollectionSource::Persisted;
        self.write_category_cache();
        Ok(())
    }

    /// Replace the collection with the contents of an exported snapshot
    ///
    /// Returns the number of quotes imported.
    ///
    /// # Errors
    /// * `InvalidImportShape` - If the content is not a JSON array
    /// * `InvalidRecord` - If any element is malformed
    /// * `Storage` - If the new collection cannot be persisted
    pub fn import(&mut self, content: &str) -> Result<usize> {
        let quotes = match codec::decode_import(content) {
            Ok(quotes) => quotes,
            Err(err) => {
                log_op_error!("import", err, duration_ms = 0u64);
                return Err(err);
            }
        };
        let count = quotes.len();
        self.replace_all(quotes)?;
        Ok(count)
    }

    /// Read `reader` to completion, then import its content
    ///
    /// Nothing is replaced until all content is available.
    ///
    /// # Errors
    /// * `Io` - If the reader fails or yields invalid UTF-8
    /// * Any error of [`QuoteStore::import`]
    pub fn import_from_reader<R: Read>(&mut self, mut reader: R) -> Result<usize> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|err| QuoteBookError::Io {
                op: "read_import".to_string(),
                message: err.to_string(),
            })?;
        self.import(&content)
    }

    // ===== Queries =====

    /// Distinct categories in first-occurrence order
    ///
    /// Always derived from the collection; the persisted cache is never read.
    pub fn categories(&self) -> Vec<String> {
        queries::distinct_categories(&self.quotes)
    }

    /// Quotes filed under exactly `category`, in collection order
    pub fn filter_by_category(&self, category: &str) -> Vec<Quote> {
        queries::filter_by_category(&self.quotes, category)
    }

    /// Uniformly sample one quote filed under `category`
    pub fn random_from_category(&self, category: &str) -> Option<Quote> {
        self.random_from_category_with(category, &mut rand::thread_rng())
    }

    /// Like [`QuoteStore::random_from_category`] with a caller-supplied RNG
    pub fn random_from_category_with<R: Rng + ?Sized>(
        &self,
        category: &str,
        rng: &mut R,
    ) -> Option<Quote> {
        queries::pick_random(&self.quotes, category, rng)
    }

    /// Serialize the collection as pretty-printed JSON
    ///
    /// Independent of what is persisted.
    ///
    /// # Errors
    /// * `Serialization` - If encoding fails
    pub fn export_snapshot(&self) -> Result<String> {
        codec::encode_snapshot(&self.quotes)
    }

    // ===== Session state =====

    /// Remember the category the caller is filtering by
    ///
    /// A blank category clears the selection.
    ///
    /// # Errors
    /// * `Storage` - If the session capability cannot be written
    pub fn select_category(&mut self, category: &str) -> Result<()> {
        let category = category.trim();
        if category.is_empty() {
            self.session.remove(&self.config.selected_category_key)
        } else {
            self.session
                .set(&self.config.selected_category_key, category)
        }
    }

    /// The remembered filter category, if any
    pub fn selected_category(&self) -> Option<String> {
        match self.session.get(&self.config.selected_category_key) {
            Ok(value) => value.filter(|c| !c.trim().is_empty()),
            Err(err) => {
                tracing::warn!(error = %err, "Selected category unreadable");
                None
            }
        }
    }

    /// The remembered filter together with the quotes it selects
    ///
    /// Lets a binder re-apply the last filter when it starts up.
    pub fn restore_selection(&self) -> Option<(String, Vec<Quote>)> {
        self.selected_category().map(|category| {
            let quotes = self.filter_by_category(&category);
            (category, quotes)
        })
    }

    /// Remember the most recently shown quote
    ///
    /// # Errors
    /// * `Serialization` - If the quote cannot be encoded
    /// * `Storage` - If the session capability cannot be written
    pub fn record_last_viewed(&mut self, quote: &Quote) -> Result<()> {
        let raw = codec::encode_quote(quote)?;
        self.session.set(&self.config.last_viewed_key, &raw)
    }

    /// The most recently shown quote, if one was recorded this session
    ///
    /// An unreadable or corrupt value is treated as absent.
    pub fn last_viewed(&self) -> Option<Quote> {
        let raw = match self.session.get(&self.config.last_viewed_key) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(error = %err, "Last viewed quote unreadable");
                return None;
            }
        };
        codec::decode_quote(&self.config.last_viewed_key, &raw)
            .map_err(|err| tracing::warn!(error = %err, "Discarding corrupt last viewed quote"))
            .ok()
    }

    // ===== Lifecycle =====

    /// Forget all session-scoped state
    ///
    /// The collection and its persistence are unaffected.
    ///
    /// # Errors
    /// * `Storage` - If the session capability cannot be cleared
    pub fn end_session(&mut self) -> Result<()> {
        tracing::debug!("Ending session");
        self.session.clear()
    }

    /// End the session and release both capabilities
    ///
    /// # Errors
    /// * `Storage` - If the session capability cannot be cleared
    pub fn teardown(mut self) -> Result<()> {
        self.end_session()
    }

    // ===== Persistence helpers =====

    fn persist_collection(&mut self, quotes: &[Quote]) -> Result<()> {
        let raw = codec::encode_persisted(quotes)?;
        self.local.set(&self.config.collection_key, &raw)
    }

    fn category_cache_is_current(&self) -> bool {
        match self.local.get(&self.config.categories_key) {
            Ok(Some(raw)) => codec::decode_categories(&self.config.categories_key, &raw)
                .map(|cached| cached == self.categories())
                .unwrap_or(false),
            _ => false,
        }
    }

    /// Best-effort: the cache is derivable, so a failed write is only logged
    fn write_category_cache(&mut self) {
        let result = codec::encode_categories(&self.categories())
            .and_then(|raw| self.local.set(&self.config.categories_key, &raw));
        if let Err(err) = result {
            tracing::warn!(
                storage_key = self.config.categories_key.as_str(),
                error = %err,
                "Failed to refresh category cache"
            );
        }
    }
}

impl std::fmt::Debug for QuoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteStore")
            .field("quotes", &self.quotes)
            .field("source", &self.source)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
