//! Key-value persistence capability
//!
//! The store never touches a storage medium directly. It is handed two
//! `KeyValueStore` implementations at initialization: a long-lived one for
//! the collection and a session-scoped one for selection state.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::errors::Result;

/// String-keyed, string-valued storage
///
/// Implementations are synchronous: a call completes before it returns.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    /// Returns `Storage` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `Storage` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`, if any
    ///
    /// # Errors
    /// Returns `Storage` if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Remove every value
    ///
    /// # Errors
    /// Returns `Storage` if the backend cannot be written.
    fn clear(&mut self) -> Result<()>;
}

/// In-memory key-value store
///
/// Clones share the same entries, so a test can keep a handle and inspect
/// what a store wrote, or initialize a second store over the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryKv {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Rc::new(RefCell::new(map)),
        }
    }

    /// Raw value under `key`, bypassing the trait
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.peek(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}
