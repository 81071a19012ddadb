use std::cell::Cell;
use std::rc::Rc;

use quotebook_core::{KeyValueStore, MemoryKv, Quote, QuoteBookError, QuoteStore, Result};

/// Store over fresh in-memory capabilities, returning handles to both
#[allow(dead_code)]
pub fn new_store() -> (QuoteStore, MemoryKv, MemoryKv) {
    let local = MemoryKv::new();
    let session = MemoryKv::new();
    let store = QuoteStore::initialize(Box::new(local.clone()), Box::new(session.clone()));
    (store, local, session)
}

/// Store whose collection is exactly `quotes`
#[allow(dead_code)]
pub fn store_with(quotes: &[(&str, &str)]) -> QuoteStore {
    let (mut store, _, _) = new_store();
    store
        .replace_all(quotes.iter().map(|(t, c)| Quote::new(*t, *c)).collect())
        .unwrap();
    store
}

/// The `[{a,X},{b,Y},{c,X}]` fixture
#[allow(dead_code)]
pub fn xyx_store() -> QuoteStore {
    store_with(&[("a", "X"), ("b", "Y"), ("c", "X")])
}

/// Capability that fails writes while its switch is on
///
/// Reads delegate to the wrapped `MemoryKv`.
#[allow(dead_code)]
#[derive(Clone)]
pub struct FlakyKv {
    inner: MemoryKv,
    fail_writes: Rc<Cell<bool>>,
}

#[allow(dead_code)]
impl FlakyKv {
    pub fn new(inner: MemoryKv) -> Self {
        Self {
            inner,
            fail_writes: Rc::new(Cell::new(false)),
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn check(&self, op: &str) -> Result<()> {
        if self.fail_writes.get() {
            Err(QuoteBookError::storage(op, "simulated write failure"))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for FlakyKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check("set")?;
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check("remove")?;
        self.inner.remove(key)
    }

    fn clear(&mut self) -> Result<()> {
        self.check("clear")?;
        self.inner.clear()
    }
}

/// Capability whose reads always fail
#[allow(dead_code)]
pub struct UnreadableKv;

impl KeyValueStore for UnreadableKv {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(QuoteBookError::storage("get", "backend offline"))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}
