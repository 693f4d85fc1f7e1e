use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

use crate::KeyValueStore;
use crate::config::CountdownConfig;
use crate::record::CountdownRecord;

/// Persistence adapter: one JSON record under one key.
///
/// Backend failures are logged and swallowed; callers never see them.
#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn with_config(backend: S, config: &CountdownConfig) -> Self {
        Self::new(backend, config.storage_key.clone())
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// The stored record, or `None` when absent, unreadable or malformed.
    #[must_use]
    pub fn load(&self) -> Option<CountdownRecord> {
        match self.backend.get(&self.key) {
            Ok(Some(raw)) => CountdownRecord::decode(&raw),
            Ok(None) => None,
            Err(err) => {
                log::warn!("Failed to read {}: {err}", self.key);
                None
            }
        }
    }

    /// Overwrite the stored record.
    pub fn save(&self, record: &CountdownRecord) {
        let raw = match record.encode() {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("Failed to encode countdown record: {err}");
                return;
            }
        };
        if let Err(err) = self.backend.set(&self.key, &raw) {
            log::warn!("Failed to write {}: {err}", self.key);
        }
    }

    pub fn remove(&self) {
        if let Err(err) = self.backend.remove(&self.key) {
            log::warn!("Failed to remove {}: {err}", self.key);
        }
    }
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing record encoding.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Whether both handles point at the same map.
    #[must_use]
    pub fn shares_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.insert_raw(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
