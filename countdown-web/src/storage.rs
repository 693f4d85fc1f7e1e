//! Browser `localStorage` as a [`KeyValueStore`].

use countdown_core::{KeyValueStore, MemoryStore};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrowserStorageError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("Storage error: {0}")]
    Js(String),
}

/// The page's `localStorage`. Outside a browser every call reports
/// [`BrowserStorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
fn handle() -> Result<web_sys::Storage, BrowserStorageError> {
    crate::dom::local_storage().map_err(|_| BrowserStorageError::Unavailable)
}

#[cfg(not(target_arch = "wasm32"))]
fn handle() -> Result<web_sys::Storage, BrowserStorageError> {
    Err(BrowserStorageError::Unavailable)
}

fn js_error(err: &wasm_bindgen::JsValue) -> BrowserStorageError {
    BrowserStorageError::Js(crate::dom::js_error_message(err))
}

impl KeyValueStore for BrowserStorage {
    type Error = BrowserStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        handle()?.get_item(key).map_err(|e| js_error(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        handle()?.set_item(key, value).map_err(|e| js_error(&e))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        handle()?.remove_item(key).map_err(|e| js_error(&e))
    }
}

/// Store the widget persists through: the browser by default, memory when
/// a host (or a test) supplies one.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    Browser(BrowserStorage),
    Memory(MemoryStore),
}

impl Default for StorageBackend {
    fn default() -> Self {
        Self::Browser(BrowserStorage)
    }
}

impl PartialEq for StorageBackend {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Browser(_), Self::Browser(_)) => true,
            (Self::Memory(a), Self::Memory(b)) => a.shares_with(b),
            _ => false,
        }
    }
}

impl From<MemoryStore> for StorageBackend {
    fn from(store: MemoryStore) -> Self {
        Self::Memory(store)
    }
}

impl KeyValueStore for StorageBackend {
    type Error = BrowserStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match self {
            Self::Browser(store) => store.get(key),
            Self::Memory(store) => store.get(key).map_err(|never| match never {}),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        match self {
            Self::Browser(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value).map_err(|never| match never {}),
        }
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        match self {
            Self::Browser(store) => store.remove(key),
            Self::Memory(store) => store.remove(key).map_err(|never| match never {}),
        }
    }
}
