//! Browser Storage
//!
//! `KeyValueStorage` over `window.localStorage`, falling back to memory
//! when the page has no usable local storage (private mode, sandboxed
//! iframe).

use task_store::{DomainError, DomainResult, KeyValueStorage, MemoryStorage};
use wasm_bindgen::JsValue;

pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    /// Use `localStorage` when available
    pub fn detect() -> Self {
        let local = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten());
        match local {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                tracing::warn!("localStorage unavailable, tasks will not persist");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

fn js_error(op: &str, err: JsValue) -> DomainError {
    DomainError::Storage(format!("{} failed: {:?}", op, err))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        match self {
            BrowserStorage::Local(storage) => {
                storage.get_item(key).map_err(|e| js_error("getItem", e))
            }
            BrowserStorage::Memory(storage) => storage.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        match self {
            BrowserStorage::Local(storage) => {
                storage.set_item(key, value).map_err(|e| js_error("setItem", e))
            }
            BrowserStorage::Memory(storage) => storage.set_item(key, value),
        }
    }
}
