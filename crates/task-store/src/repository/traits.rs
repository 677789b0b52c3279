//! Repository Layer - Core Traits
//!
//! Abstract string key-value store. The browser's `localStorage` is one
//! implementation, `MemoryStorage` another.

use crate::domain::DomainResult;

/// String key-value storage backend
///
/// Methods take `&self`: backends are handles onto storage owned elsewhere.
pub trait KeyValueStorage {
    /// Read the value under `key`; `Ok(None)` when absent
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;
}
