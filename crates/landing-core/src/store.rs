//! Key-Value Persistence
//!
//! The landing page persists exactly one key across sessions. The
//! store is abstract so the browser build can back it with
//! `localStorage` while tests and the server use memory.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::Result;

/// Minimal client-local persistence interface
pub trait KeyValueStore {
    /// Read a value; absent keys are `Ok(None)`, never an error
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, overwriting any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store (for tests and the server process)
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.into(), value.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("user").unwrap(), None);

        store.set("user", r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(
            store.get("user").unwrap().as_deref(),
            Some(r#"{"email":"a@b.co"}"#)
        );
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::new();
        store.set("user", "one").unwrap();
        store.set("user", "two").unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some("two"));
    }
}
