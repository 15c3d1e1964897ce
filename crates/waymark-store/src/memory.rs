//! In-memory storage implementation for development and testing.
//!
//! This implementation uses `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. The application itself uses the file-backed
//! adapter.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use waymark_core::ports::KeyValueStore;
use waymark_core::Result;

/// In-memory implementation of `KeyValueStore`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_of_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("coordinates").unwrap(), None);
    }

    #[test]
    fn put_overwrites_prior_value() {
        let store = MemoryStore::new();
        store.put("mapType", "\"osm\"").unwrap();
        store.put("mapType", "\"dark\"").unwrap();
        assert_eq!(store.get("mapType").unwrap().as_deref(), Some("\"dark\""));
        assert_eq!(store.len(), 1);
    }
}
