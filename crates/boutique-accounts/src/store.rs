//! Opaque key-value storage.
//!
//! The storefront persists accounts in browser storage; this trait models
//! that surface as string get/set/remove so the service layer can run
//! against any backing.

use std::collections::HashMap;
use std::sync::Mutex;

/// Store key holding the JSON user list.
pub const USERS_KEY: &str = "users";

/// Store key holding the signed-in user's record.
pub const CURRENT_USER_KEY: &str = "current_user";

/// A string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Get a value, `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a value.
    fn set(&self, key: &str, value: String);

    /// Remove a value.
    fn remove(&self, key: &str);
}

/// In-process store backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "v".to_string());
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.remove("k");
        assert!(store.get("k").is_none());
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "a".to_string());
        store.set("k", "b".to_string());
        assert_eq!(store.get("k").as_deref(), Some("b"));
    }
}
