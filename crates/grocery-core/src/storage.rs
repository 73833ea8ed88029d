//! Key-Value Store Contract
//!
//! Mirrors the shape of `window.localStorage`: string keys, string values.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// Minimal persistent string store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one record
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Raw value, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Number of successful `set_item` calls
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);

        store.set_item("k", "v").unwrap();

        assert_eq!(store.get_item("k").unwrap(), Some("v".to_string()));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_clones_share_items() {
        let store = MemoryStore::with_item("k", "v");
        let other = store.clone();

        other.set_item("k", "w").unwrap();

        assert_eq!(store.raw("k"), Some("w".to_string()));
    }
}
