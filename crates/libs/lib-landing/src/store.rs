//! Visit store abstraction
//!
//! The landing page persists exactly one flag: whether this browser has already
//! seen the intro. Hosts provide a [`VisitStore`]; the browser build wraps
//! `window.localStorage`, tests use [`MemoryStore`] or [`UnavailableStore`].

use std::collections::HashMap;

use crate::error::StoreError;

/// Key-value storage for the persisted intro marker.
pub trait VisitStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store. Counts writes so callers can check idempotence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    /// Store that already holds `key = value`, as on a returning visit.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries, writes: 0 }
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl VisitStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Store for hosts without persistent storage. Every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl VisitStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

/// Read a marker, treating read errors and empty values as absent.
pub fn marker_present<S: VisitStore + ?Sized>(store: &S, key: &str) -> bool {
    match store.get(key) {
        Ok(Some(value)) => !value.is_empty(),
        Ok(None) => false,
        Err(e) => {
            log::debug!("visit marker read failed, treating as first visit: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("1"));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_marker_present() {
        assert!(marker_present(&MemoryStore::with_entry("k", "1"), "k"));
        assert!(!marker_present(&MemoryStore::with_entry("k", ""), "k"));
        assert!(!marker_present(&MemoryStore::default(), "k"));
        assert!(!marker_present(&UnavailableStore, "k"));
    }
}
