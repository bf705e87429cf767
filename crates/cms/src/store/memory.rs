//! In-memory record store for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{RecordStore, StoreError};

/// Record store backed by a shared in-memory map.
///
/// Clones share the same map, which lets a test hand "the same storage"
/// to several service instances the way two page loads share one browser
/// profile. Not `Sync`; the CMS is single-caller.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryRecordStore::new();
        let alias = store.clone();

        store.write("content", "{}").unwrap();
        assert_eq!(alias.read("content").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let store = MemoryRecordStore::new();
        assert!(store.remove("nope").is_ok());
    }
}
