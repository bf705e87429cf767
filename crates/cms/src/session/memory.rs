//! In-memory session store for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{TimeDelta, Utc};

use super::{SessionEntry, SessionStore, SessionStoreError};

/// Session store backed by a shared in-memory map.
///
/// Clones share the same map, mirroring how session cookies are shared
/// across page loads in one browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, SessionEntry>>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, key: &str, value: &str, ttl: TimeDelta) -> Result<(), SessionStoreError> {
        self.entries.borrow_mut().insert(
            key.to_owned(),
            SessionEntry {
                value: value.to_owned(),
                expires_at: Utc::now() + ttl,
            },
        );
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let now = Utc::now();
        Ok(self
            .entries
            .borrow()
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value.clone()))
    }

    fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
