//! File-backed session store.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::{TimeDelta, Utc};

use super::{SessionEntry, SessionStore, SessionStoreError};

/// Session store keeping all entries in a single JSON "jar" file.
///
/// Expired entries are skipped on read and pruned whenever the jar is
/// rewritten. A jar that fails to parse is treated as empty - a corrupt
/// session means "not logged in", never an error surfaced to the caller.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by the jar file at `path`. The file is
    /// created lazily on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_jar(&self) -> Result<HashMap<String, SessionEntry>, SessionStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(SessionStoreError::Io(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(jar) => Ok(jar),
            Err(e) => {
                tracing::debug!("session jar unreadable, treating as empty: {e}");
                Ok(HashMap::new())
            }
        }
    }

    fn save_jar(&self, jar: &HashMap<String, SessionEntry>) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write to a temp file and move it into place, like the record
        // store, so a crash mid-write cannot leave a truncated jar.
        let raw = serde_json::to_string(jar)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn set(&self, key: &str, value: &str, ttl: TimeDelta) -> Result<(), SessionStoreError> {
        let now = Utc::now();
        let mut jar = self.load_jar()?;
        jar.retain(|_, entry| !entry.is_expired(now));
        jar.insert(
            key.to_owned(),
            SessionEntry {
                value: value.to_owned(),
                expires_at: now + ttl,
            },
        );
        self.save_jar(&jar)
    }

    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let now = Utc::now();
        let jar = self.load_jar()?;
        Ok(jar
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value.clone()))
    }

    fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        let now = Utc::now();
        let mut jar = self.load_jar()?;
        jar.remove(key);
        jar.retain(|_, entry| !entry.is_expired(now));
        self.save_jar(&jar)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileSessionStore {
        FileSessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .set("admin_token", "admin_authenticated", TimeDelta::hours(24))
            .unwrap();
        assert_eq!(
            store.get("admin_token").unwrap().as_deref(),
            Some("admin_authenticated")
        );
    }

    #[test]
    fn test_expired_entry_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .set("admin_token", "admin_authenticated", TimeDelta::hours(-1))
            .unwrap();
        assert!(store.get("admin_token").unwrap().is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("admin_user", "{}", TimeDelta::hours(24)).unwrap();
        store.remove("admin_user").unwrap();
        store.remove("admin_user").unwrap();
        assert!(store.get("admin_user").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_jar_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(store.get("admin_token").unwrap().is_none());
    }

    #[test]
    fn test_write_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .set("admin_token", "admin_authenticated", TimeDelta::hours(24))
            .unwrap();

        assert!(dir.path().join("session.json").exists());
        assert!(!dir.path().join("session.json.tmp").exists());
    }

    #[test]
    fn test_entries_survive_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        FileSessionStore::new(&path)
            .set("admin_token", "admin_authenticated", TimeDelta::hours(24))
            .unwrap();

        let reopened = FileSessionStore::new(&path);
        assert!(reopened.get("admin_token").unwrap().is_some());
    }
}
