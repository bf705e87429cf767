//! File-backed record store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{RecordStore, StoreError};

/// Record store keeping one JSON file per key under a root directory.
///
/// Writes go to a temporary file first and are moved into place, so a
/// crash mid-write leaves the previous document intact rather than a
/// truncated one.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    root: PathBuf,
}

impl FileRecordStore {
    /// Create a store rooted at `root`. The directory is created lazily
    /// on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl RecordStore for FileRecordStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;

        let path = self.path_for(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileRecordStore::new(dir.path());
        assert!(store.read("businessInfo").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileRecordStore::new(dir.path());

        store.write("settings", r#"{"theme":"light"}"#).unwrap();
        assert_eq!(
            store.read("settings").unwrap().as_deref(),
            Some(r#"{"theme":"light"}"#)
        );
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileRecordStore::new(dir.path());

        store.write("content", "1").unwrap();
        store.write("content", "2").unwrap();
        assert_eq!(store.read("content").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileRecordStore::new(dir.path());

        store.write("media", "[]").unwrap();
        store.remove("media").unwrap();
        store.remove("media").unwrap();
        assert!(store.read("media").unwrap().is_none());
    }

    #[test]
    fn test_no_leftover_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileRecordStore::new(dir.path());

        store.write("users", "[]").unwrap();
        assert!(!dir.path().join("users.json.tmp").exists());
    }
}
