//! Durable record storage port.
//!
//! The CMS persists each record as an independent JSON document under a
//! well-known key. The port is deliberately dumb: read, write, remove.
//! There is no batching, no transactions, and no cross-key invariants -
//! every mutation re-serializes the whole owning record.

mod file;
mod memory;

pub use file::FileRecordStore;
pub use memory::MemoryRecordStore;

/// Storage keys for durable records.
pub mod keys {
    /// Business info singleton.
    pub const BUSINESS_INFO: &str = "businessInfo";

    /// Site content (hero, services, testimonials).
    pub const CONTENT: &str = "content";

    /// CMS user list.
    pub const USERS: &str = "users";

    /// Media item list.
    pub const MEDIA: &str = "media";

    /// Settings singleton.
    pub const SETTINGS: &str = "settings";

    /// Operator credential record.
    pub const ADMIN_CREDENTIALS: &str = "admin_credentials";
}

/// Errors that can occur during record storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable key-value store of JSON documents.
///
/// Implementations take `&self`: the file-backed store keeps its state on
/// disk, and the in-memory test store uses interior mutability. The CMS
/// runs single-caller, so no synchronization is required of
/// implementations.
pub trait RecordStore {
    /// Read the serialized record stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing storage cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the serialized record under `key`, replacing any previous
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing storage cannot be
    /// written.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the record stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backing storage cannot be
    /// written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
