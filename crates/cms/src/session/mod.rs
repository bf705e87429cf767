//! Session marker storage port.
//!
//! Models the cookie store of the original admin surface: short-lived
//! string entries with a fixed wall-clock expiry, read back as absent
//! once expired. The CMS never checks expiry itself - the store enforces
//! it on read, the way a browser drops an expired cookie.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Keys for session marker entries.
pub mod keys {
    /// Opaque presence flag proving an authenticated session.
    pub const ADMIN_TOKEN: &str = "admin_token";

    /// JSON-serialized snapshot of the logged-in operator.
    pub const ADMIN_USER: &str = "admin_user";
}

/// Errors that can occur during session storage operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session jar could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A stored session entry: value plus absolute expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntry {
    /// The stored value.
    pub value: String,
    /// When the entry stops being readable.
    pub expires_at: DateTime<Utc>,
}

impl SessionEntry {
    /// Whether this entry has passed its expiry.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Expiring session marker store.
pub trait SessionStore {
    /// Store `value` under `key` with the given time-to-live, replacing
    /// any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Io`] if the backing storage cannot
    /// be written.
    fn set(&self, key: &str, value: &str, ttl: TimeDelta) -> Result<(), SessionStoreError>;

    /// Read the value stored under `key`.
    ///
    /// Expired or absent entries read as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Io`] if the backing storage cannot
    /// be read.
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    /// Remove the entry stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Io`] if the backing storage cannot
    /// be written.
    fn remove(&self, key: &str) -> Result<(), SessionStoreError>;
}
