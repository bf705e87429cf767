//! Integration tests for Portico.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p portico-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_session` - Login, logout, session persistence, password rotation
//! - `content_store` - Record durability across instances
//! - `defaults` - Built-in defaults and corrupt-storage recovery
//!
//! Every test builds its services on a fresh temporary data directory,
//! so tests are independent and safe to run in parallel.

#![forbid(unsafe_code)]

use portico_cms::config::AdminBootstrap;
use portico_cms::session::FileSessionStore;
use portico_cms::store::FileRecordStore;
use portico_cms::{AuthService, ContentStore};
use secrecy::SecretString;
use tempfile::TempDir;

/// A throwaway data directory plus factories for services rooted in it.
///
/// Creating multiple services from one context simulates the admin
/// surface being reopened against the same durable state.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create a context backed by a fresh temporary directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Path to the record directory inside the context.
    #[must_use]
    pub fn records_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("records")
    }

    /// Path to the session jar inside the context.
    #[must_use]
    pub fn session_path(&self) -> std::path::PathBuf {
        self.dir.path().join("session.json")
    }

    /// File-backed record store rooted in the context directory.
    #[must_use]
    pub fn record_store(&self) -> FileRecordStore {
        FileRecordStore::new(self.records_dir())
    }

    /// File-backed session store rooted in the context directory.
    #[must_use]
    pub fn session_store(&self) -> FileSessionStore {
        FileSessionStore::new(self.session_path())
    }

    /// A fresh authentication service over the context's stores.
    #[must_use]
    pub fn auth(&self) -> AuthService {
        AuthService::new(
            Box::new(self.record_store()),
            Box::new(self.session_store()),
            bootstrap(),
        )
    }

    /// A fresh content store over the context's record store.
    #[must_use]
    pub fn content(&self) -> ContentStore {
        ContentStore::new(Box::new(self.record_store()))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The bootstrap credentials every test context starts from.
#[must_use]
pub fn bootstrap() -> AdminBootstrap {
    AdminBootstrap {
        username: "admin".to_owned(),
        password: SecretString::from("peterl123"),
    }
}
