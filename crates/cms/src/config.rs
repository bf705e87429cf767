//! CMS configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PORTICO_DATA_DIR` - Directory holding records and the session jar
//!   (default: `.portico`)
//! - `PORTICO_ADMIN_USER` - Bootstrap operator username (default: `admin`)
//! - `PORTICO_ADMIN_PASSWORD` - Bootstrap operator password, used only
//!   until a rotated credential record has been persisted
//!
//! The bootstrap password is kept as plaintext configuration and hashed
//! at runtime; no password hash is embedded in source.

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use crate::session::FileSessionStore;
use crate::store::FileRecordStore;

const DEFAULT_DATA_DIR: &str = ".portico";
const DEFAULT_ADMIN_USER: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "peterl123";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Bootstrap operator credentials.
///
/// Used only when no rotated credential record exists in durable
/// storage.
#[derive(Clone)]
pub struct AdminBootstrap {
    /// Operator username.
    pub username: String,
    /// Operator password (hashed on first use).
    pub password: SecretString,
}

impl std::fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// CMS application configuration.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Directory holding the record files and session jar.
    pub data_dir: PathBuf,
    /// Bootstrap operator credentials.
    pub admin: AdminBootstrap,
}

impl CmsConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    /// Every variable has a default, so loading cannot fail today; the
    /// `Result` keeps the signature stable for stricter validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("PORTICO_DATA_DIR", DEFAULT_DATA_DIR));
        let admin = AdminBootstrap {
            username: get_env_or_default("PORTICO_ADMIN_USER", DEFAULT_ADMIN_USER),
            password: SecretString::from(get_env_or_default(
                "PORTICO_ADMIN_PASSWORD",
                DEFAULT_ADMIN_PASSWORD,
            )),
        };

        Ok(Self { data_dir, admin })
    }

    /// File-backed record store rooted under the data directory.
    #[must_use]
    pub fn record_store(&self) -> FileRecordStore {
        FileRecordStore::new(self.data_dir.join("records"))
    }

    /// File-backed session store under the data directory.
    #[must_use]
    pub fn session_store(&self) -> FileSessionStore {
        FileSessionStore::new(self.data_dir.join("session.json"))
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
