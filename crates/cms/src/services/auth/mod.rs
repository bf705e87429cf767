//! Authentication service.
//!
//! Owns all authentication state: the existing-session check at startup,
//! login against the stored (hashed) credential record, logout, and
//! password rotation. No other component reads or writes credentials.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{TimeDelta, Utc};
use secrecy::ExposeSecret;

use crate::config::AdminBootstrap;
use crate::models::{Credentials, CurrentUser};
use crate::session::{SessionStore, keys as session_keys};
use crate::store::{RecordStore, StoreError, keys};

/// Fixed session lifetime: 24 hours of wall-clock time, enforced by the
/// session store on read.
const SESSION_TTL_HOURS: i64 = 24;

/// Opaque value stored under the session marker key.
const SESSION_MARKER: &str = "admin_authenticated";

/// Authentication service.
///
/// Constructed once per application session. Construction performs the
/// existing-session check, so the service is never observed in a
/// "still loading" state.
pub struct AuthService {
    records: Box<dyn RecordStore>,
    sessions: Box<dyn SessionStore>,
    bootstrap: AdminBootstrap,
    authenticated: bool,
    current_user: Option<CurrentUser>,
}

impl AuthService {
    /// Create the service and restore any existing session.
    ///
    /// Session restore never fails the caller: a missing, expired, or
    /// unreadable session simply leaves the service unauthenticated.
    #[must_use]
    pub fn new(
        records: Box<dyn RecordStore>,
        sessions: Box<dyn SessionStore>,
        bootstrap: AdminBootstrap,
    ) -> Self {
        let mut service = Self {
            records,
            sessions,
            bootstrap,
            authenticated: false,
            current_user: None,
        };
        service.check_existing_session();
        service
    }

    /// Whether an operator session is active.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Snapshot of the logged-in operator, when authenticated.
    #[must_use]
    pub const fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    /// Restore authentication state from the session store.
    ///
    /// Both the marker token and a parseable operator snapshot must be
    /// present and unexpired. Any read or parse error is swallowed and
    /// treated as "no session".
    fn check_existing_session(&mut self) {
        let token = self.sessions.get(session_keys::ADMIN_TOKEN).ok().flatten();
        let user_data = self.sessions.get(session_keys::ADMIN_USER).ok().flatten();

        if let (Some(_), Some(raw)) = (token, user_data) {
            match serde_json::from_str::<CurrentUser>(&raw) {
                Ok(user) => {
                    self.authenticated = true;
                    self.current_user = Some(user);
                }
                Err(e) => {
                    tracing::debug!("stored session snapshot unreadable, ignoring: {e}");
                }
            }
        }
    }

    /// Log in with username and password.
    ///
    /// On success a 24-hour session marker and operator snapshot are
    /// written to the session store and the in-memory state flips to
    /// authenticated.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on a wrong username or
    /// password, leaving state unchanged. Internal failures (storage
    /// unavailable, corrupt credential record) return
    /// [`AuthError::LoginFailed`].
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let credentials = self.load_credentials().map_err(|e| {
            tracing::warn!("could not load credential record: {e}");
            AuthError::LoginFailed
        })?;

        let password_matches =
            verify_password(password, &credentials.password_hash).map_err(|e| {
                tracing::warn!("stored password hash unreadable: {e}");
                AuthError::LoginFailed
            })?;

        if username != credentials.username || !password_matches {
            return Err(AuthError::InvalidCredentials);
        }

        let user = CurrentUser::at_login(username, Utc::now());
        let snapshot = serde_json::to_string(&user).map_err(|e| {
            tracing::warn!("could not serialize session snapshot: {e}");
            AuthError::LoginFailed
        })?;

        let ttl = TimeDelta::hours(SESSION_TTL_HOURS);
        self.sessions
            .set(session_keys::ADMIN_TOKEN, SESSION_MARKER, ttl)
            .and_then(|()| self.sessions.set(session_keys::ADMIN_USER, &snapshot, ttl))
            .map_err(|e| {
                tracing::warn!("could not write session entries: {e}");
                AuthError::LoginFailed
            })?;

        self.authenticated = true;
        self.current_user = Some(user);
        Ok(())
    }

    /// Clear the session and reset in-memory state.
    ///
    /// Idempotent: logging out while already logged out is a no-op.
    /// Storage errors are logged, not surfaced - the in-memory state is
    /// reset regardless.
    pub fn logout(&mut self) {
        if let Err(e) = self.sessions.remove(session_keys::ADMIN_TOKEN) {
            tracing::warn!("could not remove session marker: {e}");
        }
        if let Err(e) = self.sessions.remove(session_keys::ADMIN_USER) {
            tracing::warn!("could not remove session snapshot: {e}");
        }
        self.authenticated = false;
        self.current_user = None;
    }

    /// Rotate the operator password.
    ///
    /// Verifies `current_password` against the stored hash, then hashes
    /// `new_password` and persists a new credential record with the
    /// username unchanged. The live session is not invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CurrentPasswordIncorrect`] on a mismatch.
    /// Internal failures return [`AuthError::PasswordChangeFailed`].
    pub fn change_password(
        &mut self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let credentials = self.load_credentials().map_err(|e| {
            tracing::warn!("could not load credential record: {e}");
            AuthError::PasswordChangeFailed
        })?;

        let current_matches =
            verify_password(current_password, &credentials.password_hash).map_err(|e| {
                tracing::warn!("stored password hash unreadable: {e}");
                AuthError::PasswordChangeFailed
            })?;

        if !current_matches {
            return Err(AuthError::CurrentPasswordIncorrect);
        }

        let rotated = Credentials {
            username: credentials.username,
            password_hash: hash_password(new_password).map_err(|e| {
                tracing::warn!("could not hash new password: {e}");
                AuthError::PasswordChangeFailed
            })?,
        };

        let raw = serde_json::to_string(&rotated).map_err(|e| {
            tracing::warn!("could not serialize credential record: {e}");
            AuthError::PasswordChangeFailed
        })?;
        self.records
            .write(keys::ADMIN_CREDENTIALS, &raw)
            .map_err(|e| {
                tracing::warn!("could not persist credential record: {e}");
                AuthError::PasswordChangeFailed
            })?;

        Ok(())
    }

    /// Load the stored credential record, falling back to the bootstrap
    /// credentials (hashed on the fly) when none has been persisted yet.
    fn load_credentials(&self) -> Result<Credentials, CredentialLoadError> {
        match self.records.read(keys::ADMIN_CREDENTIALS)? {
            Some(raw) => Ok(serde_json::from_str(&raw).map_err(StoreError::Serialization)?),
            None => Ok(Credentials {
                username: self.bootstrap.username.clone(),
                password_hash: hash_password(self.bootstrap.password.expose_secret())?,
            }),
        }
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("authenticated", &self.authenticated)
            .field("current_user", &self.current_user)
            .finish_non_exhaustive()
    }
}

/// Internal error while producing a credential record.
#[derive(Debug, thiserror::Error)]
enum CredentialLoadError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("password hashing error: {0}")]
    Hash(#[from] argon2::password_hash::Error),
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Verify a password against a stored hash.
///
/// A mismatch is `Ok(false)`; only an unparseable hash is an error.
fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use crate::store::MemoryRecordStore;
    use secrecy::SecretString;

    fn bootstrap() -> AdminBootstrap {
        AdminBootstrap {
            username: "admin".to_owned(),
            password: SecretString::from("peterl123"),
        }
    }

    fn service_with(records: MemoryRecordStore, sessions: MemorySessionStore) -> AuthService {
        AuthService::new(Box::new(records), Box::new(sessions), bootstrap())
    }

    #[test]
    fn test_login_with_default_credentials() {
        let mut auth = service_with(MemoryRecordStore::new(), MemorySessionStore::new());
        assert!(!auth.is_authenticated());

        auth.login("admin", "peterl123").unwrap();
        assert!(auth.is_authenticated());
        let user = auth.current_user().unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, "admin");
    }

    #[test]
    fn test_login_wrong_password() {
        let mut auth = service_with(MemoryRecordStore::new(), MemorySessionStore::new());
        let err = auth.login("admin", "wrong").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(!auth.is_authenticated());
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_login_wrong_username() {
        let mut auth = service_with(MemoryRecordStore::new(), MemorySessionStore::new());
        let err = auth.login("root", "peterl123").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn test_session_restored_by_new_instance() {
        let records = MemoryRecordStore::new();
        let sessions = MemorySessionStore::new();

        let mut auth = service_with(records.clone(), sessions.clone());
        auth.login("admin", "peterl123").unwrap();

        let restored = service_with(records, sessions);
        assert!(restored.is_authenticated());
        assert_eq!(restored.current_user().unwrap().username, "admin");
    }

    #[test]
    fn test_logout_clears_session() {
        let records = MemoryRecordStore::new();
        let sessions = MemorySessionStore::new();

        let mut auth = service_with(records.clone(), sessions.clone());
        auth.login("admin", "peterl123").unwrap();
        auth.logout();
        assert!(!auth.is_authenticated());

        // A fresh session check also sees nothing.
        let fresh = service_with(records, sessions);
        assert!(!fresh.is_authenticated());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut auth = service_with(MemoryRecordStore::new(), MemorySessionStore::new());
        auth.logout();
        auth.logout();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_change_password_then_login() {
        let records = MemoryRecordStore::new();
        let sessions = MemorySessionStore::new();

        let mut auth = service_with(records.clone(), sessions.clone());
        auth.login("admin", "peterl123").unwrap();
        auth.change_password("peterl123", "new-password-1").unwrap();

        // Rotation does not invalidate the live session.
        assert!(auth.is_authenticated());

        let mut fresh = service_with(records.clone(), MemorySessionStore::new());
        assert_eq!(
            fresh.login("admin", "peterl123").unwrap_err(),
            AuthError::InvalidCredentials
        );
        fresh.login("admin", "new-password-1").unwrap();
        assert!(fresh.is_authenticated());
    }

    #[test]
    fn test_change_password_wrong_current() {
        let mut auth = service_with(MemoryRecordStore::new(), MemorySessionStore::new());
        let err = auth.change_password("wrong", "whatever").unwrap_err();
        assert_eq!(err, AuthError::CurrentPasswordIncorrect);
    }

    #[test]
    fn test_corrupt_credential_record_fails_generically() {
        let records = MemoryRecordStore::new();
        records
            .write(keys::ADMIN_CREDENTIALS, "not json")
            .unwrap();

        let mut auth = service_with(records, MemorySessionStore::new());
        assert_eq!(
            auth.login("admin", "peterl123").unwrap_err(),
            AuthError::LoginFailed
        );
    }

    #[test]
    fn test_corrupt_session_snapshot_is_ignored() {
        let sessions = MemorySessionStore::new();
        sessions
            .set(session_keys::ADMIN_TOKEN, SESSION_MARKER, TimeDelta::hours(1))
            .unwrap();
        sessions
            .set(session_keys::ADMIN_USER, "{broken", TimeDelta::hours(1))
            .unwrap();

        let auth = service_with(MemoryRecordStore::new(), sessions);
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            AuthError::CurrentPasswordIncorrect.to_string(),
            "Current password is incorrect"
        );
        assert_eq!(AuthError::LoginFailed.to_string(), "Login failed");
    }
}
