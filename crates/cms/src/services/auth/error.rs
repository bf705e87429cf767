//! Authentication error types.

use thiserror::Error;

/// Errors returned by authentication operations.
///
/// Every operation on the session manager is total: it either succeeds
/// or returns one of these variants. The display strings are the exact
/// messages surfaced to the operator; internal causes (storage failures,
/// corrupt records) collapse into the generic variants and are logged
/// rather than exposed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong username or password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password rotation was attempted with the wrong current password.
    #[error("Current password is incorrect")]
    CurrentPasswordIncorrect,

    /// Login failed for an internal reason (storage unavailable, corrupt
    /// credential record).
    #[error("Login failed")]
    LoginFailed,

    /// Password rotation failed for an internal reason.
    #[error("Password change failed")]
    PasswordChangeFailed,
}
