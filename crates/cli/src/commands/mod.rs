//! Command implementations for the Portico CLI.
//!
//! Each submodule covers one admin area. Commands build their services
//! from environment configuration per invocation; the session jar on
//! disk is what carries authentication between invocations.

pub mod auth;
pub mod business;
pub mod content;
pub mod media;
pub mod settings;
pub mod users;

use portico_cms::models::MediaError;
use portico_cms::store::StoreError;
use portico_cms::{AuthError, AuthService, CmsConfig, ConfigError, ContentStore};
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {what}: {reason}")]
    InvalidArgument { what: &'static str, reason: String },

    #[error("Not logged in; run `portico login` first")]
    NotAuthenticated,
}

/// Build the authentication service from environment configuration.
fn open_auth() -> Result<AuthService, CliError> {
    let config = CmsConfig::from_env()?;
    Ok(AuthService::new(
        Box::new(config.record_store()),
        Box::new(config.session_store()),
        config.admin,
    ))
}

/// Build the content store for read-only commands.
fn open_content() -> Result<ContentStore, CliError> {
    let config = CmsConfig::from_env()?;
    Ok(ContentStore::new(Box::new(config.record_store())))
}

/// Build the content store for mutating commands.
///
/// Refuses with [`CliError::NotAuthenticated`] unless the session jar
/// holds an unexpired operator session.
fn open_content_gated() -> Result<ContentStore, CliError> {
    let auth = open_auth()?;
    if !auth.is_authenticated() {
        return Err(CliError::NotAuthenticated);
    }
    open_content()
}
