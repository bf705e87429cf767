//! Portico CMS - session manager and durable content store.
//!
//! This crate is the engineering core of Portico: everything the admin
//! surface needs that is not view plumbing.
//!
//! # Architecture
//!
//! Two services, composed only by the caller:
//!
//! - [`services::auth::AuthService`] - owns authentication state. Checks
//!   for an existing session at construction, validates login attempts
//!   against the stored (hashed) credential record, issues and clears the
//!   session marker, and rotates the password.
//! - [`services::content::ContentStore`] - owns the six content records
//!   (business info, site content, users, media, settings, credentials
//!   excepted). Loads persisted state at startup, exposes typed read
//!   access, and re-serializes the whole affected record on every
//!   mutation.
//!
//! Persistence goes through two ports so a different backend can satisfy
//! the same contracts later:
//!
//! - [`store::RecordStore`] - durable key-value store of JSON documents
//! - [`session::SessionStore`] - expiring session marker store
//!
//! The whole crate is synchronous and single-caller: no async runtime,
//! no locks. Two processes sharing a data directory get last-write-wins
//! with no conflict detection.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod ids;
pub mod models;
pub mod services;
pub mod session;
pub mod store;

pub use config::{CmsConfig, ConfigError};
pub use services::auth::{AuthError, AuthService};
pub use services::content::ContentStore;
