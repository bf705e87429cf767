//! Portico Core - Shared types library.
//!
//! This crate provides common types used across all Portico components:
//! - `cms` - Session manager and durable content store
//! - `cli` - Command-line surface for operating the site
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, ratings, and
//!   role/status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
