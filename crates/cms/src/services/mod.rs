//! Services composing the storage ports into the two public surfaces.

pub mod auth;
pub mod content;
