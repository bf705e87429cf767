//! Operator credential record.

use serde::{Deserialize, Serialize};

/// The single operator credential record.
///
/// Exactly one exists. It is created from the configured bootstrap
/// credentials on first use and replaced only by password rotation -
/// never deleted. The on-disk field is named `password` for continuity
/// with the record the admin surface has always stored, but it always
/// holds a one-way hash, never a plaintext password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}
