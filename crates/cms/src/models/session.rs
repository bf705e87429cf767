//! Session-stored operator snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the logged-in operator, serialized into the session
/// store next to the marker token.
///
/// The id and role are fixed - this is a single-operator system - but
/// they are persisted so the admin surface can render them without
/// touching the credential record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub login_time: DateTime<Utc>,
}

impl CurrentUser {
    /// Build the snapshot recorded at login time.
    #[must_use]
    pub fn at_login(username: &str, login_time: DateTime<Utc>) -> Self {
        Self {
            id: 1,
            username: username.to_owned(),
            role: "admin".to_owned(),
            login_time,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_at_login_shape() {
        let snapshot = CurrentUser::at_login("admin", Utc::now());
        assert_eq!(snapshot.id, 1);
        assert_eq!(snapshot.role, "admin");
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let snapshot = CurrentUser::at_login("admin", Utc::now());
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"loginTime\""));
    }
}
