//! Settings record.

use portico_core::{BackupFrequency, Theme};
use serde::{Deserialize, Serialize};

/// Notification channel toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationToggles {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
}

impl Default for NotificationToggles {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
        }
    }
}

/// Security policy knobs.
///
/// The two-factor flag and expiry windows are stored policy only; no
/// enforcement machinery exists behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPolicy {
    pub two_factor_auth: bool,
    /// Idle session timeout, in minutes.
    pub session_timeout: u32,
    /// Password rotation window, in days.
    pub password_expiry: u32,
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self {
            two_factor_auth: false,
            session_timeout: 60,
            password_expiry: 90,
        }
    }
}

/// Backup policy. The backup action itself is a stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPolicy {
    pub auto_backup: bool,
    pub backup_frequency: BackupFrequency,
    /// How long backups are retained, in days.
    pub retention_period: u32,
}

impl Default for BackupPolicy {
    fn default() -> Self {
        Self {
            auto_backup: true,
            backup_frequency: BackupFrequency::Daily,
            retention_period: 30,
        }
    }
}

/// The settings singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub site_name: String,
    pub site_description: String,
    pub theme: Theme,
    pub notifications: NotificationToggles,
    pub security: SecurityPolicy,
    pub backup: BackupPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_name: "My New Website".to_owned(),
            site_description: "Private business portal".to_owned(),
            theme: Theme::Light,
            notifications: NotificationToggles::default(),
            security: SecurityPolicy::default(),
            backup: BackupPolicy::default(),
        }
    }
}

/// Shallow partial update for [`Settings`].
///
/// Nested groups are replaced wholesale when supplied, matching the
/// per-tab forms of the admin surface which always submit a whole group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub site_name: Option<String>,
    pub site_description: Option<String>,
    pub theme: Option<Theme>,
    pub notifications: Option<NotificationToggles>,
    pub security: Option<SecurityPolicy>,
    pub backup: Option<BackupPolicy>,
}

impl SettingsPatch {
    /// Overlay this patch onto `settings`.
    pub fn apply(self, settings: &mut Settings) {
        if let Some(site_name) = self.site_name {
            settings.site_name = site_name;
        }
        if let Some(site_description) = self.site_description {
            settings.site_description = site_description;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(notifications) = self.notifications {
            settings.notifications = notifications;
        }
        if let Some(security) = self.security {
            settings.security = security;
        }
        if let Some(backup) = self.backup {
            settings.backup = backup;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.site_name, "My New Website");
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.notifications.email);
        assert!(!settings.notifications.sms);
        assert_eq!(settings.security.session_timeout, 60);
        assert_eq!(settings.backup.retention_period, 30);
    }

    #[test]
    fn test_patch_replaces_group_wholesale() {
        let mut settings = Settings::default();
        SettingsPatch {
            security: Some(SecurityPolicy {
                two_factor_auth: true,
                session_timeout: 15,
                password_expiry: 30,
            }),
            ..SettingsPatch::default()
        }
        .apply(&mut settings);

        assert!(settings.security.two_factor_auth);
        assert_eq!(settings.security.session_timeout, 15);
        // untouched group
        assert!(settings.backup.auto_backup);
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"siteName\""));
        assert!(json.contains("\"twoFactorAuth\""));
        assert!(json.contains("\"backupFrequency\""));
    }
}
