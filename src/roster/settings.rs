use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};

/// Settings-page preferences. These are session state like everything else in
/// the app; "saving" them only acknowledges the change with a notice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_true")]
    pub email_notifications: bool,
    #[serde(default)]
    pub push_notifications: bool,
    #[serde(default = "default_true")]
    pub weekly_reports: bool,

    #[serde(default)]
    pub compact_mode: bool,

    #[serde(default)]
    pub two_factor_auth: bool,
    #[serde(default = "default_session_timeout")]
    pub session_timeout_minutes: u32,

    #[serde(default = "default_true")]
    pub auto_backup: bool,
    #[serde(default = "default_data_retention")]
    pub data_retention_days: u32,
}

fn default_true() -> bool {
    true
}

fn default_session_timeout() -> u32 {
    30
}

fn default_data_retention() -> u32 {
    365
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
            weekly_reports: true,
            compact_mode: false,
            two_factor_auth: false,
            session_timeout_minutes: default_session_timeout(),
            auto_backup: true,
            data_retention_days: default_data_retention(),
        }
    }
}

/// The toggleable settings, addressed by their kebab-case key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    EmailNotifications,
    PushNotifications,
    WeeklyReports,
    CompactMode,
    TwoFactorAuth,
    AutoBackup,
}

impl SettingKey {
    pub const ALL: [SettingKey; 6] = [
        SettingKey::EmailNotifications,
        SettingKey::PushNotifications,
        SettingKey::WeeklyReports,
        SettingKey::CompactMode,
        SettingKey::TwoFactorAuth,
        SettingKey::AutoBackup,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SettingKey::EmailNotifications => "email-notifications",
            SettingKey::PushNotifications => "push-notifications",
            SettingKey::WeeklyReports => "weekly-reports",
            SettingKey::CompactMode => "compact-mode",
            SettingKey::TwoFactorAuth => "two-factor-auth",
            SettingKey::AutoBackup => "auto-backup",
        }
    }
}

impl std::str::FromStr for SettingKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        SettingKey::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| RosterError::Api(format!("Unknown setting: {}", s)))
    }
}

impl Settings {
    /// Flips a boolean setting and returns its new value.
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let slot = match key {
            SettingKey::EmailNotifications => &mut self.email_notifications,
            SettingKey::PushNotifications => &mut self.push_notifications,
            SettingKey::WeeklyReports => &mut self.weekly_reports,
            SettingKey::CompactMode => &mut self.compact_mode,
            SettingKey::TwoFactorAuth => &mut self.two_factor_auth,
            SettingKey::AutoBackup => &mut self.auto_backup,
        };
        *slot = !*slot;
        *slot
    }

    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::EmailNotifications => self.email_notifications,
            SettingKey::PushNotifications => self.push_notifications,
            SettingKey::WeeklyReports => self.weekly_reports,
            SettingKey::CompactMode => self.compact_mode,
            SettingKey::TwoFactorAuth => self.two_factor_auth,
            SettingKey::AutoBackup => self.auto_backup,
        }
    }
}
