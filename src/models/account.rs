//! Account data model
//!
//! Accounts are posted whole by the caller and stored verbatim; login and
//! logout only touch `status` and `lastActiveTime`.

use serde::{Deserialize, Serialize};

/// A user account, keyed by numeric id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique numeric identifier, supplied by the caller at signup
    pub id: i64,
    /// 1 while logged in, 0 otherwise
    pub status: i64,
    /// Timestamp string of the last login; empty while logged out
    pub last_active_time: String,
    /// Preference sub-structure, replaced wholesale by preference updates
    pub preferences: Preferences,
}

/// Account preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Delivery address
    pub address: String,
    /// UI font choice
    pub preferred_font: String,
    /// Whether the client renders in dark mode
    pub dark_mode_on: bool,
    /// Stored payment method label
    pub payment_method: String,
    /// UI language
    pub language: String,
    /// Login credentials; the email is what the login scan matches on
    pub login_credentials: LoginCredentials,
    /// Per-channel notification opt-ins
    pub notification_settings: NotificationSettings,
}

/// Login credentials embedded in the preferences sub-structure.
/// The password is held in plaintext, per the platform's current account
/// contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginCredentials {
    /// Email address used as the login handle
    pub email: String,
    /// Plaintext password
    pub password: String,
}

/// Per-channel notification opt-ins
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationSettings {
    /// Phone number for text notifications
    pub phone_number: String,
    /// Text message channel enabled
    pub text: bool,
    /// Push channel enabled
    pub push: bool,
    /// Email channel enabled
    pub email: bool,
}
