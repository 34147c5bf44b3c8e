//! Notification data models
//!
//! A notification "type" is a registered template; a notification is one
//! persisted send. Sending is purely a database write; no delivery channel
//! is attached at this layer.

use serde::{Deserialize, Serialize};

/// A registered notification type. The description doubles as the message
/// template copied into every notification of this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationType {
    /// Unique string key
    pub notification_type: String,
    /// Message template for notifications of this type
    pub description: String,
}

/// A persisted notification record.
///
/// Ids are numeric strings allocated as max existing id + 1 by a full-table
/// scan. Two concurrent sends can read the same max and collide; callers
/// get uniqueness only for sequential sends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Incrementing numeric-string identifier
    pub id: String,
    /// Account the notification is addressed to
    pub account_id: String,
    /// Key of the registered type this send used
    #[serde(rename = "notificationType")]
    pub notification_type: String,
    /// Message text, copied from the type's description at send time
    #[serde(rename = "notificationMessage")]
    pub notification_message: String,
    /// RFC 3339 timestamp of the send
    #[serde(rename = "sentTime")]
    pub sent_time: String,
}
