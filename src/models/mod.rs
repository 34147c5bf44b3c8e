//! Data models
//!
//! Typed records for the account, order, and notification tables. Serde
//! renames preserve the wire casing the platform's clients already depend on.

mod account;
mod notification;
mod order;

pub use account::{Account, LoginCredentials, NotificationSettings, Preferences};
pub use notification::{Notification, NotificationType};
pub use order::Order;
