//! Order data model

use serde::{Deserialize, Serialize};

/// A food order, keyed by an opaque string id.
///
/// `items` is carried as raw JSON: its shape belongs to the restaurant
/// integration, and this service only stores and echoes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Opaque order identifier, supplied by the caller
    pub id: String,
    /// Customer placing the order; forwarded to the notification service
    pub customer_id: String,
    /// Restaurant fulfilling the order
    pub restaurant_id: String,
    /// Ordered items, stored as-is
    pub items: serde_json::Value,
}
