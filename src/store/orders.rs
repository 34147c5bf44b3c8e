//! Order table operations
//!
//! The order table is keyed by the caller-supplied string id. List filtering
//! is applied post-hoc to the scanned records, so cost is proportional to
//! table size regardless of match count.

use super::{decode_body, encode_body, Db};
use crate::error::AppError;
use crate::models::Order;
use anyhow::anyhow;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

impl Db {
    /// Get all orders, keeping only those whose top-level fields match every
    /// filter exactly (string comparison, mirroring query parameters)
    pub async fn list_orders(
        &self,
        filters: &HashMap<String, String>,
    ) -> Result<Vec<Order>, AppError> {
        let bodies: Vec<String> = sqlx::query_scalar("SELECT body FROM orders")
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to scan orders: {}", e)))?;

        let orders: Vec<Order> = bodies
            .iter()
            .map(|body| decode_body(body))
            .collect::<Result<_, _>>()?;

        if filters.is_empty() {
            return Ok(orders);
        }

        Ok(orders
            .into_iter()
            .filter(|order| matches_filters(order, filters))
            .collect())
    }

    /// Save an order, overwriting any record with the same id
    pub async fn save_order(&self, order: &Order) -> Result<(), AppError> {
        let body = encode_body(order)?;
        sqlx::query("INSERT OR REPLACE INTO orders (id, body) VALUES (?, ?)")
            .bind(&order.id)
            .bind(body)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to save order: {}", e)))?;

        debug!("Saved order: {}", order.id);
        Ok(())
    }

    /// Get an order by id
    pub async fn get_order(&self, id: &str) -> Result<Option<Order>, AppError> {
        let body: Option<String> = sqlx::query_scalar("SELECT body FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to fetch order: {}", e)))?;

        body.as_deref().map(decode_body).transpose()
    }

    /// Replace the mutable fields of an existing order
    ///
    /// Returns the updated record, or `None` if the order does not exist.
    pub async fn update_order(
        &self,
        id: &str,
        customer_id: String,
        restaurant_id: String,
        items: Value,
    ) -> Result<Option<Order>, AppError> {
        let Some(mut order) = self.get_order(id).await? else {
            return Ok(None);
        };

        order.customer_id = customer_id;
        order.restaurant_id = restaurant_id;
        order.items = items;
        self.save_order(&order).await?;
        Ok(Some(order))
    }
}

/// Exact string-equality match of every filter against the order's
/// top-level JSON fields. Non-string fields never match, the same way a
/// string query parameter never equals a stored number.
fn matches_filters(order: &Order, filters: &HashMap<String, String>) -> bool {
    let value = match serde_json::to_value(order) {
        Ok(value) => value,
        Err(_) => return false,
    };

    filters.iter().all(|(key, expected)| {
        matches!(value.get(key), Some(Value::String(actual)) if actual == expected)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_order(id: &str, restaurant_id: &str) -> Order {
        Order {
            id: id.to_string(),
            customer_id: "42".to_string(),
            restaurant_id: restaurant_id.to_string(),
            items: json!(["noodles"]),
        }
    }

    #[test]
    fn test_matches_on_equal_string_field() {
        let mut filters = HashMap::new();
        filters.insert("restaurant_id".to_string(), "5".to_string());
        assert!(matches_filters(&sample_order("a", "5"), &filters));
        assert!(!matches_filters(&sample_order("a", "6"), &filters));
    }

    #[test]
    fn test_all_filters_must_match() {
        let mut filters = HashMap::new();
        filters.insert("restaurant_id".to_string(), "5".to_string());
        filters.insert("customer_id".to_string(), "42".to_string());
        assert!(matches_filters(&sample_order("a", "5"), &filters));

        filters.insert("customer_id".to_string(), "43".to_string());
        assert!(!matches_filters(&sample_order("a", "5"), &filters));
    }

    #[test]
    fn test_unknown_key_never_matches() {
        let mut filters = HashMap::new();
        filters.insert("driver_id".to_string(), "1".to_string());
        assert!(!matches_filters(&sample_order("a", "5"), &filters));
    }

    #[test]
    fn test_non_string_field_never_matches() {
        // items is an array; a string parameter must not equal it
        let mut filters = HashMap::new();
        filters.insert("items".to_string(), "noodles".to_string());
        assert!(!matches_filters(&sample_order("a", "5"), &filters));
    }
}
