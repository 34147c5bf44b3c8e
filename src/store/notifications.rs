//! Notification and notification-type table operations
//!
//! Types are keyed by their string name; notifications by a numeric-string
//! id allocated from a full scan of existing ids.

use super::{decode_body, encode_body, Db};
use crate::error::AppError;
use crate::models::{Notification, NotificationType};
use anyhow::anyhow;
use tracing::debug;

impl Db {
    /// Get a registered notification type by key
    pub async fn get_notification_type(
        &self,
        notification_type: &str,
    ) -> Result<Option<NotificationType>, AppError> {
        let body: Option<String> =
            sqlx::query_scalar("SELECT body FROM notification_types WHERE notification_type = ?")
                .bind(notification_type)
                .fetch_optional(self.pool())
                .await
                .map_err(|e| {
                    AppError::Internal(anyhow!("Failed to fetch notification type: {}", e))
                })?;

        body.as_deref().map(decode_body).transpose()
    }

    /// Save a notification type
    ///
    /// The handler checks for duplicates before calling this; a racing
    /// duplicate key surfaces here as a store error.
    pub async fn save_notification_type(
        &self,
        notification_type: &NotificationType,
    ) -> Result<(), AppError> {
        let body = encode_body(notification_type)?;
        sqlx::query("INSERT INTO notification_types (notification_type, body) VALUES (?, ?)")
            .bind(&notification_type.notification_type)
            .bind(body)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to save notification type: {}", e)))?;

        debug!(
            "Registered notification type: {}",
            notification_type.notification_type
        );
        Ok(())
    }

    /// Get all registered notification types (full scan)
    pub async fn list_notification_types(&self) -> Result<Vec<NotificationType>, AppError> {
        let bodies: Vec<String> = sqlx::query_scalar("SELECT body FROM notification_types")
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to scan notification types: {}", e)))?;

        bodies.iter().map(|body| decode_body(body)).collect()
    }

    /// Highest numeric notification id currently in the table
    ///
    /// Full scan of the id column; ids that do not parse as integers are
    /// skipped. Returns 0 for an empty table. Two concurrent senders can
    /// observe the same maximum; see `Notification` for the contract.
    pub async fn highest_notification_id(&self) -> Result<i64, AppError> {
        let ids: Vec<String> = sqlx::query_scalar("SELECT id FROM notifications")
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to scan notification ids: {}", e)))?;

        Ok(ids
            .iter()
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0))
    }

    /// Save a notification record
    pub async fn save_notification(&self, notification: &Notification) -> Result<(), AppError> {
        let body = encode_body(notification)?;
        sqlx::query("INSERT OR REPLACE INTO notifications (id, body) VALUES (?, ?)")
            .bind(&notification.id)
            .bind(body)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to save notification: {}", e)))?;

        debug!("Saved notification: {}", notification.id);
        Ok(())
    }

    /// Get all notifications (full scan, no ordering guarantee)
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, AppError> {
        let bodies: Vec<String> = sqlx::query_scalar("SELECT body FROM notifications")
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to scan notifications: {}", e)))?;

        bodies.iter().map(|body| decode_body(body)).collect()
    }
}
