//! Notification API handlers
//!
//! Type registry, send (a persisted record, not a delivery), history, and
//! the supported-type catalog.

use crate::api::OperationResponse;
use crate::error::AppError;
use crate::models::{Notification, NotificationType};
use crate::state::AppState;
use axum::{extract::State, response::Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request body for `POST /send-notification`
#[derive(Debug, Deserialize)]
pub struct SendNotificationRequest {
    /// Key of a registered notification type
    pub notification_type: String,
    /// Account the notification is addressed to
    pub account_id: String,
    /// Delivery channel hint; accepted on the wire but not persisted
    #[allow(dead_code)]
    pub message_type: String,
}

/// Notification history response
#[derive(Debug, Serialize)]
pub struct NotificationHistoryResponse {
    /// Every stored notification, in no guaranteed order
    pub notifs: Vec<Notification>,
}

/// Supported-type catalog response
#[derive(Debug, Serialize)]
pub struct SupportedTypesResponse {
    /// Operation label
    #[serde(rename = "Operation")]
    pub operation: &'static str,
    /// Always "SUCCESS" on this path
    #[serde(rename = "Message")]
    pub message: &'static str,
    /// Bare list of registered type keys
    #[serde(rename = "SupportedNotificationTypes")]
    pub supported_notification_types: Vec<String>,
}

/// POST /notification-types - Register a notification type
///
/// Registration is first-write-wins: a duplicate key is rejected and the
/// stored description is left untouched.
pub async fn create_notification_type(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NotificationType>,
) -> Result<Json<OperationResponse<NotificationType>>, AppError> {
    if state
        .db
        .get_notification_type(&request.notification_type)
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateNotificationType);
    }

    state.db.save_notification_type(&request).await?;
    Ok(Json(OperationResponse::new("CREATE", request)))
}

/// POST /send-notification - Persist a notification for a registered type
///
/// The id is allocated as max existing id + 1 from a full scan; collision
/// freedom holds for sequential sends only. The message text is copied from
/// the type's description, not from anything the caller sent.
pub async fn send_notification(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SendNotificationRequest>,
) -> Result<Json<OperationResponse<Notification>>, AppError> {
    let notification_type = state
        .db
        .get_notification_type(&request.notification_type)
        .await?
        .ok_or(AppError::UnknownNotificationType)?;

    let next_id = state.db.highest_notification_id().await? + 1;

    let notification = Notification {
        id: next_id.to_string(),
        account_id: request.account_id,
        notification_type: request.notification_type,
        notification_message: notification_type.description,
        sent_time: Utc::now().to_rfc3339(),
    };

    state.db.save_notification(&notification).await?;
    Ok(Json(OperationResponse::new("SAVE", notification)))
}

/// GET /notification-history - List every stored notification
pub async fn notification_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NotificationHistoryResponse>, AppError> {
    let notifs = state.db.list_notifications().await?;
    Ok(Json(NotificationHistoryResponse { notifs }))
}

/// GET /supported-notification-types - List the registered type keys
pub async fn supported_notification_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SupportedTypesResponse>, AppError> {
    let types = state.db.list_notification_types().await?;
    Ok(Json(SupportedTypesResponse {
        operation: "GET_SUPPORTED_NOTIFICATION_TYPES",
        message: "SUCCESS",
        supported_notification_types: types
            .into_iter()
            .map(|t| t.notification_type)
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::Notifier;
    use crate::store::Db;
    use tempfile::TempDir;

    async fn create_test_state() -> (Arc<AppState>, TempDir) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join("test.db");
        let db = Db::new(db_path.to_str().unwrap())
            .await
            .expect("failed to open test db");
        let notifier = Notifier::new("http://127.0.0.1:1");
        (Arc::new(AppState::new(db, notifier)), dir)
    }

    fn placed_type() -> NotificationType {
        NotificationType {
            notification_type: "placed".to_string(),
            description: "Your order has been placed.".to_string(),
        }
    }

    fn send_request(notification_type: &str, account_id: &str) -> SendNotificationRequest {
        SendNotificationRequest {
            notification_type: notification_type.to_string(),
            account_id: account_id.to_string(),
            message_type: "email".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_type() {
        let (state, _dir) = create_test_state().await;
        let response = create_notification_type(State(state), Json(placed_type()))
            .await
            .unwrap();
        assert_eq!(response.operation, "CREATE");
        assert_eq!(response.item.notification_type, "placed");
    }

    #[tokio::test]
    async fn test_duplicate_type_is_rejected_without_overwrite() {
        let (state, _dir) = create_test_state().await;
        create_notification_type(State(state.clone()), Json(placed_type()))
            .await
            .unwrap();

        let mut duplicate = placed_type();
        duplicate.description = "A different template.".to_string();
        let result = create_notification_type(State(state.clone()), Json(duplicate)).await;
        assert!(matches!(result, Err(AppError::DuplicateNotificationType)));

        // The original description survived the rejected registration
        let send = send_notification(State(state), Json(send_request("placed", "42")))
            .await
            .unwrap();
        assert_eq!(send.item.notification_message, "Your order has been placed.");
    }

    #[tokio::test]
    async fn test_send_unregistered_type() {
        let (state, _dir) = create_test_state().await;
        let result = send_notification(State(state), Json(send_request("bogus", "42"))).await;
        assert!(matches!(result, Err(AppError::UnknownNotificationType)));
    }

    #[tokio::test]
    async fn test_sequential_sends_increment_ids() {
        let (state, _dir) = create_test_state().await;
        create_notification_type(State(state.clone()), Json(placed_type()))
            .await
            .unwrap();

        let first = send_notification(State(state.clone()), Json(send_request("placed", "1")))
            .await
            .unwrap();
        let second = send_notification(State(state.clone()), Json(send_request("placed", "2")))
            .await
            .unwrap();
        let third = send_notification(State(state), Json(send_request("placed", "3")))
            .await
            .unwrap();

        assert_eq!(first.item.id, "1");
        assert_eq!(second.item.id, "2");
        assert_eq!(third.item.id, "3");
    }

    #[tokio::test]
    async fn test_send_allocates_one_past_existing_max() {
        let (state, _dir) = create_test_state().await;
        create_notification_type(State(state.clone()), Json(placed_type()))
            .await
            .unwrap();

        // Preexisting record with a high id
        state
            .db
            .save_notification(&Notification {
                id: "7".to_string(),
                account_id: "1".to_string(),
                notification_type: "placed".to_string(),
                notification_message: "Your order has been placed.".to_string(),
                sent_time: "2024-01-01T00:00:00Z".to_string(),
            })
            .await
            .unwrap();

        let response = send_notification(State(state), Json(send_request("placed", "2")))
            .await
            .unwrap();
        assert_eq!(response.item.id, "8");
    }

    #[tokio::test]
    async fn test_send_copies_description_into_message() {
        let (state, _dir) = create_test_state().await;
        create_notification_type(State(state.clone()), Json(placed_type()))
            .await
            .unwrap();

        let response = send_notification(State(state), Json(send_request("placed", "42")))
            .await
            .unwrap();
        assert_eq!(response.item.account_id, "42");
        assert_eq!(response.item.notification_type, "placed");
        assert_eq!(response.item.notification_message, "Your order has been placed.");
        assert!(!response.item.sent_time.is_empty());
    }

    #[tokio::test]
    async fn test_history_returns_stored_records() {
        let (state, _dir) = create_test_state().await;
        create_notification_type(State(state.clone()), Json(placed_type()))
            .await
            .unwrap();
        send_notification(State(state.clone()), Json(send_request("placed", "1")))
            .await
            .unwrap();
        send_notification(State(state.clone()), Json(send_request("placed", "2")))
            .await
            .unwrap();

        let response = notification_history(State(state)).await.unwrap();
        assert_eq!(response.notifs.len(), 2);
    }

    #[tokio::test]
    async fn test_supported_types_lists_keys() {
        let (state, _dir) = create_test_state().await;
        create_notification_type(State(state.clone()), Json(placed_type()))
            .await
            .unwrap();
        create_notification_type(
            State(state.clone()),
            Json(NotificationType {
                notification_type: "out_for_delivery".to_string(),
                description: "Your order is on the way.".to_string(),
            }),
        )
        .await
        .unwrap();

        let response = supported_notification_types(State(state)).await.unwrap();
        assert_eq!(response.operation, "GET_SUPPORTED_NOTIFICATION_TYPES");
        let mut names = response.supported_notification_types.clone();
        names.sort();
        assert_eq!(names, vec!["out_for_delivery", "placed"]);
    }
}
