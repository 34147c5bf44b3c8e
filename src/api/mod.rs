//! API module
//!
//! Contains HTTP request handlers for the account, order, and notification
//! route groups, and the router mounting all of them.

pub mod accounts;
pub mod notifications;
pub mod orders;

use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Envelope for save/create/delete style operations, mirroring the
/// platform's existing response contract (capitalized field names included).
#[derive(Debug, Serialize)]
pub struct OperationResponse<T> {
    /// Operation label, e.g. "SAVE" or "DELETE"
    #[serde(rename = "Operation")]
    pub operation: &'static str,
    /// Always "SUCCESS" on the success path
    #[serde(rename = "Message")]
    pub message: &'static str,
    /// The record the operation produced or removed
    #[serde(rename = "Item")]
    pub item: T,
}

impl<T> OperationResponse<T> {
    /// Success envelope for the given operation label
    pub fn new(operation: &'static str, item: T) -> Self {
        Self {
            operation,
            message: "SUCCESS",
            item,
        }
    }
}

/// Build the router with every route group mounted
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Account service
        .route(
            "/accounts",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route(
            "/account/:id",
            get(accounts::get_account).delete(accounts::delete_account),
        )
        .route("/account/guest-login", post(accounts::guest_login))
        .route("/account/preferences", put(accounts::update_preferences))
        .route(
            "/account/last-active-time/:id",
            get(accounts::last_active_time),
        )
        .route("/account/auto-logout", post(accounts::auto_logout))
        .route("/account/login", post(accounts::login))
        // Order service
        .route(
            "/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route(
            "/orders/:order_id",
            get(orders::get_order).patch(orders::update_order),
        )
        // Notification service
        .route(
            "/notification-types",
            post(notifications::create_notification_type),
        )
        .route(
            "/send-notification",
            post(notifications::send_notification),
        )
        .route(
            "/notification-history",
            get(notifications::notification_history),
        )
        .route(
            "/supported-notification-types",
            get(notifications::supported_notification_types),
        )
        .with_state(state)
}
