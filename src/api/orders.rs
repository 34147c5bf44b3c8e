//! Order API handlers
//!
//! CRUD plus the best-effort notification call on creation and update. The
//! notification outcome is embedded in the response but never fails the
//! order operation itself.

use crate::error::AppError;
use crate::models::Order;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Orders list response
#[derive(Debug, Serialize)]
pub struct OrdersListResponse {
    /// Orders surviving the query-parameter filters
    pub orders: Vec<Order>,
}

/// Response for order creation; the save envelope plus the notification outcome
#[derive(Debug, Serialize)]
pub struct SaveOrderResponse {
    /// Operation label
    #[serde(rename = "Operation")]
    pub operation: &'static str,
    /// Always "SUCCESS" on this path
    #[serde(rename = "Message")]
    pub message: &'static str,
    /// The saved order
    #[serde(rename = "Item")]
    pub item: Order,
    /// Outcome of the notification side-call
    #[serde(rename = "Notif")]
    pub notif: Value,
}

/// Request body for `PATCH /orders/:orderId`
///
/// All three replaceable fields are required; `status` only drives the
/// notification type and is never persisted.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    /// Replacement customer id
    pub customer_id: String,
    /// Replacement restaurant id
    pub restaurant_id: String,
    /// Replacement items payload
    pub items: Value,
    /// Notification type to forward (e.g. "out_for_delivery")
    pub status: String,
}

/// Response for order updates
#[derive(Debug, Serialize)]
pub struct UpdateOrderResponse {
    /// Human-readable outcome
    pub message: String,
    /// The order after the update
    #[serde(rename = "UpdatedAttributes")]
    pub updated_attributes: Order,
    /// Outcome of the notification side-call
    pub notif: Value,
}

/// GET /orders - List orders, filtered by exact match on any query parameter
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(filters): Query<HashMap<String, String>>,
) -> Result<Json<OrdersListResponse>, AppError> {
    let orders = state.db.list_orders(&filters).await?;
    Ok(Json(OrdersListResponse { orders }))
}

/// POST /orders - Save an order, then notify the customer best-effort
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(order): Json<Order>,
) -> Result<Json<SaveOrderResponse>, AppError> {
    state.db.save_order(&order).await?;

    let notif = state
        .notifier
        .send("placed", &order.customer_id, "email")
        .await;

    Ok(Json(SaveOrderResponse {
        operation: "SAVE",
        message: "SUCCESS",
        item: order,
        notif,
    }))
}

/// GET /orders/:orderId - Fetch an order by id
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, AppError> {
    state
        .db
        .get_order(&order_id)
        .await?
        .map(Json)
        .ok_or(AppError::OrderNotFound)
}

/// PATCH /orders/:orderId - Replace the mutable fields, then notify
///
/// The caller's `status` is forwarded as the notification type without
/// consulting the type registry; the notification service rejects unknown
/// types on its side and the order update still succeeds.
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<Json<UpdateOrderResponse>, AppError> {
    let order = state
        .db
        .update_order(
            &order_id,
            request.customer_id,
            request.restaurant_id,
            request.items,
        )
        .await?
        .ok_or(AppError::OrderNotFound)?;

    let notif = state
        .notifier
        .send(&request.status, &order.customer_id, "email")
        .await;

    Ok(Json(UpdateOrderResponse {
        message: "Order updated successfully".to_string(),
        updated_attributes: order,
        notif,
    }))
}
