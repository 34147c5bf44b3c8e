//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via
/// `IntoResponse`. The display strings of the domain variants are part of the
/// public API contract and must not change.
#[derive(Error, Debug)]
pub enum AppError {
    /// Account with the given id (or email) was not found
    #[error("User not found")]
    AccountNotFound,

    /// Login attempt with a password that does not match the stored one.
    /// Surfaced as 404, matching the platform's existing login contract.
    #[error("Incorrect Password")]
    IncorrectPassword,

    /// Order with the given id was not found
    #[error("Order not found")]
    OrderNotFound,

    /// Guest login payload did not carry a token field
    #[error("Token not included in body")]
    MissingGuestToken,

    /// Notification type registration collided with an existing key
    #[error("Notification type already exists")]
    DuplicateNotificationType,

    /// Send requested for a notification type that was never registered
    #[error("Notif type doesn't exist")]
    UnknownNotificationType,

    /// Internal server error (catch-all for store and transport failures)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::AccountNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::IncorrectPassword => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::OrderNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::MissingGuestToken => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::DuplicateNotificationType => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::UnknownNotificationType => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal(e) => {
                // The detail goes to the log; clients get a generic message
                tracing::error!(error = %e, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
