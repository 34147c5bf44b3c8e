//! Notification service client
//!
//! Outbound HTTP client the order handlers use to reach the notification
//! service. The call is best-effort: whatever happens, the outcome is
//! embedded in the order response and the order operation itself succeeds.

use serde::Serialize;
use serde_json::Value;

/// Outcome string reported when the notification service rejects the send
/// or the request cannot be completed.
const SEND_FAILED: &str = "Failed to send notification.";

/// Request body for the cross-service send-notification call
#[derive(Debug, Serialize)]
struct SendNotificationBody<'a> {
    notification_type: &'a str,
    account_id: &'a str,
    message_type: &'a str,
}

/// Client for the notification service
///
/// The base URL comes from configuration; deployments and tests decide
/// where sends go.
#[derive(Debug, Clone)]
pub struct Notifier {
    client: reqwest::Client,
    base_url: String,
}

impl Notifier {
    /// Create a client targeting the given notification service base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST /send-notification on the notification service
    ///
    /// # Arguments
    /// * `notification_type` - Registered type key ("placed", or the status
    ///   string a PATCH caller supplied)
    /// * `account_id` - Customer the notification is addressed to
    /// * `message_type` - Delivery channel hint, currently always "email"
    ///
    /// # Returns
    /// The service's response payload on success, or a failure string. Never
    /// an error: order writes must not roll back because a notification
    /// could not be sent.
    pub async fn send(
        &self,
        notification_type: &str,
        account_id: &str,
        message_type: &str,
    ) -> Value {
        let url = format!("{}/send-notification", self.base_url);
        let body = SendNotificationBody {
            notification_type,
            account_id,
            message_type,
        };

        let response = match self.client.post(&url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, url = %url, "Notification request failed to send");
                return Value::String(SEND_FAILED.to_string());
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                status = response.status().as_u16(),
                notification_type = %notification_type,
                "Notification service rejected send"
            );
            return Value::String(SEND_FAILED.to_string());
        }

        match response.json::<Value>().await {
            Ok(payload) => {
                tracing::debug!(notification_type = %notification_type, "Notification sent");
                payload
            }
            Err(e) => {
                tracing::warn!(error = %e, "Notification response was not valid JSON");
                Value::String(SEND_FAILED.to_string())
            }
        }
    }
}
