//! Account API handlers
//!
//! CRUD plus login, logout, guest login, preference updates, and the
//! last-active-time lookup. Login scans on the embedded email and compares
//! the plaintext password, then delegates to the status-change path.

use crate::api::OperationResponse;
use crate::error::AppError;
use crate::models::{Account, Preferences};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Accounts list response
#[derive(Debug, Serialize)]
pub struct AccountsListResponse {
    /// Every stored account
    pub users: Vec<Account>,
}

/// Response carrying a human-readable message and the affected account
#[derive(Debug, Serialize)]
pub struct AccountMessageResponse {
    /// Human-readable outcome, e.g. "Login Success!"
    pub message: String,
    /// The account after the operation
    pub account: Account,
}

/// Last-active-time response
#[derive(Debug, Serialize)]
pub struct LastActiveTimeResponse {
    /// The stored `lastActiveTime`; empty while the account is logged out
    pub value: String,
}

/// Request body for `PUT /account/preferences`
///
/// Flattens the full preference structure next to the account id; every
/// subfield is required, so a partial payload is rejected before it can
/// reach the store.
#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    /// Account to update
    pub id: i64,
    /// Replacement for every preference subfield
    #[serde(flatten)]
    pub preferences: Preferences,
}

/// Request body for `POST /account/auto-logout`
#[derive(Debug, Deserialize)]
pub struct AutoLogoutRequest {
    /// Account to log out
    pub id: i64,
}

/// Request body for `POST /account/login`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email to scan for among stored login credentials
    pub email: String,
    /// Plaintext password to compare
    pub password: String,
}

/// GET /accounts - List all accounts
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AccountsListResponse>, AppError> {
    let users = state.db.list_accounts().await?;
    Ok(Json(AccountsListResponse { users }))
}

/// POST /accounts - Save an account (overwrite semantics, no pre-existence check)
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(account): Json<Account>,
) -> Result<Json<OperationResponse<Account>>, AppError> {
    state.db.save_account(&account).await?;
    Ok(Json(OperationResponse::new("SAVE", account)))
}

/// GET /account/:id - Fetch an account by id
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Account>, AppError> {
    state
        .db
        .get_account(id)
        .await?
        .map(Json)
        .ok_or(AppError::AccountNotFound)
}

/// DELETE /account/:id - Delete an account, returning the removed record
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<OperationResponse<Account>>, AppError> {
    let account = state
        .db
        .delete_account(id)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(OperationResponse::new("DELETE", account)))
}

/// POST /account/guest-login - Echo the caller's token without persistence
pub async fn guest_login(Json(body): Json<Value>) -> Result<Json<Value>, AppError> {
    if body.get("token").is_some() {
        Ok(Json(body))
    } else {
        Err(AppError::MissingGuestToken)
    }
}

/// PUT /account/preferences - Replace every preference subfield
pub async fn update_preferences(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdatePreferencesRequest>,
) -> Result<Json<AccountMessageResponse>, AppError> {
    let account = state
        .db
        .update_account_preferences(request.id, request.preferences)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(AccountMessageResponse {
        message: "Updated Preferences!".to_string(),
        account,
    }))
}

/// GET /account/last-active-time/:id - Fetch an account's last-active timestamp
pub async fn last_active_time(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<LastActiveTimeResponse>, AppError> {
    let account = state
        .db
        .get_account(id)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(LastActiveTimeResponse {
        value: account.last_active_time,
    }))
}

/// POST /account/auto-logout - Set status to logged out and clear the timestamp
pub async fn auto_logout(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AutoLogoutRequest>,
) -> Result<Json<AccountMessageResponse>, AppError> {
    let account = state
        .db
        .set_account_status(request.id, 0, String::new())
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(AccountMessageResponse {
        message: "Logout Success!".to_string(),
        account,
    }))
}

/// POST /account/login - Scan for the email, compare the password, mark logged in
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AccountMessageResponse>, AppError> {
    let account = state
        .db
        .find_account_by_email(&request.email)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    if account.preferences.login_credentials.password != request.password {
        return Err(AppError::IncorrectPassword);
    }

    let account = state
        .db
        .set_account_status(account.id, 1, Utc::now().to_rfc3339())
        .await?
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(AccountMessageResponse {
        message: "Login Success!".to_string(),
        account,
    }))
}
