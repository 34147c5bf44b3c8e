//! Account table operations
//!
//! The account table is keyed by the caller-supplied numeric id. Saves are
//! overwrites; there is no pre-existence check anywhere on the write path.

use super::{decode_body, encode_body, Db};
use crate::error::AppError;
use crate::models::{Account, Preferences};
use anyhow::anyhow;
use tracing::debug;

impl Db {
    /// Get all accounts (full scan)
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        let bodies: Vec<String> = sqlx::query_scalar("SELECT body FROM accounts")
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to scan accounts: {}", e)))?;

        bodies.iter().map(|body| decode_body(body)).collect()
    }

    /// Save an account, overwriting any record with the same id
    pub async fn save_account(&self, account: &Account) -> Result<(), AppError> {
        let body = encode_body(account)?;
        sqlx::query("INSERT OR REPLACE INTO accounts (id, body) VALUES (?, ?)")
            .bind(account.id)
            .bind(body)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to save account: {}", e)))?;

        debug!("Saved account: {}", account.id);
        Ok(())
    }

    /// Get an account by id
    pub async fn get_account(&self, id: i64) -> Result<Option<Account>, AppError> {
        let body: Option<String> = sqlx::query_scalar("SELECT body FROM accounts WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to fetch account: {}", e)))?;

        body.as_deref().map(decode_body).transpose()
    }

    /// Delete an account by id, returning the removed record
    pub async fn delete_account(&self, id: i64) -> Result<Option<Account>, AppError> {
        let existing = self.get_account(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to delete account: {}", e)))?;

        debug!("Deleted account: {}", id);
        Ok(existing)
    }

    /// Replace every preference subfield on an existing account
    ///
    /// Returns the updated record, or `None` if the account does not exist.
    pub async fn update_account_preferences(
        &self,
        id: i64,
        preferences: Preferences,
    ) -> Result<Option<Account>, AppError> {
        let Some(mut account) = self.get_account(id).await? else {
            return Ok(None);
        };

        account.preferences = preferences;
        self.save_account(&account).await?;
        Ok(Some(account))
    }

    /// Set the login status and last-active timestamp on an existing account
    ///
    /// Returns the updated record, or `None` if the account does not exist.
    pub async fn set_account_status(
        &self,
        id: i64,
        status: i64,
        last_active_time: String,
    ) -> Result<Option<Account>, AppError> {
        let Some(mut account) = self.get_account(id).await? else {
            return Ok(None);
        };

        account.status = status;
        account.last_active_time = last_active_time;
        self.save_account(&account).await?;
        Ok(Some(account))
    }

    /// Find the first account whose embedded login email matches
    ///
    /// Linear scan; email uniqueness is not enforced at signup, so ties go
    /// to whichever record the scan yields first.
    pub async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let accounts = self.list_accounts().await?;
        Ok(accounts
            .into_iter()
            .find(|account| account.preferences.login_credentials.email == email))
    }
}
