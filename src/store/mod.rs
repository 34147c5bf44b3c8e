//! Store layer
//!
//! Wraps the SQLite pool behind per-entity operations. Every entity lives in
//! its own key-value table whose `body` column holds the record's JSON
//! document; scans read every row and filter in code.

mod accounts;
mod notifications;
mod orders;

use crate::error::AppError;
use serde::de::DeserializeOwned;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Database handle shared by the account, order, and notification handlers
#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Open (or create) the SQLite database and apply migrations
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file
    ///
    /// # Returns
    /// * `Ok(Db)` if successful
    /// * `Err(AppError)` if connection or migration failed
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        // Ensure parent directory exists
        if let Some(parent) = PathBuf::from(db_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to create db directory: {}", e))
            })?;
        }

        // SQLite connection string format: sqlite://path/to/db.db
        let connection_string = if db_path.starts_with("sqlite:") {
            db_path.to_string()
        } else {
            format!("sqlite:{}", db_path)
        };

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid database path: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to connect to database: {}", e))
            })?;

        info!("Connected to SQLite database at: {}", db_path);

        let db = Self { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), AppError> {
        let migration_sql = include_str!("../../migrations/001_create_tables.sql");

        // Strip comment lines, then execute statement by statement
        let cleaned: String = migration_sql
            .lines()
            .filter(|line| !line.trim().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n");

        for statement in cleaned.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::Internal(anyhow::anyhow!("Migration failed: {}", e)))?;
        }

        Ok(())
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Decode a stored JSON body into its typed record
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Corrupt record in store: {}", e)))
}

/// Encode a record into the JSON body column
pub(crate) fn encode_body<T: serde::Serialize>(record: &T) -> Result<String, AppError> {
    serde_json::to_string(record)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode record: {}", e)))
}
