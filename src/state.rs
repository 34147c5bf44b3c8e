//! Application state management
//!
//! The store handle and notification client are constructed once at startup
//! and injected into handlers through axum's `State` extractor. Handlers
//! hold no state of their own between invocations.

use crate::notifier::Notifier;
use crate::store::Db;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Store handle backing all three route groups
    pub db: Db,
    /// Client for the cross-service notification call
    pub notifier: Notifier,
}

impl AppState {
    /// Build the state from its injected dependencies
    pub fn new(db: Db, notifier: Notifier) -> Self {
        Self { db, notifier }
    }
}
