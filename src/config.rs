//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Store configuration
    pub database: DatabaseConfig,
    /// Cross-service notification configuration
    pub notifier: NotifierConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Store configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: String,
}

/// Cross-service notification configuration
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Base URL of the notification service the order handlers call
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            database: DatabaseConfig {
                path: env::var("DATABASE_PATH").unwrap_or_else(|_| {
                    // Default to ~/.tigerchow or current directory
                    if let Some(home) = env::var_os("HOME") {
                        format!("{}/.tigerchow/tigerchow.db", home.to_string_lossy())
                    } else {
                        "tigerchow.db".to_string()
                    }
                }),
            },
            notifier: NotifierConfig {
                base_url: env::var("NOTIFICATION_SERVICE_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
