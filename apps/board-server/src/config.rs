//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use board_infra::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

const DEFAULT_DATABASE_URL: &str = "sqlite://data.sqlite?mode=rwc";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut database = DatabaseConfig::new(
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        );
        if let Some(secs) = env::var("DB_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            database.connect_timeout = Duration::from_secs(secs);
        }
        database.sql_logging = env::var("DB_SQL_LOGGING")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database,
            telemetry: TelemetryConfig::from_env(),
        }
    }
}
