//! Configuration management for the ToolRent server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Admin authentication. The token is a per-deployment shared secret,
/// never a compiled-in literal.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub admin_token: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Outbound chat-webhook settings for operator notifications.
#[derive(Debug, Deserialize, Clone)]
pub struct NotifierConfig {
    pub webhook_url: String,
    pub channel: String,
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    /// When true, pending bookings also block overlapping requests.
    pub block_on_pending: bool,
}

/// Daily summary trigger: fires once per day at hour:minute in the
/// configured fixed UTC offset.
#[derive(Debug, Deserialize, Clone)]
pub struct SummaryConfig {
    pub enabled: bool,
    pub hour: u32,
    pub minute: u32,
    pub utc_offset_hours: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix TOOLRENT_)
            .add_source(
                Environment::with_prefix("TOOLRENT")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override database URL from DATABASE_URL env var if present
            .set_override_option(
                "database.url",
                env::var("DATABASE_URL").ok(),
            )?
            // Override admin token from ADMIN_TOKEN env var if present
            .set_override_option(
                "auth.admin_token",
                env::var("ADMIN_TOKEN").ok(),
            )?
            // Override webhook URL from WEBHOOK_URL env var if present
            .set_override_option(
                "notifier.webhook_url",
                env::var("WEBHOOK_URL").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://toolrent.db".to_string(),
            max_connections: 10,
            min_connections: 2,
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            channel: String::new(),
            enabled: false,
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            block_on_pending: false,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            hour: 9,
            minute: 0,
            utc_offset_hours: 3,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
