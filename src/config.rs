//! Configuration module
//!
//! TOML application config. The file path comes from `$TRIPNEST_CONFIG`
//! or the platform config directory; a missing or broken file falls back
//! to defaults so the service still boots.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Configuration loading failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub security: SecurityConfig,
    pub admin: AdminConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            shutdown_timeout: 30,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SeaORM connection URL
    pub url: String,
}

impl DatabaseSettings {
    /// Effective connection URL. `$DATABASE_URL` beats the config file.
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./tripnest.db?mode=rwc".to_string(),
        }
    }
}

/// Token and session configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// HMAC secret for JWT signing
    pub jwt_secret: String,
    /// Access token lifetime in minutes
    pub access_token_minutes: i64,
    /// Refresh token lifetime in days
    pub refresh_token_days: i64,
    /// Web session lifetime in days
    pub session_ttl_days: i64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "super-secret-key-change-in-production".to_string(),
            access_token_minutes: 60,
            refresh_token_days: 7,
            session_ttl_days: 14,
        }
    }
}

/// Seed account created on first boot when the users table is empty
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            email: "admin@tripnest.local".to_string(),
            password: "admin123".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
    /// Output format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Default config file path (`~/.config/tripnest/config.toml` on Linux).
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripnest")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_file_parses() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 9999
            shutdown_timeout = 5

            [database]
            url = "sqlite::memory:"

            [security]
            jwt_secret = "s3cret"
            access_token_minutes = 15
            refresh_token_days = 30
            session_ttl_days = 7

            [admin]
            username = "root"
            email = "root@example.com"
            password = "hunter2"

            [logging]
            level = "debug"
            format = "json"
        "#;

        let cfg: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.server.address(), "127.0.0.1:9999");
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.security.access_token_minutes, 15);
        assert_eq!(cfg.security.session_ttl_days, 7);
        assert_eq!(cfg.admin.username, "root");
        assert_eq!(cfg.logging.format, "json");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg: AppConfig = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.security.access_token_minutes, 60);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.security.session_ttl_days, 14);
        assert_eq!(cfg.admin.username, "admin");
    }

    #[test]
    fn default_path_points_at_tripnest() {
        let path = default_config_path();
        assert!(path.ends_with("tripnest/config.toml"));
    }
}
