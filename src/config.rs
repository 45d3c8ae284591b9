//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_IDENTITY_WAIT_MS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SESSION_COOKIE_NAME, DEFAULT_UNIVERSITY_EMAIL_DOMAIN, DEFAULT_UPSTREAM_TIMEOUT_SECS,
};
use crate::middleware::guard::RolePolicy;

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub session: SessionConfig,
    pub access: AccessConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Marketplace API configuration
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the marketplace REST API, without a trailing slash
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Session cookie and identity resolution configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_secure: bool,
    /// Upper bound on how long a guarded request waits for the identity
    pub identity_wait_ms: u64,
}

/// Access control configuration
#[derive(Debug, Clone)]
pub struct AccessConfig {
    pub university_email_domain: String,
    pub role_policy: RolePolicy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            upstream: UpstreamConfig::from_env()?,
            session: SessionConfig::from_env()?,
            access: AccessConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl UpstreamConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("MARKETPLACE_API_URL")
            .map_err(|_| ConfigError::Missing("MARKETPLACE_API_URL".to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("UPSTREAM_TIMEOUT_SECS".to_string()))?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl SessionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE_NAME.to_string()),
            cookie_secure: env::var("SESSION_COOKIE_SECURE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SESSION_COOKIE_SECURE".to_string()))?,
            identity_wait_ms: env::var("IDENTITY_WAIT_MS")
                .unwrap_or_else(|_| DEFAULT_IDENTITY_WAIT_MS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("IDENTITY_WAIT_MS".to_string()))?,
        })
    }

    pub fn identity_wait(&self) -> Duration {
        Duration::from_millis(self.identity_wait_ms)
    }
}

impl AccessConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            university_email_domain: env::var("UNIVERSITY_EMAIL_DOMAIN")
                .unwrap_or_else(|_| DEFAULT_UNIVERSITY_EMAIL_DOMAIN.to_string()),
            role_policy: env::var("GUARD_ROLE_POLICY")
                .unwrap_or_else(|_| "privileged".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GUARD_ROLE_POLICY".to_string()))?,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_durations() {
        let session = SessionConfig {
            cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            cookie_secure: false,
            identity_wait_ms: 250,
        };
        assert_eq!(session.identity_wait(), Duration::from_millis(250));

        let upstream = UpstreamConfig {
            base_url: "http://localhost:5000/api/v1".to_string(),
            timeout_secs: 3,
        };
        assert_eq!(upstream.timeout(), Duration::from_secs(3));
    }
}
