//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated
//! from environment variables. The remote API credential is the only
//! mandatory value; everything else has a sensible default.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{Error, Result};

/// Default public endpoint of the Codestore platform API.
pub const DEFAULT_API_URL: &str = "https://api.codestore.dev";

/// Environment variable holding the mandatory API token.
pub const API_TOKEN_ENV: &str = "CODESTORE_API_TOKEN";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CODESTORE_API_URL";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Remote API endpoint and credential.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Remote API configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the remote API, without a trailing slash.
    pub base_url: String,

    /// Bearer token attached to every request.
    pub token: String,
}

/// Custom Debug implementation to redact the credential from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "codestore-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
                token: String::new(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails when the mandatory API token is absent; the adapter cannot
    /// authenticate a single request without it.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        let token = std::env::var(API_TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::config(format!(
                    "{API_TOKEN_ENV} is not set; obtain a token from your Codestore workspace settings"
                ))
            })?;
        config.api.token = token;

        match std::env::var(API_URL_ENV) {
            Ok(url) => config.api.base_url = url.trim_end_matches('/').to_string(),
            Err(_) => {
                warn!("{} not set, using {}", API_URL_ENV, DEFAULT_API_URL);
            }
        }

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_token_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(API_TOKEN_ENV, "test_token_12345");
            std::env::remove_var(API_URL_ENV);
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.token, "test_token_12345");
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        unsafe {
            std::env::remove_var(API_TOKEN_ENV);
        }
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var(API_TOKEN_ENV);
        }
        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(API_TOKEN_ENV));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(API_TOKEN_ENV, "t");
            std::env::set_var(API_URL_ENV, "https://staging.codestore.dev/");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.base_url, "https://staging.codestore.dev");
        unsafe {
            std::env::remove_var(API_TOKEN_ENV);
            std::env::remove_var(API_URL_ENV);
        }
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let api = ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            token: "super_secret_token".to_string(),
        };
        let debug_str = format!("{:?}", api);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
