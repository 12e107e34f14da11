//! Configuration for the content backend and the sync client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Marker left in the endpoint setting until someone deploys a backend.
pub const ENDPOINT_PLACEHOLDER: &str = "PASTE_YOUR_CONTENT_ENDPOINT_URL_HERE";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.variable, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Backend configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key guarding write routes (required in production)
    pub api_psk: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Largest accepted request body; documents may embed images as data URLs
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_psk = lookup("BLM_API_PSK").filter(|s| !s.is_empty());

        let db_path = lookup("BLM_DB_PATH")
            .unwrap_or_else(|| "./data/content.sqlite".to_string())
            .into();

        let bind_addr = lookup("BLM_BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| ConfigError {
                variable: "BLM_BIND_ADDR",
                message: format!("{}", e),
            })?;

        let log_level = lookup("BLM_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let max_body_bytes = match lookup("BLM_MAX_BODY_BYTES") {
            Some(raw) => raw.parse().map_err(|e| ConfigError {
                variable: "BLM_MAX_BODY_BYTES",
                message: format!("{}", e),
            })?,
            None => 16 * 1024 * 1024,
        };

        Ok(Self {
            api_psk,
            db_path,
            bind_addr,
            log_level,
            max_body_bytes,
        })
    }
}

/// How write responses are interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    /// Read the response and require `{"success": true}`.
    #[default]
    Strict,
    /// Compatibility fallback for backends whose write responses end in a
    /// cross-origin redirect: the response is not inspected and a redirect
    /// failure counts as success. Application-level failures go unnoticed.
    BestEffort,
}

impl WritePolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(WritePolicy::Strict),
            "best-effort" | "best_effort" => Some(WritePolicy::BestEffort),
            _ => None,
        }
    }
}

/// Sync client configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Content endpoint; GET reads the document, POST writes actions
    pub endpoint: String,
    /// Aspiration form endpoint
    pub aspiration_endpoint: Option<String>,
    /// Sent as `x-api-key` on writes
    pub api_key: Option<String>,
    pub write_policy: WritePolicy,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            aspiration_endpoint: None,
            api_key: None,
            write_policy: WritePolicy::Strict,
            timeout: Duration::from_secs(30),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint =
            lookup("BLM_ENDPOINT_URL").unwrap_or_else(|| ENDPOINT_PLACEHOLDER.to_string());

        let write_policy = match lookup("BLM_WRITE_POLICY") {
            Some(raw) => WritePolicy::from_str(&raw).ok_or_else(|| ConfigError {
                variable: "BLM_WRITE_POLICY",
                message: format!("expected `strict` or `best-effort`, got `{}`", raw),
            })?,
            None => WritePolicy::Strict,
        };

        let timeout = match lookup("BLM_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.parse().map_err(|e| ConfigError {
                variable: "BLM_REQUEST_TIMEOUT_SECS",
                message: format!("{}", e),
            })?),
            None => Duration::from_secs(30),
        };

        Ok(Self {
            endpoint,
            aspiration_endpoint: lookup("BLM_ASPIRATION_URL").filter(|s| !s.is_empty()),
            api_key: lookup("BLM_API_PSK").filter(|s| !s.is_empty()),
            write_policy,
            timeout,
        })
    }

    /// The endpoint URL, or why it cannot be used.
    pub fn endpoint(&self) -> Result<&str, String> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err("Content endpoint URL is not configured (BLM_ENDPOINT_URL)".to_string());
        }
        if endpoint.contains("PASTE_YOUR_") {
            return Err(
                "Content endpoint URL is still the placeholder; set BLM_ENDPOINT_URL".to_string(),
            );
        }
        Ok(endpoint)
    }
}
