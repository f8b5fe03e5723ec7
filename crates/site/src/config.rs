//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SITE_HOST` - Bind address (default: 0.0.0.0)
//! - `SITE_PORT` - Listen port (default: 5000)
//! - `SITE_STATIC_DIR` - Built client directory served for non-API paths
//! - `SITE_SEED_CONTENT` - Load the default content on start (default: true)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.0)
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
///
/// Implements `Debug` manually to redact the Sentry DSN.
#[derive(Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Built client assets; `None` disables static serving
    pub static_dir: Option<PathBuf>,
    /// Whether a fresh store gets the default content
    pub seed_content: bool,
    /// Sentry DSN for error tracking (contains the project key)
    pub sentry_dsn: Option<SecretString>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
    /// Emit JSON logs instead of text
    pub json_logs: bool,
}

impl std::fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .field("seed_content", &self.seed_content)
            .field("sentry_dsn", &self.sentry_dsn.as_ref().map(|_| "[REDACTED]"))
            .field("sentry_environment", &self.sentry_environment)
            .field("sentry_sample_rate", &self.sentry_sample_rate)
            .field("sentry_traces_sample_rate", &self.sentry_traces_sample_rate)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            static_dir: None,
            seed_content: true,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
            json_logs: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SITE_HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SITE_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;
        let static_dir = get_optional_env("SITE_STATIC_DIR").map(PathBuf::from);
        let seed_content = parse_bool(
            "SITE_SEED_CONTENT",
            &get_env_or_default("SITE_SEED_CONTENT", "true"),
        )?;

        let sentry_dsn = get_optional_env("SENTRY_DSN").map(SecretString::from);
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = parse_rate(
            "SENTRY_SAMPLE_RATE",
            &get_env_or_default("SENTRY_SAMPLE_RATE", "1.0"),
        )?;
        let sentry_traces_sample_rate = parse_rate(
            "SENTRY_TRACES_SAMPLE_RATE",
            &get_env_or_default("SENTRY_TRACES_SAMPLE_RATE", "0.0"),
        )?;
        let json_logs =
            get_optional_env("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"));

        Ok(Self {
            host,
            port,
            static_dir,
            seed_content,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
            json_logs,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse a boolean flag (`true`/`false`/`1`/`0`/`yes`/`no`).
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

/// Parse a sample rate in `[0, 1]`.
fn parse_rate(key: &str, value: &str) -> Result<f32, ConfigError> {
    let rate = value
        .trim()
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ));
    }
    Ok(rate)
}
