//! Configuration schema types
//!
//! This module defines the configuration structure for Rafiq as it maps onto
//! the TOML file.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Backend target selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendTarget {
    /// Managed REST backend
    Rest,
    /// In-memory backend (tests, offline development)
    Memory,
}

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main Rafiq configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RafiqConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Backend target (rest or memory)
    pub backend: BackendTarget,

    /// REST backend configuration (required if backend = rest)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest: Option<RestConfig>,

    /// Local storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Session bridge configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RafiqConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;

        // Both backend sections may be present in the file; only the active
        // one is validated.
        match self.backend {
            BackendTarget::Rest => {
                if let Some(ref config) = self.rest {
                    config.validate(&self.environment)?;
                } else {
                    return Err(
                        "rest configuration is required when backend = 'rest'".to_string()
                    );
                }
            }
            BackendTarget::Memory => {
                if self.environment == Environment::Production {
                    return Err(
                        "backend = 'memory' cannot be used in production environments".to_string(),
                    );
                }
            }
        }

        self.storage.validate()?;
        self.session.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Backoff multiplier
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
        }
    }
}

/// REST backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestConfig {
    /// Base URL of the backend, e.g. `https://api.rafiq.example`
    pub base_url: String,

    /// API key presented as a bearer token (optional outside production)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// **SECURITY WARNING**: Disabling TLS verification (setting to `false`)
    /// exposes the application to man-in-the-middle attacks and should ONLY be
    /// used in development/testing environments.
    ///
    /// - In **production** environments, this MUST be set to `true` (enforced
    ///   by validation)
    /// - Default: `true`
    #[serde(default = "default_true")]
    pub tls_verify: bool,

    /// Retry configuration
    #[serde(default)]
    pub retry: RetryConfig,
}

impl RestConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("rest.base_url cannot be empty".to_string());
        }

        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| format!("rest.base_url is not a valid URL: {e}"))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err("rest.base_url must start with http:// or https://".to_string());
        }

        if !(1..=300).contains(&self.request_timeout_seconds) {
            return Err(format!(
                "rest.request_timeout_seconds must be between 1 and 300, got {}",
                self.request_timeout_seconds
            ));
        }

        // Security: production talks to the real backend, authenticated and
        // over verified TLS.
        if *environment == Environment::Production {
            if !self.tls_verify {
                return Err(
                    "TLS certificate verification cannot be disabled in production environments. \
                     Set 'tls_verify = true', or use 'environment = \"development\"' or \
                     'environment = \"staging\"' for test setups."
                        .to_string(),
                );
            }
            if self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().is_empty())
                .unwrap_or(true)
            {
                return Err("rest.api_key is required in production environments".to_string());
            }
        }

        Ok(())
    }
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file backing the local key-value store
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.is_empty() {
            return Err("storage.path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Session bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Collection holding one profile document per account uid
    #[serde(default = "default_users_collection")]
    pub users_collection: String,
}

impl SessionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.users_collection.is_empty() {
            return Err("session.users_collection cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            users_collection: default_users_collection(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,

    /// Maximum log file size in MB
    #[serde(default = "default_local_max_size_mb")]
    pub local_max_size_mb: usize,
}

impl LoggingConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "size"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_max_size_mb == 0 {
            return Err("logging.local_max_size_mb must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
            local_max_size_mb: default_local_max_size_mb(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_retries() -> usize {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    30000
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_request_timeout_seconds() -> u64 {
    30
}

fn default_storage_path() -> String {
    ".rafiq/state.json".to_string()
}

fn default_users_collection() -> String {
    "users".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_local_max_size_mb() -> usize {
    100
}
