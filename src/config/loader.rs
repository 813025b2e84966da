//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{BackendTarget, Environment, RafiqConfig};
use super::secret::secret_string;
use crate::domain::errors::RafiqError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RafiqConfig
/// 4. Applies environment variable overrides (RAFIQ_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use rafiq::config::loader::load_config;
///
/// let config = load_config("rafiq.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RafiqConfig> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(RafiqError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        RafiqError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: RafiqConfig = toml::from_str(&contents)
        .map_err(|e| RafiqError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config)?;

    // Validate configuration
    config.validate().map_err(|e| {
        RafiqError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched so documentation examples inside the
/// file never fail the load.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        // Process non-comment lines for env var substitution
        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(RafiqError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using RAFIQ_* prefix
///
/// Environment variables follow the pattern: RAFIQ_<SECTION>_<KEY>
/// For example: RAFIQ_REST_BASE_URL, RAFIQ_SESSION_USERS_COLLECTION
///
/// # Arguments
///
/// * `config` - Mutable reference to the configuration to update
fn apply_env_overrides(config: &mut RafiqConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("RAFIQ_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Environment and backend selection take enum values; an unknown value
    // is a hard error rather than a silent fallback.
    if let Ok(val) = std::env::var("RAFIQ_ENVIRONMENT") {
        config.environment = match val.as_str() {
            "development" => Environment::Development,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                return Err(RafiqError::Configuration(format!(
                    "Invalid RAFIQ_ENVIRONMENT value '{}'. Must be one of: development, staging, production",
                    other
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("RAFIQ_BACKEND") {
        config.backend = match val.as_str() {
            "rest" => BackendTarget::Rest,
            "memory" => BackendTarget::Memory,
            other => {
                return Err(RafiqError::Configuration(format!(
                    "Invalid RAFIQ_BACKEND value '{}'. Must be one of: rest, memory",
                    other
                )))
            }
        };
    }

    // REST overrides (only if a rest section is configured)
    if let Some(ref mut rest_config) = config.rest {
        if let Ok(val) = std::env::var("RAFIQ_REST_BASE_URL") {
            rest_config.base_url = val;
        }
        if let Ok(val) = std::env::var("RAFIQ_REST_API_KEY") {
            rest_config.api_key = Some(secret_string(val));
        }
        if let Ok(val) = std::env::var("RAFIQ_REST_TLS_VERIFY") {
            rest_config.tls_verify = val.parse().unwrap_or(true);
        }
        if let Ok(val) = std::env::var("RAFIQ_REST_REQUEST_TIMEOUT_SECONDS") {
            if let Ok(seconds) = val.parse() {
                rest_config.request_timeout_seconds = seconds;
            }
        }
    }

    // Storage overrides
    if let Ok(val) = std::env::var("RAFIQ_STORAGE_PATH") {
        config.storage.path = val;
    }

    // Session overrides
    if let Ok(val) = std::env::var("RAFIQ_SESSION_USERS_COLLECTION") {
        config.session.users_collection = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("RAFIQ_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("RAFIQ_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
