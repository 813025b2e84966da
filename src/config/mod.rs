//! Configuration management for Rafiq.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Rafiq uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rafiq::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("rafiq.toml")?;
//!
//! // Access configuration sections
//! println!("Backend: {:?}", config.backend);
//! if let Some(rest) = &config.rest {
//!     println!("REST base URL: {}", rest.base_url);
//! }
//! println!("Role cache path: {}", config.storage.path);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`RestConfig`] - REST backend connection and authentication
//! - [`RetryConfig`] - Retry policy for transient backend failures
//! - [`StorageConfig`] - Local key-value store backing the role cache
//! - [`SessionConfig`] - Session bridge settings (profile collection)
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "production"
//! backend = "rest"
//!
//! [application]
//! log_level = "info"
//!
//! [rest]
//! base_url = "https://api.rafiq.example"
//! api_key = "${RAFIQ_API_KEY}"
//!
//! [rest.retry]
//! max_retries = 3
//!
//! [session]
//! users_collection = "users"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution:
//!
//! ```bash
//! export RAFIQ_API_KEY="secret-key"
//! ```
//!
//! Individual settings can also be overridden with `RAFIQ_*` variables,
//! for example `RAFIQ_REST_BASE_URL` or `RAFIQ_SESSION_USERS_COLLECTION`.
//!
//! # Validation
//!
//! Configuration is validated on load:
//!
//! ```rust,no_run
//! use rafiq::config::load_config;
//!
//! # fn example() {
//! match load_config("rafiq.toml") {
//!     Ok(config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, BackendTarget, Environment, LoggingConfig, RafiqConfig, RestConfig,
    RetryConfig, SessionConfig, StorageConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
