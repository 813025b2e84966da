//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "rafiq.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Rafiq configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate configuration content
        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        // Write to file
        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set backend to 'rest' or 'memory'");
                println!("  3. Export RAFIQ_API_KEY with your backend API key");
                println!("  4. Validate configuration: rafiq validate-config");
                println!("  5. Create the administrator account: rafiq bootstrap-admin");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Rafiq Configuration File
# Patient Companion Backend Toolkit

# Runtime environment (development, staging, production)
environment = "development"

# Backend target (rest or memory)
backend = "rest"  # rest | memory

[application]
log_level = "info"

[rest]
base_url = "https://api.rafiq.example"
api_key = "${RAFIQ_API_KEY}"
tls_verify = true
request_timeout_seconds = 30

[rest.retry]
max_retries = 3
initial_delay_ms = 1000
max_delay_ms = 30000

[storage]
path = ".rafiq/state.json"

[session]
users_collection = "users"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
local_max_size_mb = 100
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Rafiq Configuration File
# Patient Companion Backend Toolkit
#
# This file contains all configuration options with examples and explanations.
#
# Rafiq supports two backends:
#   - rest: the managed REST backend (identity provider + document store)
#   - memory: an in-process backend for tests and offline development
#
# Choose your backend by setting backend below.

# ============================================================================
# Environment Selection
# ============================================================================
# Runtime environment (development, staging, production)
#
# In production the memory backend is rejected, TLS verification is
# mandatory, and rest.api_key must be set.
environment = "development"

# Backend target (rest or memory)
backend = "rest"  # rest | memory

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# REST Backend Configuration
# ============================================================================
[rest]
# Base URL of the backend API
base_url = "https://api.rafiq.example"

# API key presented as a bearer token (use environment variable)
api_key = "${RAFIQ_API_KEY}"

# TLS/SSL verification (must stay true in production)
tls_verify = true

# Per-request timeout in seconds (1-300)
request_timeout_seconds = 30

# Retry policy for transient failures
[rest.retry]
# Maximum retry attempts
max_retries = 3

# Initial delay in milliseconds
initial_delay_ms = 1000

# Maximum delay in milliseconds
max_delay_ms = 30000

# Backoff multiplier
backoff_multiplier = 2.0

# ============================================================================
# Local Storage Configuration
# ============================================================================
[storage]
# Path of the JSON file backing the role cache
path = ".rafiq/state.json"

# ============================================================================
# Session Configuration
# ============================================================================
[session]
# Collection holding one profile document per account uid
users_collection = "users"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging
local_enabled = false

# Local log file path
local_path = "logs"

# Log rotation (daily or size)
local_rotation = "daily"

# Maximum log file size in MB
local_max_size_mb = 100
"#
        .to_string()
    }
}
