//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Rafiq configuration file.

use crate::config::load_config;
use crate::config::schema::BackendTarget;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Environment: {:?}", config.environment);
        println!("  Log Level: {}", config.application.log_level);

        match config.backend {
            BackendTarget::Rest => {
                if let Some(ref rest_config) = config.rest {
                    println!("  Backend: REST");
                    println!("  Base URL: {}", rest_config.base_url);
                    println!(
                        "  API Key: {}",
                        if rest_config.api_key.is_some() {
                            "configured"
                        } else {
                            "not set"
                        }
                    );
                    println!("  TLS Verify: {}", rest_config.tls_verify);
                    println!(
                        "  Request Timeout: {}s",
                        rest_config.request_timeout_seconds
                    );
                    println!("  Max Retries: {}", rest_config.retry.max_retries);
                }
            }
            BackendTarget::Memory => {
                println!("  Backend: Memory (offline)");
            }
        }

        println!("  Users Collection: {}", config.session.users_collection);
        println!("  Role Cache Path: {}", config.storage.path);
        println!();
        Ok(0)
    }
}
