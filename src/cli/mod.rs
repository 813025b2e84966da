//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Rafiq using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Rafiq - Patient Companion Backend Toolkit
#[derive(Parser, Debug)]
#[command(name = "rafiq")]
#[command(version, about, long_about = None)]
#[command(author = "Rafiq Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "rafiq.toml", env = "RAFIQ_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RAFIQ_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or adopt the administrator account
    BootstrapAdmin(commands::bootstrap::BootstrapArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show backend connectivity and cached session state
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
