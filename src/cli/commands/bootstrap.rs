//! Bootstrap-admin command implementation
//!
//! This module implements the `bootstrap-admin` command which creates the
//! administrator account on the identity provider and writes its profile
//! document, or adopts an account that already exists.

use crate::config::{load_config, secret_string};
use crate::core::bootstrap::AdminBootstrap;
use crate::domain::{IdentityError, RafiqError};
use clap::Args;
use rand::distributions::Alphanumeric;
use rand::Rng;

const GENERATED_PASSWORD_LENGTH: usize = 24;

/// Arguments for the bootstrap-admin command
#[derive(Args, Debug)]
pub struct BootstrapArgs {
    /// Email address of the administrator account
    #[arg(long, env = "RAFIQ_ADMIN_EMAIL")]
    pub email: String,

    /// Password for the administrator account
    #[arg(long, env = "RAFIQ_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Generate a random password and print it once
    #[arg(long, conflicts_with = "password")]
    pub generate_password: bool,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - resolve the account without writing the profile document
    #[arg(long)]
    pub dry_run: bool,
}

impl BootstrapArgs {
    /// Execute the bootstrap-admin command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting bootstrap-admin command");

        println!("📝 Bootstrapping administrator account");
        println!();

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if !self.email.contains('@') {
            println!("❌ '{}' does not look like an email address", self.email);
            return Ok(2);
        }

        // Resolve the password
        let password = if self.generate_password {
            let generated = generate_password();
            println!("🔑 Generated password: {generated}");
            println!("   Store it now; it is printed once and never persisted.");
            println!();
            generated
        } else {
            match &self.password {
                Some(p) => p.clone(),
                None => {
                    println!("❌ No password given");
                    println!("   Pass --password, set RAFIQ_ADMIN_PASSWORD, or use --generate-password");
                    return Ok(2);
                }
            }
        };
        let password = secret_string(password);

        if self.dry_run {
            tracing::info!("Dry run mode enabled - profile document will not be written");
            println!("🔍 DRY RUN MODE - No profile document will be written");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !self.dry_run {
            println!("Bootstrap Configuration:");
            println!("  Email: {}", self.email);
            println!("  Backend: {:?}", config.backend);
            println!("  Users collection: {}", config.session.users_collection);
            println!();
            print!("Proceed with bootstrap? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Bootstrap cancelled.");
                return Ok(0);
            }
            println!();
        }

        // Create backend adapters
        let (identity, documents) = match crate::adapters::backend::create_backend(&config) {
            Ok(b) => b,
            Err(e) => {
                println!("❌ Failed to create backend adapters");
                println!("   Error: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        let bootstrap = AdminBootstrap::new(identity, documents)
            .with_users_collection(&config.session.users_collection);

        match bootstrap.run(&self.email, &password, self.dry_run).await {
            Ok(outcome) => {
                if outcome.created {
                    println!("✅ Administrator account created");
                } else {
                    println!("✅ Existing account adopted as administrator");
                }
                println!("   Uid: {}", outcome.uid);
                if self.dry_run {
                    println!("   (dry run - profile document not written)");
                }
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Bootstrap failed");
                println!("   Error: {e}");
                match e {
                    RafiqError::Identity(
                        IdentityError::ConnectionFailed(_) | IdentityError::Timeout(_),
                    ) => Ok(4), // Connection error exit code
                    RafiqError::Identity(IdentityError::InvalidCredentials(_)) => {
                        println!("   The account already exists and the given password does not match.");
                        Ok(5)
                    }
                    _ => Ok(5), // Fatal error exit code
                }
            }
        }
    }
}

/// Generate a random alphanumeric password
fn generate_password() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}
