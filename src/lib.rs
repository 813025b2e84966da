// Rafiq - Patient Companion Backend Toolkit
// Copyright (c) 2026 Rafiq Contributors
// Licensed under the MIT License

//! # Rafiq - Patient Companion Backend Toolkit
//!
//! Rafiq is the backend toolkit for an Arabic-language patient companion
//! application. It keeps the client session in sync with an external identity
//! provider, resolves and caches the account role that gates the doctor and
//! admin surfaces, and carries the domain helpers the app renders with:
//! WhatsApp-ready phone normalization for Egyptian and Saudi numbers, Arabic
//! specialization labels, and medication schedule presets.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Bridging** identity provider sessions into watchable snapshots
//! - **Resolving** account roles from profile documents, with a local cache
//!   so returning users route instantly
//! - **Routing** paths to views, with doctor and admin surfaces gated by role
//! - **Normalizing** free-form phone numbers into `wa.me`-compatible form
//! - **Bootstrapping** the administrator account from the command line
//!
//! ## Architecture
//!
//! Rafiq follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (session, roles, routing, phone, bootstrap)
//! - [`adapters`] - External integrations (REST backend, memory backend,
//!   local storage)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use rafiq::adapters::memory::{MemoryDocumentStore, MemoryIdentityProvider};
//! use rafiq::adapters::storage::MemoryStore;
//! use rafiq::core::roles::RoleCache;
//! use rafiq::core::session::SessionBridge;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let identity = Arc::new(MemoryIdentityProvider::new());
//!     let documents = Arc::new(MemoryDocumentStore::new());
//!     let roles = RoleCache::new(Arc::new(MemoryStore::new()));
//!
//!     // The bridge follows every session change until the handle is dropped
//!     let handle = SessionBridge::new(identity, documents, roles).start();
//!
//!     let snapshot = handle.settled().await;
//!     println!("signed in: {}", snapshot.is_signed_in());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! ### Phone Normalization
//!
//! Free-form numbers from profile documents become tappable WhatsApp links:
//!
//! ```rust
//! use rafiq::core::phone::format_phone_number;
//!
//! assert_eq!(format_phone_number(Some("0101 234 5678")), "+201012345678");
//! assert_eq!(format_phone_number(Some("0551234567")), "+966551234567");
//! assert_eq!(format_phone_number(None), "غير متوفر");
//! ```
//!
//! ### Role-Gated Routing
//!
//! Paths resolve to views only when the role allows them:
//!
//! ```rust
//! use rafiq::core::routing::{parse_path, select_view, View};
//! use rafiq::domain::Role;
//!
//! let route = parse_path("/doctor/patient/u-42");
//! assert!(matches!(select_view(&route, Some(Role::Doctor)), View::DoctorPatient { .. }));
//! assert!(matches!(select_view(&route, Some(Role::Patient)), View::Home));
//! ```
//!
//! ## Error Handling
//!
//! Rafiq uses the [`domain::RafiqError`] type for all errors:
//!
//! ```rust,no_run
//! use rafiq::domain::RafiqError;
//!
//! fn example() -> Result<(), RafiqError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = rafiq::config::load_config("rafiq.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Rafiq uses structured logging with the `tracing` crate. Account
//! identifiers are never logged raw; [`logging::identifier_digest`] produces
//! a short stable digest instead:
//!
//! ```rust
//! use rafiq::logging::identifier_digest;
//!
//! tracing::info!(uid = %identifier_digest("user-1042"), "Session established");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
