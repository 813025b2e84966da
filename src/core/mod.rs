//! Core business logic for Rafiq.
//!
//! This module contains the behavior the companion app is really about.
//!
//! # Modules
//!
//! - [`session`] - Session bridge: identity events in, snapshots and cached
//!   roles out
//! - [`roles`] - Locally cached role for instant routing on launch
//! - [`routing`] - Path parsing and role-gated view selection
//! - [`phone`] - Contact number normalization for WhatsApp deep links
//! - [`bootstrap`] - First-run admin provisioning
//!
//! # Session Workflow
//!
//! The typical session lifecycle:
//!
//! 1. **Subscribe**: The bridge subscribes to identity-provider session events
//! 2. **Publish**: Each change is published immediately with the loading flag
//!    raised
//! 3. **Resolve**: The user's profile document is fetched and the role cache
//!    refreshed (patient and doctor roles only)
//! 4. **Settle**: The loading flag drops; routing can trust the snapshot
//! 5. **Logout**: Sign-out goes through the provider first, then the cached
//!    role is forgotten
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rafiq::adapters::backend::create_backend;
//! use rafiq::adapters::storage::FileStore;
//! use rafiq::config::load_config;
//! use rafiq::core::roles::RoleCache;
//! use rafiq::core::session::SessionBridge;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("rafiq.toml")?;
//! let (identity, documents) = create_backend(&config)?;
//! let roles = RoleCache::new(Arc::new(FileStore::new(&config.storage.path)));
//!
//! let handle = SessionBridge::new(identity, documents, roles).start();
//! let snapshot = handle.settled().await;
//! println!("signed in: {}", snapshot.is_signed_in());
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod phone;
pub mod roles;
pub mod routing;
pub mod session;
