//! External system integrations for Rafiq.
//!
//! This module provides adapters for the systems the companion talks to:
//!
//! - [`backend`] - Backend abstraction layer (trait-based) and factory
//! - [`rest`] - Managed REST backend implementation
//! - [`memory`] - In-memory backend for tests and offline runs
//! - [`storage`] - Local key-value storage for the role cache
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with in-memory implementations. The backend layer uses
//! trait-based abstraction so the session bridge and bootstrap routine never
//! depend on a concrete transport.
//!
//! # Backend Adapters
//!
//! Both backend halves are created together from configuration:
//!
//! ```rust,no_run
//! use rafiq::adapters::backend::create_backend;
//! use rafiq::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("rafiq.toml")?;
//! let (identity, documents) = create_backend(&config)?;
//! // Hand both to the session bridge
//! # Ok(())
//! # }
//! ```
//!
//! # Local Storage
//!
//! The role cache persists through [`storage::KeyValueStore`]; production uses
//! [`storage::FileStore`] (one JSON file), tests use [`storage::MemoryStore`].

pub mod backend;
pub mod memory;
pub mod rest;
pub mod storage;
