//! Backend abstraction layer.
//!
//! Rafiq stores accounts and profile documents in a managed backend service.
//! This module defines the traits the rest of the crate programs against and
//! the factory that picks an implementation from configuration:
//!
//! - [`IdentityProvider`]: accounts, sessions and session-change events
//! - [`DocumentStore`]: schemaless JSON documents with merge writes
//! - [`create_backend`]: builds both from a [`RafiqConfig`](crate::config::RafiqConfig)
//!
//! Implementations live in [`crate::adapters::rest`] (production) and
//! [`crate::adapters::memory`] (tests, offline development).

pub mod events;
pub mod factory;
pub mod traits;

pub use events::SessionWatcher;
pub use factory::create_backend;
pub use traits::{DocumentStore, IdentityProvider};
