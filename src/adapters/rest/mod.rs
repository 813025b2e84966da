//! REST backend implementations.
//!
//! The production backend is a managed HTTP service exposing account,
//! session and document endpoints under one base URL. [`RestClient`] holds
//! the shared HTTP plumbing (base URL, API key, timeouts, retry policy);
//! [`RestIdentityProvider`] and [`RestDocumentStore`] implement the backend
//! traits on top of it.

pub mod client;
pub mod documents;
pub mod identity;
pub mod models;

pub use client::RestClient;
pub use documents::RestDocumentStore;
pub use identity::RestIdentityProvider;
