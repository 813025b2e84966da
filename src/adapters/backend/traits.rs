//! Backend abstraction traits.
//!
//! This module defines the traits a managed backend must implement to work
//! with Rafiq: an identity provider for accounts and sessions, and a document
//! store for profile documents. The session bridge and the bootstrap routine
//! are written against these traits only.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::SecretString;
use crate::domain::user::AuthUser;
use crate::domain::Result;

use super::events::SessionWatcher;

/// Identity provider trait for account and session management
///
/// Implementations own the notion of "the current session" and announce every
/// session change through the watcher returned by [`subscribe`](Self::subscribe).
/// A successful sign-in or account creation establishes a session; a successful
/// sign-out ends it.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Subscribe to session changes
    ///
    /// The watcher observes the session state at subscription time and every
    /// change after it. Dropping the watcher ends the subscription; the
    /// provider keeps publishing regardless of how many watchers exist.
    fn subscribe(&self) -> SessionWatcher;

    /// The user of the current session, if one is established.
    fn current_user(&self) -> Option<AuthUser>;

    /// Sign in with an email/password pair
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidCredentials`] when the provider rejects
    /// the pair and [`IdentityError::AccountNotFound`] when no account matches
    /// the email.
    ///
    /// [`IdentityError::InvalidCredentials`]: crate::domain::IdentityError::InvalidCredentials
    /// [`IdentityError::AccountNotFound`]: crate::domain::IdentityError::AccountNotFound
    async fn sign_in(&self, email: &str, password: &SecretString) -> Result<AuthUser>;

    /// End the current session
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the sign-out; the session is
    /// then still considered established.
    async fn sign_out(&self) -> Result<()>;

    /// Create a new account and establish a session for it
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::EmailAlreadyExists`] when the email is taken.
    ///
    /// [`IdentityError::EmailAlreadyExists`]: crate::domain::IdentityError::EmailAlreadyExists
    async fn create_user(&self, email: &str, password: &SecretString) -> Result<AuthUser>;
}

/// Document store trait for profile documents
///
/// Documents are schemaless JSON objects addressed by collection name and
/// document id. Rafiq only ever reads whole documents and merge-writes
/// top-level attributes.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(document))` if found, `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails for reasons other than absence.
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Merge attributes into a document, creating it if absent
    ///
    /// `attributes` must be a JSON object; its top-level keys replace the
    /// document's top-level keys of the same name and all other keys are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected or `attributes` is not an
    /// object.
    async fn merge_document(&self, collection: &str, id: &str, attributes: Value) -> Result<()>;
}
