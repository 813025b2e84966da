//! First-run admin provisioning.
//!
//! A fresh backend project has no admin account, and the admin panel is the
//! only place accounts can be managed from. This routine breaks the loop: it
//! creates (or adopts) the admin account and writes its role document, after
//! which the panel works.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::adapters::backend::traits::{DocumentStore, IdentityProvider};
use crate::config::SecretString;
use crate::core::session::DEFAULT_USERS_COLLECTION;
use crate::domain::ids::UserId;
use crate::domain::{IdentityError, RafiqError, Result, Role};
use crate::logging::redact::identifier_digest;

/// What a bootstrap run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOutcome {
    /// Uid of the admin account
    pub uid: UserId,
    /// True if the account was created by this run, false if it already
    /// existed and the credentials were verified instead
    pub created: bool,
}

/// Creates or adopts the admin account and stamps its role document.
pub struct AdminBootstrap {
    identity: Arc<dyn IdentityProvider>,
    documents: Arc<dyn DocumentStore>,
    users_collection: String,
}

impl AdminBootstrap {
    pub fn new(identity: Arc<dyn IdentityProvider>, documents: Arc<dyn DocumentStore>) -> Self {
        Self {
            identity,
            documents,
            users_collection: DEFAULT_USERS_COLLECTION.to_string(),
        }
    }

    /// Overrides the profile collection name.
    pub fn with_users_collection(mut self, collection: impl Into<String>) -> Self {
        self.users_collection = collection.into();
        self
    }

    /// Runs the bootstrap.
    ///
    /// Account creation falls back to signing in when the email is already
    /// registered, so re-running against a provisioned backend verifies the
    /// credentials and rewrites the role document instead of failing. With
    /// `dry_run` the account step still happens (it is how the uid is
    /// learned) but the document write is skipped.
    ///
    /// # Errors
    ///
    /// Any failure other than "email already exists" on the create step is
    /// returned as-is, as is a failed fallback sign-in or document write.
    pub async fn run(
        &self,
        email: &str,
        password: &SecretString,
        dry_run: bool,
    ) -> Result<BootstrapOutcome> {
        let email_digest = identifier_digest(email);

        let (user, created) = match self.identity.create_user(email, password).await {
            Ok(user) => {
                tracing::info!(
                    uid = %identifier_digest(user.uid.as_str()),
                    email = %email_digest,
                    "Created admin account"
                );
                (user, true)
            }
            Err(RafiqError::Identity(IdentityError::EmailAlreadyExists(_))) => {
                tracing::info!(
                    email = %email_digest,
                    "Admin account already exists, verifying credentials"
                );
                let user = self.identity.sign_in(email, password).await?;
                (user, false)
            }
            Err(e) => {
                tracing::error!(email = %email_digest, error = %e, "Admin account setup failed");
                return Err(e);
            }
        };

        if dry_run {
            tracing::info!(
                uid = %identifier_digest(user.uid.as_str()),
                "Dry run: skipping role document write"
            );
            return Ok(BootstrapOutcome {
                uid: user.uid,
                created,
            });
        }

        let attributes = json!({
            "uid": user.uid.as_str(),
            "role": Role::Admin.as_str(),
            "email": email,
            "createdAt": Utc::now().to_rfc3339(),
        });
        self.documents
            .merge_document(&self.users_collection, user.uid.as_str(), attributes)
            .await?;

        tracing::info!(
            uid = %identifier_digest(user.uid.as_str()),
            created = created,
            "Admin role document written"
        );
        Ok(BootstrapOutcome {
            uid: user.uid,
            created,
        })
    }
}
