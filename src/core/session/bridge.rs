//! The session bridge: identity events in, snapshots and cached roles out.
//!
//! The bridge subscribes to the identity provider and, for every session
//! change, fetches the user's profile document and refreshes the role cache
//! before marking the snapshot as settled. Consumers watch the snapshot; they
//! never talk to the backend about sessions themselves.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::adapters::backend::traits::{DocumentStore, IdentityProvider};
use crate::core::roles::RoleCache;
use crate::domain::user::{AuthUser, UserProfile};
use crate::domain::{Result, Role};
use crate::logging::redact::identifier_digest;

use super::state::SessionSnapshot;

/// Collection holding one profile document per account uid.
pub const DEFAULT_USERS_COLLECTION: &str = "users";

/// Wires an identity provider, a document store and the role cache together.
///
/// Construction is passive; [`start`](Self::start) subscribes and spawns the
/// processing task.
pub struct SessionBridge {
    identity: Arc<dyn IdentityProvider>,
    documents: Arc<dyn DocumentStore>,
    roles: RoleCache,
    users_collection: String,
}

impl SessionBridge {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        documents: Arc<dyn DocumentStore>,
        roles: RoleCache,
    ) -> Self {
        Self {
            identity,
            documents,
            roles,
            users_collection: DEFAULT_USERS_COLLECTION.to_string(),
        }
    }

    /// Overrides the profile collection name (staging environments share a
    /// backend project and namespace their collections).
    pub fn with_users_collection(mut self, collection: impl Into<String>) -> Self {
        self.users_collection = collection.into();
        self
    }

    /// Subscribes to the identity provider and starts processing session
    /// changes.
    ///
    /// Changes are handled strictly one at a time: publish the new user with
    /// the loading flag raised, resolve the role, then lower the flag. A
    /// change arriving mid-resolution is picked up afterwards (intermediate
    /// changes coalesce to the latest).
    pub fn start(self) -> SessionHandle {
        let identity = Arc::clone(&self.identity);
        let roles = self.roles.clone();
        let mut watcher = self.identity.subscribe();
        let (tx, rx) = watch::channel(SessionSnapshot::initial());

        let task = tokio::spawn(async move {
            loop {
                let user = watcher.current();
                tx.send_replace(SessionSnapshot {
                    user: user.clone(),
                    loading: true,
                });

                if let Some(user) = &user {
                    self.resolve_role(user).await;
                }

                tx.send_replace(SessionSnapshot {
                    user,
                    loading: false,
                });

                if !watcher.changed().await {
                    break;
                }
            }
            tracing::debug!("Session event source closed, bridge task exiting");
        });

        SessionHandle {
            snapshot: rx,
            identity,
            roles,
            task,
        }
    }

    /// Fetches the user's profile and refreshes the role cache.
    ///
    /// Failures end up in the log, never in the snapshot: a missing document,
    /// an unrecognized role or an unreachable backend must not block sign-in.
    /// Only patient and doctor roles are cached; the admin role is verified
    /// against the backend on every use and is deliberately never persisted
    /// on the device.
    async fn resolve_role(&self, user: &AuthUser) {
        let uid_digest = identifier_digest(user.uid.as_str());

        match self
            .documents
            .get_document(&self.users_collection, user.uid.as_str())
            .await
        {
            Ok(Some(document)) => match UserProfile::from_document(&document).role {
                Some(role @ (Role::Patient | Role::Doctor)) => {
                    if let Err(e) = self.roles.set(role) {
                        tracing::warn!(uid = %uid_digest, error = %e, "Failed to persist role");
                    } else {
                        tracing::debug!(uid = %uid_digest, role = %role, "Role cached");
                    }
                }
                Some(Role::Admin) => {
                    tracing::debug!(uid = %uid_digest, "Admin role is not cached");
                }
                None => {
                    tracing::debug!(uid = %uid_digest, "Profile has no usable role");
                }
            },
            Ok(None) => {
                tracing::debug!(uid = %uid_digest, "No profile document");
            }
            Err(e) => {
                tracing::warn!(uid = %uid_digest, error = %e, "Role lookup failed, continuing");
            }
        }
    }
}

/// Live handle to a running bridge.
///
/// Dropping the handle stops the bridge; [`stop`](Self::stop) does the same
/// but waits for the task to finish unwinding.
pub struct SessionHandle {
    snapshot: watch::Receiver<SessionSnapshot>,
    identity: Arc<dyn IdentityProvider>,
    roles: RoleCache,
    task: JoinHandle<()>,
}

impl SessionHandle {
    /// The latest published snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.borrow().clone()
    }

    /// A receiver for waiting on snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot.clone()
    }

    /// Waits until the snapshot satisfies `predicate` and returns it.
    ///
    /// If the bridge stops first, returns the last snapshot it published.
    pub async fn wait_until<F>(&self, predicate: F) -> SessionSnapshot
    where
        F: FnMut(&SessionSnapshot) -> bool,
    {
        let mut rx = self.snapshot.clone();
        if let Ok(snapshot) = rx.wait_for(predicate).await {
            return snapshot.clone();
        }
        // Sender gone: the last published value is all there will ever be.
        let snapshot = rx.borrow().clone();
        snapshot
    }

    /// Waits until the current session change has been fully resolved.
    pub async fn settled(&self) -> SessionSnapshot {
        self.wait_until(|snapshot| !snapshot.loading).await
    }

    /// Signs out and forgets the cached role.
    ///
    /// The provider call comes first and its failure is returned as-is; on
    /// failure the session (and the cache) are left untouched so the caller
    /// can retry. Cache cleanup failure is logged but does not fail the
    /// logout, the session itself is already gone.
    pub async fn logout(&self) -> Result<()> {
        self.identity.sign_out().await?;
        if let Err(e) = self.roles.clear() {
            tracing::warn!(error = %e, "Failed to clear cached role after sign-out");
        }
        Ok(())
    }

    /// Stops the bridge and waits for its task to exit.
    pub async fn stop(mut self) {
        self.task.abort();
        let _ = (&mut self.task).await;
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemoryDocumentStore, MemoryIdentityProvider};
    use crate::adapters::storage::MemoryStore;
    use crate::config::secret_string;
    use serde_json::json;

    struct Fixture {
        identity: Arc<MemoryIdentityProvider>,
        documents: Arc<MemoryDocumentStore>,
        roles: RoleCache,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                identity: Arc::new(MemoryIdentityProvider::new()),
                documents: Arc::new(MemoryDocumentStore::new()),
                roles: RoleCache::new(Arc::new(MemoryStore::new())),
            }
        }

        fn bridge(&self) -> SessionBridge {
            SessionBridge::new(
                Arc::clone(&self.identity) as Arc<dyn IdentityProvider>,
                Arc::clone(&self.documents) as Arc<dyn DocumentStore>,
                self.roles.clone(),
            )
        }
    }

    #[tokio::test]
    async fn test_initial_resolution_settles_signed_out() {
        let fixture = Fixture::new();
        let handle = fixture.bridge().start();

        let snapshot = handle.settled().await;
        assert!(!snapshot.loading);
        assert!(!snapshot.is_signed_in());
        handle.stop().await;
    }

    #[tokio::test]
    async fn test_sign_in_resolves_and_caches_doctor_role() {
        let fixture = Fixture::new();
        let uid = fixture.identity.add_account("d@clinic.example", "pw123456");
        fixture
            .documents
            .merge_document("users", uid.as_str(), json!({ "role": "doctor" }))
            .await
            .unwrap();

        let handle = fixture.bridge().start();
        fixture
            .identity
            .sign_in("d@clinic.example", &secret_string("pw123456"))
            .await
            .unwrap();

        let snapshot = handle
            .wait_until(|s| !s.loading && s.is_signed_in())
            .await;
        assert_eq!(snapshot.user.as_ref().map(|u| &u.uid), Some(&uid));
        assert_eq!(fixture.roles.get(), Some(Role::Doctor));
        handle.stop().await;
    }

    #[tokio::test]
    async fn test_logout_failure_is_propagated_and_cache_kept() {
        let fixture = Fixture::new();
        let uid = fixture.identity.add_account("d@clinic.example", "pw123456");
        fixture
            .documents
            .merge_document("users", uid.as_str(), json!({ "role": "doctor" }))
            .await
            .unwrap();

        let handle = fixture.bridge().start();
        fixture
            .identity
            .sign_in("d@clinic.example", &secret_string("pw123456"))
            .await
            .unwrap();
        handle.wait_until(|s| !s.loading && s.is_signed_in()).await;

        fixture.identity.set_fail_sign_out(true);
        assert!(handle.logout().await.is_err());
        assert_eq!(fixture.roles.get(), Some(Role::Doctor));

        fixture.identity.set_fail_sign_out(false);
        handle.logout().await.unwrap();
        assert_eq!(fixture.roles.get(), None);
        handle.stop().await;
    }
}
