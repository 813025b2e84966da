//! Cached role lookups.
//!
//! The role steers which views render, and waiting for a network round-trip
//! on every launch would flash the patient UI at doctors. The cache keeps the
//! last confirmed role in local storage so the next launch can route
//! immediately; the session bridge refreshes it whenever a profile is
//! fetched.

use std::sync::Arc;

use crate::adapters::storage::KeyValueStore;
use crate::domain::{Result, Role};

/// Storage key under which the role is kept.
pub const ROLE_CACHE_KEY: &str = "user_role";

/// Read/write access to the locally cached role.
///
/// The cache is a hint, not an authority: reads never fail (a broken or
/// tampered store reads as "no cached role") and every value passes through
/// [`Role::parse`] on the way out, so nothing outside the closed role set can
/// leave this type.
#[derive(Clone)]
pub struct RoleCache {
    store: Arc<dyn KeyValueStore>,
}

impl RoleCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The cached role, if a recognized one is present.
    ///
    /// Store failures and unrecognized values are logged and reported as
    /// `None`; callers can always rely on getting an answer.
    pub fn get(&self) -> Option<Role> {
        match self.store.get(ROLE_CACHE_KEY) {
            Ok(Some(value)) => {
                let role = Role::parse(&value);
                if role.is_none() {
                    tracing::warn!("Ignoring unrecognized cached role value");
                }
                role
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Role cache unreadable, treating as empty");
                None
            }
        }
    }

    /// Records a confirmed role.
    pub fn set(&self, role: Role) -> Result<()> {
        self.store.set(ROLE_CACHE_KEY, role.as_str())
    }

    /// Forgets the cached role.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(ROLE_CACHE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStore;
    use crate::domain::{RafiqError, Result};

    fn cache() -> (RoleCache, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (RoleCache::new(Arc::clone(&store) as Arc<dyn KeyValueStore>), store)
    }

    #[test]
    fn test_set_then_get() {
        let (cache, _) = cache();
        assert_eq!(cache.get(), None);

        cache.set(Role::Doctor).unwrap();
        assert_eq!(cache.get(), Some(Role::Doctor));

        cache.set(Role::Patient).unwrap();
        assert_eq!(cache.get(), Some(Role::Patient));
    }

    #[test]
    fn test_clear_forgets_role() {
        let (cache, _) = cache();
        cache.set(Role::Admin).unwrap();
        cache.clear().unwrap();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_tampered_value_reads_as_absent() {
        let (cache, store) = cache();
        store.set(ROLE_CACHE_KEY, "superuser").unwrap();
        assert_eq!(cache.get(), None);

        store.set(ROLE_CACHE_KEY, "Doctor").unwrap();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_store_failure_reads_as_absent() {
        struct BrokenStore;
        impl KeyValueStore for BrokenStore {
            fn get(&self, _key: &str) -> Result<Option<String>> {
                Err(RafiqError::Cache("disk on fire".to_string()))
            }
            fn set(&self, _key: &str, _value: &str) -> Result<()> {
                Err(RafiqError::Cache("disk on fire".to_string()))
            }
            fn remove(&self, _key: &str) -> Result<()> {
                Err(RafiqError::Cache("disk on fire".to_string()))
            }
        }

        let cache = RoleCache::new(Arc::new(BrokenStore));
        assert_eq!(cache.get(), None);
        // Writes do surface their failure; only reads are infallible.
        assert!(cache.set(Role::Doctor).is_err());
    }

    #[test]
    fn test_values_are_shared_between_clones() {
        let (cache, _) = cache();
        let clone = cache.clone();
        cache.set(Role::Doctor).unwrap();
        assert_eq!(clone.get(), Some(Role::Doctor));
    }
}
