//! Integration tests for the admin bootstrap flow
//!
//! These tests run the same path the CLI takes: build adapters from a
//! configuration via the factory, run the bootstrap, and verify the profile
//! document through the document store trait.

use std::sync::Arc;

use serde_json::Value;

use rafiq::adapters::backend::{create_backend, DocumentStore};
use rafiq::adapters::storage::MemoryStore;
use rafiq::config::schema::{
    ApplicationConfig, BackendTarget, Environment, LoggingConfig, RafiqConfig, SessionConfig,
    StorageConfig,
};
use rafiq::config::secret_string;
use rafiq::core::bootstrap::AdminBootstrap;
use rafiq::core::roles::RoleCache;
use rafiq::core::session::SessionBridge;
use rafiq::domain::{IdentityError, RafiqError};

const ADMIN_EMAIL: &str = "admin@rafiq.example";
const ADMIN_PASSWORD: &str = "pw123456";

fn memory_config() -> RafiqConfig {
    RafiqConfig {
        application: ApplicationConfig::default(),
        environment: Environment::Development,
        backend: BackendTarget::Memory,
        rest: None,
        storage: StorageConfig::default(),
        session: SessionConfig::default(),
        logging: LoggingConfig::default(),
    }
}

async fn admin_document(documents: &Arc<dyn DocumentStore>, uid: &str) -> Option<Value> {
    documents.get_document("users", uid).await.unwrap()
}

#[tokio::test]
async fn test_bootstrap_creates_account_and_profile() {
    let (identity, documents) = create_backend(&memory_config()).unwrap();
    let bootstrap = AdminBootstrap::new(Arc::clone(&identity), Arc::clone(&documents));

    let outcome = bootstrap
        .run(ADMIN_EMAIL, &secret_string(ADMIN_PASSWORD), false)
        .await
        .unwrap();
    assert!(outcome.created);

    let doc = admin_document(&documents, outcome.uid.as_str())
        .await
        .expect("profile document missing");
    assert_eq!(doc["role"], "admin");
    assert_eq!(doc["email"], ADMIN_EMAIL);
    assert_eq!(doc["uid"], outcome.uid.as_str());
    let created_at = doc["createdAt"].as_str().expect("createdAt missing");
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_bootstrap_adopts_existing_account() {
    let (identity, documents) = create_backend(&memory_config()).unwrap();
    let bootstrap = AdminBootstrap::new(Arc::clone(&identity), Arc::clone(&documents));

    let first = bootstrap
        .run(ADMIN_EMAIL, &secret_string(ADMIN_PASSWORD), false)
        .await
        .unwrap();
    let second = bootstrap
        .run(ADMIN_EMAIL, &secret_string(ADMIN_PASSWORD), false)
        .await
        .unwrap();

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(first.uid, second.uid);

    // The rerun merges the same attributes; the document stays an admin
    // profile.
    let doc = admin_document(&documents, first.uid.as_str())
        .await
        .expect("profile document missing");
    assert_eq!(doc["role"], "admin");
}

#[tokio::test]
async fn test_bootstrap_rejects_wrong_password_for_existing_account() {
    let (identity, documents) = create_backend(&memory_config()).unwrap();
    let bootstrap = AdminBootstrap::new(Arc::clone(&identity), Arc::clone(&documents));

    bootstrap
        .run(ADMIN_EMAIL, &secret_string(ADMIN_PASSWORD), false)
        .await
        .unwrap();

    let err = bootstrap
        .run(ADMIN_EMAIL, &secret_string("different-password"), false)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RafiqError::Identity(IdentityError::InvalidCredentials(_))
    ));
}

#[tokio::test]
async fn test_bootstrap_dry_run_writes_nothing() {
    let (identity, documents) = create_backend(&memory_config()).unwrap();
    let bootstrap = AdminBootstrap::new(Arc::clone(&identity), Arc::clone(&documents));

    let outcome = bootstrap
        .run(ADMIN_EMAIL, &secret_string(ADMIN_PASSWORD), true)
        .await
        .unwrap();
    assert!(outcome.created);

    assert!(admin_document(&documents, outcome.uid.as_str())
        .await
        .is_none());
}

#[tokio::test]
async fn test_bootstrapped_admin_session_is_not_cached_by_bridge() {
    let (identity, documents) = create_backend(&memory_config()).unwrap();
    let bootstrap = AdminBootstrap::new(Arc::clone(&identity), Arc::clone(&documents));

    // Bootstrap leaves the admin signed in on the provider.
    let outcome = bootstrap
        .run(ADMIN_EMAIL, &secret_string(ADMIN_PASSWORD), false)
        .await
        .unwrap();
    assert_eq!(
        identity.current_user().map(|u| u.uid),
        Some(outcome.uid.clone())
    );

    let roles = RoleCache::new(Arc::new(MemoryStore::new()));
    let handle = SessionBridge::new(
        Arc::clone(&identity),
        Arc::clone(&documents),
        roles.clone(),
    )
    .start();

    let snapshot = handle
        .wait_until(|s| s.is_signed_in() && !s.loading)
        .await;
    assert_eq!(snapshot.user.map(|u| u.uid), Some(outcome.uid));

    // The profile says admin, and admin is deliberately never cached.
    assert_eq!(roles.get(), None);
}
