//! In-memory identity provider.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use secrecy::ExposeSecret;
use uuid::Uuid;

use crate::adapters::backend::events::{SessionChannel, SessionWatcher};
use crate::adapters::backend::traits::IdentityProvider;
use crate::config::SecretString;
use crate::domain::ids::UserId;
use crate::domain::user::AuthUser;
use crate::domain::{IdentityError, RafiqError, Result};

struct Account {
    uid: UserId,
    password: String,
}

/// Identity provider backed by a process-local account map.
///
/// Used by the `memory` backend target and throughout the test suites. It
/// reproduces the session semantics of the REST provider: creating an account
/// signs it in, and every session change is announced to watchers.
///
/// The `set_fail_*` switches make specific operations fail on demand so error
/// paths can be exercised without a network.
#[derive(Default)]
pub struct MemoryIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    session: SessionChannel,
    fail_create: AtomicBool,
    fail_sign_out: AtomicBool,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account without signing it in. Returns the generated uid.
    pub fn add_account(&self, email: &str, password: &str) -> UserId {
        let uid = UserId::from(Uuid::new_v4());
        let mut accounts = self
            .accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        accounts.insert(
            email.to_string(),
            Account {
                uid: uid.clone(),
                password: password.to_string(),
            },
        );
        uid
    }

    /// Makes every subsequent `create_user` fail with a server error.
    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `sign_out` fail while keeping the session.
    pub fn set_fail_sign_out(&self, fail: bool) {
        self.fail_sign_out.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    fn subscribe(&self) -> SessionWatcher {
        self.session.watch()
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.session.current()
    }

    async fn sign_in(&self, email: &str, password: &SecretString) -> Result<AuthUser> {
        let user = {
            let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
            let account = accounts.get(email).ok_or_else(|| {
                RafiqError::Identity(IdentityError::AccountNotFound(email.to_string()))
            })?;
            if *password.expose_secret() != *account.password {
                return Err(RafiqError::Identity(IdentityError::InvalidCredentials(
                    "password does not match".to_string(),
                )));
            }
            AuthUser::new(account.uid.clone(), Some(email.to_string()))
        };
        self.session.publish(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<()> {
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(RafiqError::Identity(IdentityError::SignOutFailed(
                "injected sign-out failure".to_string(),
            )));
        }
        self.session.publish(None);
        Ok(())
    }

    async fn create_user(&self, email: &str, password: &SecretString) -> Result<AuthUser> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(RafiqError::Identity(IdentityError::ServerError {
                status: 500,
                message: "injected account-creation failure".to_string(),
            }));
        }
        let user = {
            let mut accounts = self
                .accounts
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if accounts.contains_key(email) {
                return Err(RafiqError::Identity(IdentityError::EmailAlreadyExists(
                    email.to_string(),
                )));
            }
            let uid = UserId::from(Uuid::new_v4());
            accounts.insert(
                email.to_string(),
                Account {
                    uid: uid.clone(),
                    password: password.expose_secret().to_string(),
                },
            );
            AuthUser::new(uid, Some(email.to_string()))
        };
        self.session.publish(Some(user.clone()));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[tokio::test]
    async fn test_create_user_establishes_session() {
        let provider = MemoryIdentityProvider::new();
        assert_eq!(provider.current_user(), None);

        let user = provider
            .create_user("p@example.com", &secret_string("pw123456"))
            .await
            .unwrap();

        assert_eq!(provider.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let provider = MemoryIdentityProvider::new();
        provider.add_account("p@example.com", "pw123456");

        let err = provider
            .create_user("p@example.com", &secret_string("other"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RafiqError::Identity(IdentityError::EmailAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_sign_in_checks_password() {
        let provider = MemoryIdentityProvider::new();
        let uid = provider.add_account("p@example.com", "pw123456");

        let err = provider
            .sign_in("p@example.com", &secret_string("wrong"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RafiqError::Identity(IdentityError::InvalidCredentials(_))
        ));
        assert_eq!(provider.current_user(), None);

        let user = provider
            .sign_in("p@example.com", &secret_string("pw123456"))
            .await
            .unwrap();
        assert_eq!(user.uid, uid);
    }

    #[tokio::test]
    async fn test_unknown_email_is_account_not_found() {
        let provider = MemoryIdentityProvider::new();
        let err = provider
            .sign_in("ghost@example.com", &secret_string("pw"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RafiqError::Identity(IdentityError::AccountNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_sign_out_clears_session_and_notifies() {
        let provider = MemoryIdentityProvider::new();
        provider.add_account("p@example.com", "pw123456");
        let mut watcher = provider.subscribe();

        provider
            .sign_in("p@example.com", &secret_string("pw123456"))
            .await
            .unwrap();
        assert!(watcher.changed().await);
        assert!(watcher.current().is_some());

        provider.sign_out().await.unwrap();
        assert!(watcher.changed().await);
        assert_eq!(watcher.current(), None);
    }

    #[tokio::test]
    async fn test_injected_sign_out_failure_keeps_session() {
        let provider = MemoryIdentityProvider::new();
        provider.add_account("p@example.com", "pw123456");
        provider
            .sign_in("p@example.com", &secret_string("pw123456"))
            .await
            .unwrap();

        provider.set_fail_sign_out(true);
        assert!(provider.sign_out().await.is_err());
        assert!(provider.current_user().is_some());
    }
}
