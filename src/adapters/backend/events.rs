//! Session-change event plumbing shared by the backend adapters.
//!
//! Every identity provider publishes its session state through a
//! [`tokio::sync::watch`] channel: late subscribers immediately observe the
//! current state, rapid changes coalesce to the latest value, and dropping a
//! [`SessionWatcher`] is all it takes to unsubscribe.

use tokio::sync::watch;

use crate::domain::user::AuthUser;

/// A live view of one provider's session state.
///
/// Returned by [`IdentityProvider::subscribe`]. `None` means signed out.
///
/// [`IdentityProvider::subscribe`]: super::traits::IdentityProvider::subscribe
#[derive(Debug)]
pub struct SessionWatcher {
    rx: watch::Receiver<Option<AuthUser>>,
}

impl SessionWatcher {
    /// The session state as of the latest published change.
    pub fn current(&self) -> Option<AuthUser> {
        self.rx.borrow().clone()
    }

    /// Waits for the next change after the last one seen by this watcher.
    ///
    /// Returns `false` once the provider is gone and no further changes can
    /// arrive. Changes published while the watcher was busy are not queued;
    /// the next [`current`](Self::current) call observes the latest state.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

/// The publishing side held by each provider.
pub(crate) struct SessionChannel {
    tx: watch::Sender<Option<AuthUser>>,
}

impl SessionChannel {
    /// Creates a channel in the signed-out state.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Publishes a new session state to all watchers.
    pub fn publish(&self, user: Option<AuthUser>) {
        // send_replace so publishing works with zero live watchers.
        self.tx.send_replace(user);
    }

    /// The most recently published state.
    pub fn current(&self) -> Option<AuthUser> {
        self.tx.borrow().clone()
    }

    /// Creates a watcher positioned at the current state.
    pub fn watch(&self) -> SessionWatcher {
        SessionWatcher {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for SessionChannel {
    fn default() -> Self {
        Self::new()
    }
}
