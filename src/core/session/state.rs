//! Session snapshot shared with consumers.

use crate::domain::user::AuthUser;

/// What the UI knows about the session at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// The signed-in user, if any
    pub user: Option<AuthUser>,
    /// True while the bridge is still resolving the current session change.
    /// Render a splash screen, not a guess.
    pub loading: bool,
}

impl SessionSnapshot {
    /// State before the first session event has been processed.
    pub fn initial() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::UserId;

    #[test]
    fn test_initial_state_is_loading_and_signed_out() {
        let snapshot = SessionSnapshot::initial();
        assert!(snapshot.loading);
        assert!(!snapshot.is_signed_in());
    }

    #[test]
    fn test_is_signed_in() {
        let snapshot = SessionSnapshot {
            user: Some(AuthUser::new(UserId::new("u-1").unwrap(), None)),
            loading: false,
        };
        assert!(snapshot.is_signed_in());
    }
}
