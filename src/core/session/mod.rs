//! Session lifecycle management.
//!
//! [`SessionBridge`] owns the subscription to the identity provider and keeps
//! three things consistent for everyone else: the current [`SessionSnapshot`],
//! the role cache, and the logout path. See the module docs on
//! [`bridge`] for the exact resolution order.

pub mod bridge;
pub mod state;

pub use bridge::{SessionBridge, SessionHandle, DEFAULT_USERS_COLLECTION};
pub use state::SessionSnapshot;
