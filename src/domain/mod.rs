//! Domain types for the Rafiq patient companion.
//!
//! This module contains the vocabulary the rest of the crate speaks:
//! - [`Role`] and [`UserProfile`]: the closed role set and the narrowing
//!   boundary for untrusted role strings
//! - [`AuthUser`] and [`UserId`]: identity as reported by the provider
//! - [`specialization`] and [`medication`]: fixed display tables used by the
//!   profile and reminder features
//! - [`RafiqError`] and [`Result`]: the error surface of the crate
//!
//! Everything here is plain data with no I/O; adapters translate wire formats
//! into these types at the edges.

pub mod errors;
pub mod ids;
pub mod medication;
pub mod result;
pub mod role;
pub mod specialization;
pub mod user;

pub use errors::{DocumentStoreError, IdentityError, RafiqError};
pub use ids::UserId;
pub use medication::{preset_by_value, presets, MedicationPreset};
pub use result::Result;
pub use role::Role;
pub use specialization::{specialization_label, UNSPECIFIED_SPECIALIZATION};
pub use user::{AuthUser, UserProfile};
