//! Result type alias for Rafiq operations.

use super::errors::RafiqError;

/// Convenience alias used across the crate for fallible operations.
///
/// # Examples
///
/// ```
/// use rafiq::domain::{RafiqError, Result};
///
/// fn users_collection(name: &str) -> Result<&str> {
///     if name.is_empty() {
///         return Err(RafiqError::Validation("collection name is empty".into()));
///     }
///     Ok(name)
/// }
///
/// assert!(users_collection("users").is_ok());
/// assert!(users_collection("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, RafiqError>;
