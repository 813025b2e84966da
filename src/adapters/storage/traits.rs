//! Key-value storage abstraction.
//!
//! The role cache (and anything else that needs to survive a restart) talks to
//! this trait instead of the filesystem directly. Operations are synchronous:
//! values are tiny and the file backend is a single local file.

use crate::domain::Result;

/// A flat string-to-string store with last-write-wins semantics.
///
/// Implementations must tolerate concurrent use from multiple threads; callers
/// hold them as `Arc<dyn KeyValueStore>`.
pub trait KeyValueStore: Send + Sync {
    /// Reads a value. Absence is `Ok(None)`; `Err` means the store itself
    /// could not be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
