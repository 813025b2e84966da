//! Local key-value storage backends.
//!
//! [`FileStore`] is the production backend (a single JSON file next to the
//! process); [`MemoryStore`] backs tests and ephemeral runs. Both implement
//! [`KeyValueStore`], which is what the role cache consumes.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
