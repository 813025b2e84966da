//! In-memory backend implementations.
//!
//! The `memory` backend target runs the whole application without a network:
//! accounts, sessions and documents live in process-local maps with the same
//! observable semantics as the REST backend. The test suites are written
//! against these types, which also expose switches for injecting failures.

pub mod documents;
pub mod identity;

pub use documents::MemoryDocumentStore;
pub use identity::MemoryIdentityProvider;
