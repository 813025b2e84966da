//! Redaction helpers for log fields.
//!
//! Uids and emails are personal data and never appear in logs as plaintext.
//! Log sites pass them through [`identifier_digest`] instead, which yields a
//! stable token: the same identifier always produces the same digest, so log
//! lines can still be correlated across a session without exposing who the
//! session belongs to.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the full SHA-256 digest. Enough to make
/// collisions in one log file implausible while keeping lines readable.
const DIGEST_LENGTH: usize = 12;

/// Hashes an identifier for logging (never log plaintext PII).
pub fn identifier_digest(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    let mut digest = format!("{result:x}");
    digest.truncate(DIGEST_LENGTH);
    digest
}
