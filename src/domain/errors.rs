//! Error types for Rafiq operations.
//!
//! All fallible operations in the crate return [`RafiqError`] (usually through
//! the [`crate::domain::Result`] alias). Adapter-specific failures are wrapped
//! in dedicated sub-errors so callers can match on the failing subsystem
//! without string inspection.

use thiserror::Error;

/// Top-level error type for Rafiq operations.
#[derive(Error, Debug)]
pub enum RafiqError {
    /// Configuration loading or validation errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Identity provider errors (sign-in, sign-out, account management)
    #[error("Identity provider error: {0}")]
    Identity(#[from] IdentityError),

    /// Document store errors (profile reads and merge writes)
    #[error("Document store error: {0}")]
    Documents(#[from] DocumentStoreError),

    /// Local key-value cache errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// Validation errors for domain values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization or deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("IO error: {0}")]
    Io(String),

    /// Catch-all for unexpected errors
    #[error("Unexpected error: {0}")]
    Other(String),
}

/// Errors raised by an identity provider backend.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// Could not reach the identity endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// An account with the requested email already exists
    #[error("Account already exists: {0}")]
    EmailAlreadyExists(String),

    /// The supplied email/password pair was rejected
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// No account matches the supplied email
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Sign-out was rejected by the provider
    #[error("Sign-out failed: {0}")]
    SignOutFailed(String),

    /// Provider returned a 5xx response
    #[error("Identity server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    /// Provider rejected the request with a 4xx response
    #[error("Identity request rejected (HTTP {status}): {message}")]
    RequestRejected { status: u16, message: String },

    /// The request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Provider returned a payload we could not interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl IdentityError {
    /// Whether retrying the same request may succeed.
    ///
    /// Credential and conflict errors are permanent; only transport failures
    /// and 5xx responses are worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            IdentityError::ConnectionFailed(_)
                | IdentityError::Timeout(_)
                | IdentityError::ServerError { .. }
        )
    }
}

/// Errors raised by a document store backend.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// Could not reach the document endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A read returned an error other than absence
    #[error("Read failed: {0}")]
    ReadFailed(String),

    /// A merge write was rejected
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Store returned a 5xx response
    #[error("Document server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    /// Store rejected the request with a 4xx response
    #[error("Document request rejected (HTTP {status}): {message}")]
    RequestRejected { status: u16, message: String },

    /// The request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Store returned a payload we could not interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl DocumentStoreError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DocumentStoreError::ConnectionFailed(_)
                | DocumentStoreError::Timeout(_)
                | DocumentStoreError::ServerError { .. }
        )
    }
}

impl From<std::io::Error> for RafiqError {
    fn from(err: std::io::Error) -> Self {
        RafiqError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RafiqError {
    fn from(err: serde_json::Error) -> Self {
        RafiqError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for RafiqError {
    fn from(err: toml::de::Error) -> Self {
        RafiqError::Configuration(format!("TOML parsing error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RafiqError::Configuration("missing backend".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing backend");

        let err = RafiqError::Cache("store unreadable".to_string());
        assert_eq!(err.to_string(), "Cache error: store unreadable");
    }

    #[test]
    fn test_identity_error_wrapping() {
        let inner = IdentityError::InvalidCredentials("rejected by provider".to_string());
        let err: RafiqError = inner.into();
        assert!(matches!(err, RafiqError::Identity(_)));
        assert!(err.to_string().contains("Invalid credentials"));
    }

    #[test]
    fn test_document_error_wrapping() {
        let inner = DocumentStoreError::ReadFailed("boom".to_string());
        let err: RafiqError = inner.into();
        assert!(matches!(err, RafiqError::Documents(_)));
    }

    #[test]
    fn test_transient_classification() {
        assert!(IdentityError::Timeout("10s elapsed".into()).is_transient());
        assert!(IdentityError::ServerError {
            status: 503,
            message: "unavailable".into()
        }
        .is_transient());
        assert!(!IdentityError::EmailAlreadyExists("taken".into()).is_transient());
        assert!(!IdentityError::InvalidCredentials("nope".into()).is_transient());

        assert!(DocumentStoreError::ConnectionFailed("refused".into()).is_transient());
        assert!(!DocumentStoreError::RequestRejected {
            status: 422,
            message: "bad patch".into()
        }
        .is_transient());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RafiqError = io_err.into();
        assert!(matches!(err, RafiqError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: RafiqError = json_err.into();
        assert!(matches!(err, RafiqError::Serialization(_)));
    }
}
