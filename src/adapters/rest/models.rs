//! Wire models for the REST backend.

use serde::{Deserialize, Serialize};

/// Body of account-creation and sign-in requests.
#[derive(Serialize)]
pub struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of successful account-creation and sign-in responses.
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Session token to present on subsequent session-scoped calls.
    #[serde(default)]
    pub token: Option<String>,
}

/// Error body the backend attaches to non-2xx responses. Both field names are
/// in the wild, depending on which service produced the error.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Extracts a human-readable message from a raw error body, falling back to
/// the body itself (or a stub) when it is not the documented JSON shape.
pub fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return message;
        }
    }
    if body.trim().is_empty() {
        "no response body".to_string()
    } else {
        body.trim().to_string()
    }
}
