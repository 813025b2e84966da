//! Authenticated users and their profile documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::UserId;
use super::role::Role;

/// The identity-provider view of a signed-in account.
///
/// This is what a session event carries: the provider knows who the account is
/// but nothing about its application role. The role lives in the profile
/// document and is resolved separately by the session bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned account identifier
    pub uid: UserId,
    /// Email on record, if the provider exposes one
    pub email: Option<String>,
}

impl AuthUser {
    pub fn new(uid: UserId, email: Option<String>) -> Self {
        Self { uid, email }
    }
}

/// Application-level attributes extracted from a profile document.
///
/// Profile documents are schemaless JSON. Only the attributes this struct
/// names are ever read; everything else in the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    /// Role attribute, narrowed through [`Role::parse`]. Missing, non-string
    /// and unrecognized values all collapse to `None`.
    pub role: Option<Role>,
}

impl UserProfile {
    /// Extracts the known attributes from a raw profile document.
    ///
    /// Never fails: a document of the wrong shape simply produces an empty
    /// profile.
    pub fn from_document(document: &Value) -> Self {
        let role = document
            .get("role")
            .and_then(Value::as_str)
            .and_then(Role::parse);
        Self { role }
    }
}
