//! Application roles and the single narrowing point for untrusted role strings.
//!
//! Role values arrive from two untrusted places: the `role` attribute of a
//! profile document and the local role cache (which any tool on the machine can
//! edit). [`Role::parse`] is the only path from those strings into the typed
//! enum; everything downstream matches on [`Role`] and never re-inspects text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of roles recognized by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular patient account
    Patient,
    /// Clinician account with access to the doctor views
    Doctor,
    /// Operator account with access to the admin panel
    Admin,
}

impl Role {
    /// All recognized roles, in declaration order.
    pub const ALL: [Role; 3] = [Role::Patient, Role::Doctor, Role::Admin];

    /// Narrows an untrusted string to a [`Role`].
    ///
    /// Matching is exact: the wire format and the cache both store the
    /// lowercase names written by this crate, so anything else (including
    /// different casing) is treated as unrecognized and yields `None`.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "patient" => Some(Role::Patient),
            "doctor" => Some(Role::Doctor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| format!("Unrecognized role: {s}"))
    }
}
