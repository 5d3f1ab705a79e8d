//! Wire and storage records for authentication.
//!
//! DESIGN
//! ======
//! The backend has shipped both numeric and string user identifiers, and both
//! `roleId` and `role_id` spellings. Deserialization accepts every variant so
//! a persisted record from an older build still restores.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Role id the backend assigns to administrators.
pub const ADMIN_ROLE_ID: i64 = 1;

/// Server-assigned user identifier, normalized to a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(id) if !id.is_empty() => Ok(Self(id)),
            serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(Self(number.to_string())),
            serde_json::Value::String(_) => Err(D::Error::custom("user id must not be empty")),
            _ => Err(D::Error::custom("expected integer or string user id")),
        }
    }
}

/// The signed-in user as returned by `POST /auth/login`.
///
/// Read-only from the front-end's point of view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    /// Role label (e.g. `"admin"`, `"user"`).
    #[serde(default)]
    pub role: String,
    /// Numeric role, when the backend sends one.
    #[serde(default, rename = "roleId", alias = "role_id", skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
}

impl User {
    /// Whether this user holds elevated privileges.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role_id == Some(ADMIN_ROLE_ID) || self.role.eq_ignore_ascii_case("admin")
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub pass: String,
}

/// Successful `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub pass: String,
}

/// Successful `POST /auth/register` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "userId", alias = "user_id")]
    pub user_id: UserId,
}
