//! Backend authentication collaborator.
//!
//! Implementations live with each front-end (`gloo-net` in the browser,
//! `reqwest` in the CLI); this module fixes the contract, the endpoint
//! paths and the error shape so both report failures identically.
//!
//! ERROR HANDLING
//! ==============
//! Failures are never retried here. The session store hands them back to the
//! caller untouched, and the caller decides on user-facing wording.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use crate::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

/// Error returned by an [`AuthApi`] call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a status code and raw response body.
    ///
    /// JSON bodies of the form `{"message": "..."}` or
    /// `{"message": ["...", "..."]}` contribute their message; anything else
    /// is kept verbatim.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: status_message(body),
        }
    }

    /// Whether the backend rejected the credentials.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    /// Whether the backend rejected the request as conflicting or malformed.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Status { status: 400 | 409 | 422, .. })
    }
}

fn status_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "no response body".to_owned();
    }
    let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
        return trimmed.to_owned();
    };
    match value.get("message") {
        Some(serde_json::Value::String(message)) => message.clone(),
        Some(serde_json::Value::Array(items)) => {
            let parts: Vec<&str> = items.iter().filter_map(serde_json::Value::as_str).collect();
            if parts.is_empty() {
                trimmed.to_owned()
            } else {
                parts.join("; ")
            }
        }
        _ => trimmed.to_owned(),
    }
}

/// Join `path` onto `base_url` without doubling the separator.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), path)
}

/// `Authorization` header value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Authentication endpoints of the backend.
///
/// Futures are not required to be `Send`: the browser client runs them on the
/// UI thread.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a token and user record.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status, or an
    /// unparseable body.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Create a new account. Does not sign the user in.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-success status, or an
    /// unparseable body.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;
}
