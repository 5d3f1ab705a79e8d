//! Login and registration input validation.
//!
//! Validation runs before any request is built, so a rejected form never
//! reaches the network layer.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::types::{LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Why a login or registration form cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Enter your name.")]
    NameRequired,
    #[error("Enter your email.")]
    EmailRequired,
    #[error("Enter a valid email address.")]
    EmailInvalid,
    #[error("Enter your password.")]
    PasswordRequired,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
}

/// Validate the sign-in form.
///
/// # Errors
///
/// Returns the first failing [`FormError`] in field order.
pub fn validate_login(email: &str, pass: &str) -> Result<LoginRequest, FormError> {
    let email = validate_email(email)?;
    if pass.is_empty() {
        return Err(FormError::PasswordRequired);
    }
    Ok(LoginRequest {
        email,
        pass: pass.to_owned(),
    })
}

/// Validate the registration form.
///
/// # Errors
///
/// Returns the first failing [`FormError`] in field order.
pub fn validate_register(name: &str, email: &str, pass: &str) -> Result<RegisterRequest, FormError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FormError::NameRequired);
    }
    let email = validate_email(email)?;
    if pass.is_empty() {
        return Err(FormError::PasswordRequired);
    }
    if pass.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email,
        pass: pass.to_owned(),
    })
}

fn validate_email(raw: &str) -> Result<String, FormError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FormError::EmailRequired);
    }
    if !is_email(email) {
        return Err(FormError::EmailInvalid);
    }
    Ok(email.to_owned())
}

fn is_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !candidate.chars().any(char::is_whitespace)
}
