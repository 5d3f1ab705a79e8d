//! Inline success/error message under a form.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use inventory_session::ApiError;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Success(_) => "notice notice--success",
            Self::Error(_) => "notice notice--error",
        }
    }
}

/// Notice for a failed sign-in.
pub fn login_failure(err: &ApiError) -> Notice {
    let text = if err.is_unauthorized() {
        "Invalid email or password.".to_owned()
    } else if matches!(err, ApiError::Transport(_)) {
        unreachable_message()
    } else {
        format!("Sign-in failed: {err}")
    };
    Notice::Error(text)
}

/// Notice for a failed registration.
pub fn register_failure(err: &ApiError) -> Notice {
    let text = if err.is_rejected() {
        "Could not create the account. The email may already be registered.".to_owned()
    } else if matches!(err, ApiError::Transport(_)) {
        unreachable_message()
    } else {
        format!("Registration failed: {err}")
    };
    Notice::Error(text)
}

fn unreachable_message() -> String {
    "Could not reach the server. Try again.".to_owned()
}

/// Render the current notice, if any.
#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = notice.class();
            let text = notice.text().to_owned();
            view! { <p class=class role="status">{text}</p> }
        })
    }
}
