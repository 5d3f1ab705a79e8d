//! Route-guard wiring for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages install the same guard so a logout, or a visit without a
//! session, always lands on the login view.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use inventory_session::{Access, Route, check};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Where navigation into `route` must be redirected, if anywhere.
pub fn redirect_target(route: Route, state: &AuthState) -> Option<Route> {
    match check(route, state) {
        Access::Proceed => None,
        Access::Redirect(target) => Some(target),
    }
}

/// Re-run the guard for `route` whenever the session changes, replacing the
/// history entry with the redirect target on denial.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, route: Route, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(route, &auth.get()) {
            navigate(
                target.path(),
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
