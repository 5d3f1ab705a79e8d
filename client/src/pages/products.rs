//! Products view. Reachable only with a session.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use inventory_session::{Route, SessionView};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

/// One-line summary of who is signed in.
pub fn welcome_line(state: &AuthState) -> String {
    match state.current_user() {
        Some(user) if user.is_admin() => format!("Signed in as {} (administrator)", user.name),
        Some(user) => format!("Signed in as {}", user.name),
        None => String::new(),
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, Route::Products, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <p class="page__redirect">"Redirecting to sign in..."</p> }
        >
            <section class="page">
                <h1>"Products"</h1>
                <p class="page__subtitle">{move || welcome_line(&auth.get())}</p>
            </section>
        </Show>
    }
}
