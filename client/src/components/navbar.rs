//! Top navigation shown while signed in.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use inventory_session::{Route, SessionView};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, Session};

/// Label for the signed-in user: the name, or the email when no name is set.
pub fn display_name(state: &AuthState) -> String {
    state
        .current_user()
        .map(|user| {
            if user.name.trim().is_empty() {
                user.email.clone()
            } else {
                user.name.clone()
            }
        })
        .unwrap_or_default()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        session.update_value(move |store| {
            store.logout(&move |route: Route| navigate(route.path(), NavigateOptions::default()));
        });
    };

    view! {
        <nav class="navbar" hidden=move || !auth.get().is_authenticated()>
            <span class="navbar__brand">"Inventory"</span>
            <A href=Route::Products.path()>"Products"</A>
            <A href=Route::Categories.path()>"Categories"</A>
            <span class="navbar__spacer"></span>
            <span class="navbar__user">{move || display_name(&auth.get())}</span>
            <span class="navbar__email">{move || auth.get().user.map(|user| user.email).unwrap_or_default()}</span>
            {move || auth.get().is_admin().then(|| view! { <span class="navbar__badge">"admin"</span> })}
            <button class="btn navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
