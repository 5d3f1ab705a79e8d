//! Categories view. Reachable only with a session.

use inventory_session::{Route, SessionView};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::pages::products::welcome_line;
use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, Route::Categories, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| view! { <p class="page__redirect">"Redirecting to sign in..."</p> }
        >
            <section class="page">
                <h1>"Categories"</h1>
                <p class="page__subtitle">{move || welcome_line(&auth.get())}</p>
            </section>
        </Show>
    }
}
