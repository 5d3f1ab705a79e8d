//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use inventory_session::form::validate_login;
use inventory_session::{LoginRequest, Route};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::notice::{Notice, NoticeBanner};
use crate::state::auth::Session;

/// Seeded backend account, pre-filled for convenience.
pub const SEED_EMAIL: &str = "admin@turing.com";
pub const SEED_PASSWORD: &str = "123456";

/// Validate the form, turning a rejection into the notice to show.
pub fn login_submission(email: &str, pass: &str) -> Result<LoginRequest, Notice> {
    validate_login(email, pass).map_err(|e| Notice::Error(e.to_string()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let email = RwSignal::new(SEED_EMAIL.to_owned());
    let pass = RwSignal::new(SEED_PASSWORD.to_owned());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match login_submission(&email.get(), &pass.get()) {
            Ok(request) => request,
            Err(rejection) => {
                notice.set(Some(rejection));
                return;
            }
        };
        notice.set(None);

        #[cfg(feature = "csr")]
        {
            use inventory_session::AuthApi;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpAuthApi::default();
                let result =
                    inventory_session::loading::while_loading(move |on| busy.set(on), api.login(&request)).await;
                match result {
                    Ok(response) => {
                        session.update_value(|store| {
                            store.establish(response);
                        });
                        navigate(Route::Products.path(), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        notice.set(Some(crate::components::notice::login_failure(&e)));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, session, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Inventory Admin"</h1>
                <p class="auth-card__subtitle">"Sign in to manage products and categories"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || pass.get()
                        on:input=move |ev| pass.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <NoticeBanner notice=notice/>
                <p class="auth-card__footer">
                    "No account yet? "
                    <A href=Route::Register.path()>"Create one"</A>
                </p>
            </div>
        </div>
    }
}
