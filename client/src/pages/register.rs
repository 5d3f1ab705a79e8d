//! Account creation page. A successful registration does not sign in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use inventory_session::form::validate_register;
use inventory_session::{RegisterRequest, RegisterResponse, Route};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice::{Notice, NoticeBanner};

/// Validate the form, turning a rejection into the notice to show.
pub fn register_submission(name: &str, email: &str, pass: &str) -> Result<RegisterRequest, Notice> {
    validate_register(name, email, pass).map_err(|e| Notice::Error(e.to_string()))
}

/// Confirmation shown after the backend accepts a registration.
pub fn register_success(response: &RegisterResponse) -> Notice {
    let detail = response.message.trim();
    if detail.is_empty() {
        Notice::Success("Account created. You can sign in now.".to_owned())
    } else {
        Notice::Success(format!("{detail}. You can sign in now."))
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let pass = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match register_submission(&name.get(), &email.get(), &pass.get()) {
            Ok(request) => request,
            Err(rejection) => {
                notice.set(Some(rejection));
                return;
            }
        };
        notice.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use inventory_session::AuthApi;

            let api = crate::net::api::HttpAuthApi::default();
            let result =
                inventory_session::loading::while_loading(move |on| busy.set(on), api.register(&request)).await;
            match result {
                Ok(response) => {
                    log::info!("registered user {}", response.user_id);
                    name.set(String::new());
                    email.set(String::new());
                    pass.set(String::new());
                    notice.set(Some(register_success(&response)));
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    notice.set(Some(crate::components::notice::register_failure(&e)));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = request;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <p class="auth-card__subtitle">"Register to access the inventory"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (min. 6 characters)"
                        autocomplete="new-password"
                        prop:value=move || pass.get()
                        on:input=move |ev| pass.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <NoticeBanner notice=notice/>
                <p class="auth-card__footer">
                    "Already registered? "
                    <A href=Route::Login.path()>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
