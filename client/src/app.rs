//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use inventory_session::Route as SessionRoute;

use crate::components::navbar::Navbar;
use crate::pages::{categories::CategoriesPage, login::LoginPage, products::ProductsPage, register::RegisterPage};
use crate::state::auth;

/// Path unauthenticated and unknown navigation lands on.
const LOGIN_PATH: &str = SessionRoute::Login.path();

/// Root application component.
///
/// Restores the session, provides it as context, and sets up client-side
/// routing. `/` and unknown paths land on the login view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    auth::provide_session();

    view! {
        <Title text="Inventory Admin"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                </Routes>
            </main>
        </Router>
    }
}
