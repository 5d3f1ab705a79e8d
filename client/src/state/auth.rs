//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `SessionStore` is the source of truth and lives in a local
//! `StoredValue`. Its observer copies every change into an
//! `RwSignal<AuthState>`, which route guards and user-aware components track.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use inventory_session::{SessionStore, SessionView, User};
use leptos::prelude::*;

use crate::util::storage::BrowserStorage;

/// Reactive mirror of the session store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    #[must_use]
    pub fn from_user(user: Option<&User>) -> Self {
        Self { user: user.cloned() }
    }
}

impl SessionView for AuthState {
    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Handle to the session store shared through context.
pub type Session = StoredValue<SessionStore<BrowserStorage>, LocalStorage>;

/// Restore the session from browser storage and provide both the store and
/// its reactive mirror as context.
pub fn provide_session() -> (RwSignal<AuthState>, Session) {
    let mut store = SessionStore::restore(BrowserStorage);
    let auth = RwSignal::new(AuthState::from_user(store.current_user()));
    store.subscribe(move |user| auth.set(AuthState::from_user(user)));

    let session: Session = StoredValue::new_local(store);
    provide_context(auth);
    provide_context(session);
    (auth, session)
}
