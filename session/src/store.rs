//! Session store: the single source of truth for who is signed in.
//!
//! DESIGN
//! ======
//! The store owns its [`Storage`] and mirrors the persisted user record in
//! memory. Front-ends observe changes through [`SessionStore::subscribe`]
//! instead of polling, and read state through [`SessionView`], which the
//! route guard also consumes.
//!
//! ERROR HANDLING
//! ==============
//! Storage problems never surface as errors: a corrupt record restores as
//! "no session", and failed writes are logged while the in-memory state still
//! changes. Only the auth collaborator's error reaches the caller.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::api::{self, ApiError, AuthApi};
use crate::guard::Route;
use crate::storage::{Storage, TOKEN_KEY, USER_KEY};
use crate::types::{LoginRequest, LoginResponse, User};

/// Read-only view of session state.
pub trait SessionView {
    fn current_user(&self) -> Option<&User>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    fn is_admin(&self) -> bool {
        self.current_user().is_some_and(User::is_admin)
    }
}

/// Navigation collaborator told where to go after logout.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl<F> Navigator for F
where
    F: Fn(Route),
{
    fn navigate(&self, route: Route) {
        self(route);
    }
}

type Observer = Box<dyn Fn(Option<&User>)>;

/// Current session plus its persistence.
pub struct SessionStore<S> {
    storage: S,
    current: Option<User>,
    observers: Vec<Observer>,
}

impl<S: Storage> SessionStore<S> {
    /// Build the store from whatever `storage` holds.
    ///
    /// A missing or unparseable user record yields a signed-out store.
    #[must_use]
    pub fn restore(storage: S) -> Self {
        let current = read_user(&storage);
        Self {
            storage,
            current,
            observers: Vec::new(),
        }
    }

    /// Register `observer`, called with the new current user after every
    /// login and logout.
    pub fn subscribe(&mut self, observer: impl Fn(Option<&User>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Persisted bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// `Authorization` header value for the persisted token.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|token| api::bearer(&token))
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Sign in through `api` and record the session on success.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's [`ApiError`] unchanged; the store is left as
    /// it was.
    pub async fn login<A>(&mut self, api: &A, email: &str, pass: &str) -> Result<User, ApiError>
    where
        A: AuthApi + ?Sized,
    {
        let request = LoginRequest {
            email: email.to_owned(),
            pass: pass.to_owned(),
        };
        let response = api.login(&request).await?;
        Ok(self.establish(response))
    }

    /// Persist a successful login response and make it the current session.
    pub fn establish(&mut self, response: LoginResponse) -> User {
        let LoginResponse { access_token, user } = response;
        self.persist(&access_token, &user);
        log::info!("signed in as {} ({})", user.email, user.id);
        self.current = Some(user.clone());
        self.notify();
        user
    }

    /// End the session and send the navigator to the login view.
    ///
    /// Persisted state is cleared even when no session was active.
    pub fn logout<N>(&mut self, navigator: &N)
    where
        N: Navigator + ?Sized,
    {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.clear(key) {
                log::warn!("failed to clear `{key}`: {e}");
            }
        }
        if let Some(user) = self.current.take() {
            log::info!("signed out {}", user.email);
        }
        self.notify();
        navigator.navigate(Route::Login);
    }

    /// Write the user record, then the token. A token is never left behind
    /// without the user record it belongs to.
    fn persist(&mut self, access_token: &str, user: &User) {
        let written = match serde_json::to_string(user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        if let Err(reason) = written {
            log::warn!("session user not persisted: {reason}");
            if let Err(e) = self.storage.clear(TOKEN_KEY) {
                log::warn!("failed to clear `{TOKEN_KEY}`: {e}");
            }
            return;
        }
        if let Err(e) = self.storage.set(TOKEN_KEY, access_token) {
            log::warn!("session token not persisted: {e}");
        }
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(self.current.as_ref());
        }
    }
}

impl<S> SessionView for SessionStore<S> {
    fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }
}

fn read_user<S: Storage>(storage: &S) -> Option<User> {
    let raw = storage.get(USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("ignoring unreadable persisted user: {e}");
            None
        }
    }
}
