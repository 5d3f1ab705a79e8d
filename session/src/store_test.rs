use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use super::*;
use crate::storage::MemoryStorage;
use crate::types::{RegisterRequest, RegisterResponse, UserId};

// =============================================================
// Helpers
// =============================================================

fn admin() -> User {
    User {
        id: UserId::from(1),
        email: "admin@turing.com".to_owned(),
        name: "Admin".to_owned(),
        role: "admin".to_owned(),
        role_id: Some(1),
    }
}

fn clerk() -> User {
    User {
        id: UserId::from("c-2"),
        email: "clerk@turing.com".to_owned(),
        name: "Clerk".to_owned(),
        role: "user".to_owned(),
        role_id: Some(2),
    }
}

struct FakeApi {
    login: Result<LoginResponse, ApiError>,
    requests: RefCell<Vec<LoginRequest>>,
}

impl FakeApi {
    fn accepting(token: &str, user: User) -> Self {
        Self {
            login: Ok(LoginResponse {
                access_token: token.to_owned(),
                user,
            }),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn rejecting(err: ApiError) -> Self {
        Self {
            login: Err(err),
            requests: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        self.login.clone()
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        Err(ApiError::Transport("not used".to_owned()))
    }
}

fn recorder() -> (Rc<RefCell<Vec<Route>>>, impl Fn(Route)) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |route| sink.borrow_mut().push(route))
}

fn persisted(user: &User, token: &str) -> MemoryStorage {
    let raw = serde_json::to_string(user).unwrap();
    let mut storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, token).unwrap();
    storage.set(USER_KEY, &raw).unwrap();
    storage
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_from_empty_storage_is_signed_out() {
    let store = SessionStore::restore(MemoryStorage::new());
    assert!(!store.is_authenticated());
    assert!(!store.is_admin());
    assert_eq!(store.token(), None);
}

#[test]
fn restore_rehydrates_persisted_user() {
    let store = SessionStore::restore(persisted(&admin(), "t1"));
    assert_eq!(store.current_user(), Some(&admin()));
    assert!(store.is_authenticated());
    assert!(store.is_admin());
    assert_eq!(store.token().as_deref(), Some("t1"));
}

#[test]
fn restore_from_corrupt_user_record_is_signed_out() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "t1"), (USER_KEY, "{not json")]);
    let store = SessionStore::restore(storage);
    assert!(!store.is_authenticated());
}

#[test]
fn restore_with_wrong_shape_user_is_signed_out() {
    let storage = MemoryStorage::with_entries([(USER_KEY, r#"{"id":true}"#)]);
    let store = SessionStore::restore(storage);
    assert!(store.current_user().is_none());
}

#[test]
fn restore_leaves_storage_untouched() {
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "orphan")]);
    let store = SessionStore::restore(storage);
    assert!(!store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("orphan"));
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_persists_token_and_user() {
    let api = FakeApi::accepting("t1", admin());
    let mut store = SessionStore::restore(MemoryStorage::new());

    let user = store.login(&api, "admin@turing.com", "123456").await.unwrap();

    assert_eq!(user, admin());
    assert!(store.is_authenticated());
    assert_eq!(store.storage().get(TOKEN_KEY).as_deref(), Some("t1"));
    let raw = store.storage().get(USER_KEY).unwrap();
    assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), admin());
}

#[tokio::test]
async fn login_sends_credentials_verbatim() {
    let api = FakeApi::accepting("t1", admin());
    let mut store = SessionStore::restore(MemoryStorage::new());

    store.login(&api, "admin@turing.com", "123456").await.unwrap();

    let requests = api.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].email, "admin@turing.com");
    assert_eq!(requests[0].pass, "123456");
}

#[tokio::test]
async fn login_failure_returns_error_untouched_and_changes_nothing() {
    let err = ApiError::from_status(401, r#"{"message":"Unauthorized"}"#);
    let api = FakeApi::rejecting(err.clone());
    let mut store = SessionStore::restore(MemoryStorage::new());

    let result = store.login(&api, "admin@turing.com", "wrong").await;

    assert_eq!(result, Err(err));
    assert!(!store.is_authenticated());
    assert!(store.storage().is_empty());
}

#[tokio::test]
async fn failed_login_keeps_existing_session() {
    let api = FakeApi::rejecting(ApiError::Transport("offline".to_owned()));
    let mut store = SessionStore::restore(persisted(&clerk(), "t0"));

    assert!(store.login(&api, "admin@turing.com", "123456").await.is_err());

    assert_eq!(store.current_user(), Some(&clerk()));
    assert_eq!(store.token().as_deref(), Some("t0"));
}

#[tokio::test]
async fn login_replaces_previous_session() {
    let api = FakeApi::accepting("t2", admin());
    let mut store = SessionStore::restore(persisted(&clerk(), "t1"));

    store.login(&api, "admin@turing.com", "123456").await.unwrap();

    assert_eq!(store.current_user(), Some(&admin()));
    assert_eq!(store.bearer().as_deref(), Some("Bearer t2"));
}

#[test]
fn established_session_survives_restore() {
    let mut store = SessionStore::restore(MemoryStorage::new());
    store.establish(LoginResponse {
        access_token: "t1".to_owned(),
        user: clerk(),
    });

    let reloaded = SessionStore::restore(store.storage().clone());
    assert_eq!(reloaded.current_user(), Some(&clerk()));
    assert!(!reloaded.is_admin());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_storage_and_navigates_to_login() {
    let (seen, navigator) = recorder();
    let mut store = SessionStore::restore(persisted(&admin(), "t1"));

    store.logout(&navigator);

    assert!(!store.is_authenticated());
    assert!(store.storage().is_empty());
    assert_eq!(*seen.borrow(), vec![Route::Login]);
}

#[test]
fn logout_without_session_still_clears_persisted_state() {
    let (seen, navigator) = recorder();
    let storage = MemoryStorage::with_entries([(TOKEN_KEY, "orphan"), (USER_KEY, "garbage")]);
    let mut store = SessionStore::restore(storage);

    store.logout(&navigator);

    assert!(store.storage().is_empty());
    assert_eq!(*seen.borrow(), vec![Route::Login]);
}

#[test]
fn logout_accepts_navigator_trait_objects() {
    let (seen, navigator) = recorder();
    let navigator: &dyn Navigator = &navigator;
    let mut store = SessionStore::restore(MemoryStorage::new());
    store.logout(navigator);
    assert_eq!(seen.borrow().len(), 1);
}

#[tokio::test]
async fn authenticated_reflects_most_recent_terminal_operation() {
    let api = FakeApi::accepting("t1", admin());
    let (_, navigator) = recorder();
    let mut store = SessionStore::restore(MemoryStorage::new());

    for round in 0..3 {
        store.login(&api, "admin@turing.com", "123456").await.unwrap();
        assert!(store.is_authenticated(), "after login #{round}");
        store.logout(&navigator);
        assert!(!store.is_authenticated(), "after logout #{round}");
    }
    store.logout(&navigator);
    assert!(!store.is_authenticated());
    store.login(&api, "admin@turing.com", "123456").await.unwrap();
    assert!(store.is_authenticated());
}

// =============================================================
// subscribe
// =============================================================

#[test]
fn observers_see_login_and_logout() {
    let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let (_, navigator) = recorder();
    let mut store = SessionStore::restore(MemoryStorage::new());
    store.subscribe(move |user| sink.borrow_mut().push(user.map(|u| u.name.clone())));

    store.establish(LoginResponse {
        access_token: "t1".to_owned(),
        user: admin(),
    });
    store.logout(&navigator);

    assert_eq!(*seen.borrow(), vec![Some("Admin".to_owned()), None]);
}

#[test]
fn observers_are_not_called_on_restore() {
    let calls = Rc::new(RefCell::new(0_u32));
    let sink = calls.clone();
    let mut store = SessionStore::restore(persisted(&admin(), "t1"));
    store.subscribe(move |_| *sink.borrow_mut() += 1);
    assert_eq!(*calls.borrow(), 0);
}

// =============================================================
// storage failures
// =============================================================

#[derive(Default)]
struct ReadOnly;

impl Storage for ReadOnly {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), crate::StorageError> {
        Err(crate::StorageError::Write {
            key: key.to_owned(),
            reason: "read-only".to_owned(),
        })
    }

    fn clear(&mut self, _key: &str) -> Result<(), crate::StorageError> {
        Err(crate::StorageError::Unavailable)
    }
}

#[tokio::test]
async fn storage_write_failure_does_not_fail_login() {
    let api = FakeApi::accepting("t1", admin());
    let mut store = SessionStore::restore(ReadOnly);

    let result = store.login(&api, "admin@turing.com", "123456").await;

    assert!(result.is_ok());
    assert!(store.is_authenticated());
    assert_eq!(store.token(), None);
}

#[test]
fn storage_clear_failure_still_signs_out() {
    let (seen, navigator) = recorder();
    let mut store = SessionStore::restore(ReadOnly);
    store.establish(LoginResponse {
        access_token: "t1".to_owned(),
        user: admin(),
    });

    store.logout(&navigator);

    assert!(!store.is_authenticated());
    assert_eq!(*seen.borrow(), vec![Route::Login]);
}

/// Accepts every write except the user record.
#[derive(Default)]
struct UserWriteFails {
    inner: MemoryStorage,
}

impl Storage for UserWriteFails {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), crate::StorageError> {
        if key == USER_KEY {
            return Err(crate::StorageError::Write {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            });
        }
        self.inner.set(key, value)
    }

    fn clear(&mut self, key: &str) -> Result<(), crate::StorageError> {
        self.inner.clear(key)
    }
}

#[tokio::test]
async fn failed_user_write_leaves_no_token_behind() {
    let api = FakeApi::accepting("t1", admin());
    let mut store = SessionStore::restore(UserWriteFails::default());

    store.login(&api, "admin@turing.com", "123456").await.unwrap();

    assert!(store.is_authenticated());
    assert_eq!(store.token(), None);
    assert_eq!(store.storage().get(USER_KEY), None);
}

#[test]
fn failed_user_write_drops_token_from_earlier_session() {
    let mut storage = UserWriteFails::default();
    storage.inner.set(TOKEN_KEY, "stale").unwrap();
    let mut store = SessionStore::restore(storage);

    store.establish(LoginResponse {
        access_token: "t2".to_owned(),
        user: clerk(),
    });

    assert_eq!(store.token(), None);
}
