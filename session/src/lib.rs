//! Client-side session core for the inventory admin front-end.
//!
//! This crate owns who-is-signed-in state and the navigation gate shared by
//! the browser `client` and the native `cli`. It is framework-free: storage,
//! the backend auth endpoints and navigation are injected collaborators, so
//! each front-end plugs in its own (`localStorage` + `gloo-net` in the browser,
//! a JSON file + `reqwest` on the command line).
//!
//! MODULES
//! =======
//! - `types`: wire and storage records (`User`, login/register payloads).
//! - `storage`: the key-value `Storage` seam and an in-memory implementation.
//! - `api`: the `AuthApi` collaborator trait and its error type.
//! - `store`: `SessionStore`, the single source of truth for the session.
//! - `guard`: the route table and the pre-navigation access check.
//! - `form`: login/register input validation.
//! - `loading`: a loading flag that is always cleared when a call settles.

pub mod api;
pub mod form;
pub mod guard;
pub mod loading;
pub mod storage;
pub mod store;
pub mod types;

pub use api::{ApiError, AuthApi};
pub use form::FormError;
pub use guard::{Access, Route, check};
pub use storage::{MemoryStorage, Storage, StorageError};
pub use store::{Navigator, SessionStore, SessionView};
pub use types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User, UserId};
