//! Route-level screens.
//!
//! Auth pages own their form orchestration; protected pages install the
//! route guard before rendering anything session-dependent.

pub mod categories;
pub mod login;
pub mod products;
pub mod register;
