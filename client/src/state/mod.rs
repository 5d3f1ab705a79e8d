//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session core owns persistence and login/logout transitions; this
//! layer only mirrors it into signals that views can track.

pub mod auth;
