//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the backend auth collaborator over `gloo-net`; the wire
//! types themselves live in `inventory-session`.

pub mod api;
