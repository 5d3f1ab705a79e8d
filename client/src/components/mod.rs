//! Reusable UI components shared by pages.

pub mod navbar;
pub mod notice;
