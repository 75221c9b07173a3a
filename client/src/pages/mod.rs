//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session mirror, route guard)
//! and delegates rendering details to `components`.

pub mod auth;
pub mod dashboard;
pub mod download;
pub mod home;
