//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is per view: each identity-aware view owns its own `AuthState`
//! signal fed by a session mirror, so no mutable session state is shared
//! across view instances.

pub mod auth;
