//! Session model, hosted-auth client, and view-level session sync.
//!
//! This crate is UI-framework agnostic so the Leptos client can consume it
//! directly while tests drive it natively with scripted transports. It owns
//! the provider wire format, the change-notification hub, the per-view
//! session mirror, and the route-guard decision table.

pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod hub;
pub mod mirror;
pub mod profile;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::SessionClient;
pub use config::{ConfigError, ProviderConfig};
pub use error::AuthError;
pub use guard::{GuardDecision, RouteAccess, RouteGuard, routes};
pub use hub::{SessionHub, Subscription};
pub use mirror::{MirrorHandle, MirrorState, SessionMirror, SessionStatus};
pub use transport::{Clock, HttpRequest, HttpResponse, MemoryStore, Method, SessionStore, SystemClock, Transport};
pub use types::{AuthEvent, Session, SessionChange, SignUpOutcome, User, UserMetadata};
