//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every identity-aware view attaches its own session mirror and, when gated,
//! applies identical redirect behavior through the route guard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::guard::{GuardDecision, decide};
use session::{MirrorHandle, RouteAccess, RouteGuard, SessionClient, SessionMirror};

use crate::state::auth::AuthState;

/// Attach a session mirror to the current view and return its state signal.
///
/// The mirror is released when the owning view is cleaned up; a session fetch
/// still in flight at that point is discarded.
pub fn use_session_mirror() -> RwSignal<AuthState> {
    let client = expect_context::<SessionClient>();
    let auth = RwSignal::new(AuthState::default());

    #[cfg(feature = "hydrate")]
    mirror_into(&client, auth);
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
    }

    auth
}

/// Feed `auth` from a new mirror of `client` until the current owner is
/// cleaned up.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn mirror_into(client: &SessionClient, auth: RwSignal<AuthState>) -> MirrorHandle {
    let mirror = SessionMirror::attach(client);
    let handle = mirror.handle();
    leptos::task::spawn_local(mirror.run(move |state| {
        let _ = auth.try_set(AuthState::from(state));
    }));
    let disposer = handle.clone();
    on_cleanup(move || disposer.dispose());
    handle
}

/// Navigate whenever `access` rejects a newly resolved session status.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, access: RouteAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut guard = RouteGuard::new(access);
    Effect::new(move || {
        let status = auth.with(AuthState::status);
        if let Some(target) = guard.evaluate(status) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Whether `access` lets the view render its content for `state`.
pub fn gate_allows(access: RouteAccess, state: &AuthState) -> bool {
    decide(access, state.status()) == GuardDecision::Render
}

/// Placeholder text for a gated view that may not render yet.
pub fn gate_placeholder(state: &AuthState) -> &'static str {
    if state.loading { "Loading..." } else { "Redirecting to login..." }
}

/// Sign out in the background; mirrors observe the change and guards redirect.
pub fn sign_out(client: SessionClient) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        client.sign_out().await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
    }
}
