//! View-level session mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every view that renders identity-dependent content attaches its own
//! mirror. The mirror fetches the current session once, then follows the
//! client's change notifications until the view is torn down.
//!
//! LIFECYCLE
//! =========
//! `attach` registers the listener immediately so no transition between the
//! initial fetch and the first notification is lost. `MirrorHandle::dispose`
//! releases the listener and blocks any further publishing, including the
//! result of an initial fetch still in flight.

#[cfg(test)]
#[path = "mirror_test.rs"]
mod mirror_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::StreamExt;
use futures::channel::mpsc;

use crate::client::SessionClient;
use crate::error::AuthError;
use crate::hub::Subscription;
use crate::types::{AuthEvent, Session, SessionChange, User};

/// Coarse session status used for gating decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Anonymous,
}

/// Local copy of the provider's session truth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MirrorState {
    /// Initial fetch has not resolved yet.
    #[default]
    Loading,
    Authenticated(User),
    Anonymous,
}

impl MirrorState {
    /// State after the initial lookup. Lookup failures fail open to anonymous.
    #[must_use]
    pub fn from_lookup(result: Result<Option<Session>, AuthError>) -> Self {
        match result {
            Ok(session) => Self::from_session(session.as_ref()),
            Err(err) => {
                log::warn!("session lookup failed, treating as anonymous: {err}");
                Self::Anonymous
            }
        }
    }

    #[must_use]
    pub fn from_session(session: Option<&Session>) -> Self {
        session.map_or(Self::Anonymous, |s| Self::Authenticated(s.user.clone()))
    }

    /// Overwrite local state with the session a notification reports.
    pub fn apply(&mut self, change: &SessionChange) {
        *self = match change.event {
            AuthEvent::SignedOut => Self::Anonymous,
            _ => Self::from_session(change.session.as_ref()),
        };
    }

    /// Swap in an updated user record; ignored unless signed in.
    pub fn replace_user(&mut self, user: User) {
        if let Self::Authenticated(current) = self {
            *current = user;
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Loading | Self::Anonymous => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Loading => SessionStatus::Loading,
            Self::Authenticated(_) => SessionStatus::Authenticated,
            Self::Anonymous => SessionStatus::Anonymous,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Disposal handle for a running mirror. Cloneable and `Send + Sync` so it
/// can be moved into UI cleanup callbacks.
#[derive(Clone, Debug)]
pub struct MirrorHandle {
    alive: Arc<AtomicBool>,
    subscription: Arc<Subscription>,
}

impl MirrorHandle {
    /// Stop publishing and release the change listener.
    pub fn dispose(&self) {
        self.alive.store(false, Ordering::Release);
        self.subscription.unsubscribe();
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

/// Session mirror bound to one view.
pub struct SessionMirror {
    client: SessionClient,
    handle: MirrorHandle,
    changes: mpsc::UnboundedReceiver<SessionChange>,
}

impl SessionMirror {
    /// Subscribe to `client` and prepare the initial fetch.
    #[must_use]
    pub fn attach(client: &SessionClient) -> Self {
        let (subscription, changes) = client.on_session_change();
        Self {
            client: client.clone(),
            handle: MirrorHandle {
                alive: Arc::new(AtomicBool::new(true)),
                subscription: Arc::new(subscription),
            },
            changes,
        }
    }

    #[must_use]
    pub fn handle(&self) -> MirrorHandle {
        self.handle.clone()
    }

    /// Resolve the initial session, then follow notifications, handing each
    /// resulting state to `publish`. Returns once the mirror is disposed.
    pub async fn run<F>(self, mut publish: F)
    where
        F: FnMut(MirrorState),
    {
        let Self { client, handle, mut changes } = self;

        let mut state = MirrorState::from_lookup(client.get_session().await);
        if !handle.is_alive() {
            return;
        }
        publish(state.clone());

        while let Some(change) = changes.next().await {
            if !handle.is_alive() {
                break;
            }
            state.apply(&change);
            publish(state.clone());
        }
    }
}
