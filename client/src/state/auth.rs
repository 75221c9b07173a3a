//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::profile::{avatar_initial, display_name};
use session::{MirrorState, SessionStatus, User};

/// Authentication state tracking the current user and loading status.
///
/// Starts loading; a session mirror resolves it and keeps it current.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl From<MirrorState> for AuthState {
    fn from(state: MirrorState) -> Self {
        match state {
            MirrorState::Loading => Self::default(),
            MirrorState::Authenticated(user) => Self { user: Some(user), loading: false },
            MirrorState::Anonymous => Self { user: None, loading: false },
        }
    }
}

impl AuthState {
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match (self.loading, &self.user) {
            (true, _) => SessionStatus::Loading,
            (false, Some(_)) => SessionStatus::Authenticated,
            (false, None) => SessionStatus::Anonymous,
        }
    }

    /// Swap in an updated user record; ignored unless signed in.
    pub fn replace_user(&mut self, user: User) {
        if self.user.is_some() {
            self.user = Some(user);
        }
    }

    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(display_name)
    }

    #[must_use]
    pub fn initial(&self) -> String {
        self.user.as_ref().map(avatar_initial).unwrap_or_default()
    }

    #[must_use]
    pub fn email(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.email.clone())
            .unwrap_or_default()
    }
}
