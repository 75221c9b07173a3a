//! Route gating decisions.
//!
//! Gated views must never show protected content, or redirect, before the
//! session is resolved. Redirects are issued once per resolved status so a
//! re-render with the same status cannot loop.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::mirror::SessionStatus;

/// Site routes.
pub mod routes {
    pub const HOME: &str = "/";
    pub const AUTH: &str = "/auth";
    pub const DASHBOARD: &str = "/dashboard";
    pub const DOWNLOAD: &str = "/download";
}

/// Who may see a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Anonymous visitors are sent to the auth view.
    AuthenticatedOnly,
    /// Signed-in visitors are sent to `redirect_to`.
    AnonymousOnly { redirect_to: &'static str },
}

/// What a view should do for the current session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the neutral loading state.
    Wait,
    Render,
    Redirect(&'static str),
}

#[must_use]
pub fn decide(access: RouteAccess, status: SessionStatus) -> GuardDecision {
    match (access, status) {
        (RouteAccess::Public, _) => GuardDecision::Render,
        (_, SessionStatus::Loading) => GuardDecision::Wait,
        (RouteAccess::AuthenticatedOnly, SessionStatus::Anonymous) => GuardDecision::Redirect(routes::AUTH),
        (RouteAccess::AnonymousOnly { redirect_to }, SessionStatus::Authenticated) => {
            GuardDecision::Redirect(redirect_to)
        }
        _ => GuardDecision::Render,
    }
}

/// Stateful guard for one view instance.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    access: RouteAccess,
    last: Option<SessionStatus>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(access: RouteAccess) -> Self {
        Self { access, last: None }
    }

    #[must_use]
    pub fn access(&self) -> RouteAccess {
        self.access
    }

    /// Redirect target for `status`, reported only the first time a given
    /// resolved status is seen.
    pub fn evaluate(&mut self, status: SessionStatus) -> Option<&'static str> {
        if status == SessionStatus::Loading || self.last == Some(status) {
            return None;
        }
        self.last = Some(status);
        match decide(self.access, status) {
            GuardDecision::Redirect(to) => Some(to),
            GuardDecision::Wait | GuardDecision::Render => None,
        }
    }

    /// Whether protected content may be rendered for `status`.
    #[must_use]
    pub fn allows(&self, status: SessionStatus) -> bool {
        decide(self.access, status) == GuardDecision::Render
    }
}
