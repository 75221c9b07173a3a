//! Provider-facing session and user DTOs.
//!
//! DESIGN
//! ======
//! Field names follow the hosted auth API's JSON so responses deserialize
//! without an intermediate layer. Unknown fields are ignored; optional
//! fields default so older and newer provider versions both parse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Mutable, user-owned metadata attached to an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    /// Display name chosen at sign-up or edited from the dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// An account as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned user identifier (UUID string).
    pub id: String,
    /// Primary email address, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// User-editable metadata.
    #[serde(default)]
    pub user_metadata: UserMetadata,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 timestamp of email confirmation; absent while unverified.
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
}

impl User {
    /// Whether the provider has confirmed the account's email address.
    #[must_use]
    pub fn email_verified(&self) -> bool {
        self.email_confirmed_at.is_some()
    }
}

/// Proof of authentication held by the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent with authenticated provider requests.
    pub access_token: String,
    /// Token exchanged for a fresh session once the access token expires.
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Access token lifetime in seconds, relative to issuance.
    #[serde(default)]
    pub expires_in: i64,
    /// Absolute expiry in seconds since the Unix epoch.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl Session {
    /// Fill in `expires_at` from `expires_in` when the provider omitted it.
    #[must_use]
    pub fn stamped(mut self, now: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = Some(now + self.expires_in);
        }
        self
    }

    /// True when the access token expires within `margin` seconds of `now`.
    ///
    /// A session without a known expiry is treated as expiring so it gets
    /// refreshed rather than trusted indefinitely.
    #[must_use]
    pub fn expires_within(&self, now: i64, margin: i64) -> bool {
        self.expires_at.map_or(true, |at| at - now <= margin)
    }
}

/// Kind of session transition reported to listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

/// A session transition plus the session that holds after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionChange {
    pub event: AuthEvent,
    pub session: Option<Session>,
}

/// Result of a sign-up request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The provider auto-confirmed the account and issued a session.
    Session(Session),
    /// The account exists but the email link must be followed first.
    PendingConfirmation { user: User },
}
