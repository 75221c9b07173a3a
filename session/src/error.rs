//! Error taxonomy for provider calls.
//!
//! ERROR HANDLING
//! ==============
//! `Provider` carries the hosted service's own message so forms can show it
//! verbatim. `Transport` and `Decode` are infrastructure failures; session
//! lookups treat them as anonymous and only log them.

/// Failure of a session provider operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The provider rejected the request (bad credentials, duplicate account, ...).
    #[error("{message}")]
    Provider { status: u16, message: String },
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[error("unexpected provider response: {0}")]
    Decode(String),
    /// The operation needs a signed-in session and none is stored.
    #[error("not signed in")]
    MissingSession,
    /// Input rejected locally before any request was made.
    #[error("{0}")]
    Invalid(&'static str),
}

impl AuthError {
    /// Whether the provider itself answered with a rejection.
    #[must_use]
    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
