//! Hosted auth API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionClient` is constructed once by the app root and injected into
//! views through context. It owns the persisted session, talks to the
//! provider's `/auth/v1` endpoints, and broadcasts every session transition
//! through its [`SessionHub`].
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections keep the provider's message verbatim. Local session
//! cleanup on sign-out happens even when the remote call fails, so the
//! browser never keeps a session the user asked to drop.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use futures::channel::mpsc;
use futures::lock::Mutex;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ProviderConfig;
use crate::error::AuthError;
use crate::hub::{SessionHub, Subscription};
use crate::transport::{Clock, HttpRequest, HttpResponse, Method, SessionStore, Transport};
use crate::types::{AuthEvent, Session, SessionChange, SignUpOutcome, User, UserMetadata};

/// Refresh sessions this many seconds before they actually expire.
pub const EXPIRY_MARGIN_SECS: i64 = 10;

struct ClientInner {
    config: ProviderConfig,
    storage_key: String,
    transport: Box<dyn Transport>,
    store: Box<dyn SessionStore>,
    clock: Box<dyn Clock>,
    hub: SessionHub,
    /// Held for the duration of a token refresh.
    refresh_lock: Mutex<()>,
}

/// Cheaply cloneable handle to the provider client.
#[derive(Clone)]
pub struct SessionClient {
    inner: Arc<ClientInner>,
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("url", &self.inner.config.url())
            .field("storage_key", &self.inner.storage_key)
            .finish_non_exhaustive()
    }
}

impl SessionClient {
    pub fn new(
        config: ProviderConfig,
        transport: impl Transport + 'static,
        store: impl SessionStore + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        let storage_key = config.storage_key();
        Self {
            inner: Arc::new(ClientInner {
                config,
                storage_key,
                transport: Box::new(transport),
                store: Box::new(store),
                clock: Box::new(clock),
                hub: SessionHub::new(),
                refresh_lock: Mutex::new(()),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.inner.config
    }

    /// Current session, refreshed first if it is about to expire.
    ///
    /// Refreshes are single-flight: concurrent callers wait for the one in
    /// progress and then reuse the session it stored. A refresh the provider
    /// rejects ends the session (storage cleared, `SignedOut` broadcast,
    /// `Ok(None)`) unless the stored session was rotated in the meantime.
    ///
    /// # Errors
    ///
    /// Returns the transport/decode error if a needed refresh could not reach
    /// the provider.
    pub async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        match self.load_session() {
            Some(session) if self.is_expiring(&session) => {}
            current => return Ok(current),
        }

        let _refreshing = self.inner.refresh_lock.lock().await;
        // Another caller may have refreshed or signed out while we waited.
        let session = match self.load_session() {
            Some(session) if self.is_expiring(&session) => session,
            current => return Ok(current),
        };

        match self.refresh(&session.refresh_token).await {
            Ok(fresh) => {
                self.persist(&fresh);
                self.emit(AuthEvent::TokenRefreshed, Some(fresh.clone()));
                Ok(Some(fresh))
            }
            Err(err) if err.is_provider() => {
                let current = self.load_session();
                if current.as_ref().is_some_and(|s| s.refresh_token != session.refresh_token) {
                    log::info!("session refresh rejected after rotation, keeping newer session: {err}");
                    return Ok(current);
                }
                log::info!("session refresh rejected, signing out: {err}");
                self.clear();
                self.emit(AuthEvent::SignedOut, None);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Register a session-change listener.
    #[must_use]
    pub fn on_session_change(&self) -> (Subscription, mpsc::UnboundedReceiver<SessionChange>) {
        self.inner.hub.subscribe()
    }

    /// Sign in with email + password.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection (e.g. invalid credentials) or a
    /// transport/decode failure.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let request = self.request(Method::Post, "token?grant_type=password", None, Some(body));
        let session: Session = self.call(request).await?;
        let session = session.stamped(self.inner.clock.now_unix());
        self.persist(&session);
        self.emit(AuthEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    /// Create an account with `metadata` stored as user metadata.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection (e.g. already registered) or a
    /// transport/decode failure.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &UserMetadata,
    ) -> Result<SignUpOutcome, AuthError> {
        let body = serde_json::json!({ "email": email, "password": password, "data": metadata });
        let request = self.request(Method::Post, "signup", None, Some(body));
        let value: serde_json::Value = self.call(request).await?;

        if value.get("access_token").is_some() {
            let session: Session = serde_json::from_value(value)?;
            let session = session.stamped(self.inner.clock.now_unix());
            self.persist(&session);
            self.emit(AuthEvent::SignedIn, Some(session.clone()));
            return Ok(SignUpOutcome::Session(session));
        }
        let user: User = serde_json::from_value(value)?;
        Ok(SignUpOutcome::PendingConfirmation { user })
    }

    /// End the current session locally and at the provider.
    pub async fn sign_out(&self) {
        if let Some(session) = self.load_session() {
            let request = self.request(Method::Post, "logout", Some(&session.access_token), None);
            match self.inner.transport.send(request).await {
                Ok(resp) if resp.is_success() => {}
                Ok(resp) => log::warn!("remote sign-out returned {}", resp.status),
                Err(err) => log::warn!("remote sign-out failed: {err}"),
            }
        }
        self.clear();
        self.emit(AuthEvent::SignedOut, None);
    }

    /// Replace the signed-in user's metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingSession`] when signed out, otherwise the
    /// provider's rejection or a transport/decode failure.
    pub async fn update_user(&self, metadata: &UserMetadata) -> Result<User, AuthError> {
        let session = self.get_session().await?.ok_or(AuthError::MissingSession)?;
        let body = serde_json::json!({ "data": metadata });
        let request = self.request(Method::Put, "user", Some(&session.access_token), Some(body));
        let user: User = self.call(request).await?;

        // Re-read so a concurrent sign-out is not resurrected.
        if let Some(mut current) = self.load_session() {
            current.user = user.clone();
            self.persist(&current);
            self.emit(AuthEvent::UserUpdated, Some(current));
        }
        Ok(user)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let request = self.request(Method::Post, "token?grant_type=refresh_token", None, Some(body));
        let session: Session = self.call(request).await?;
        Ok(session.stamped(self.inner.clock.now_unix()))
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        access_token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> HttpRequest {
        let config = &self.inner.config;
        let bearer = access_token.unwrap_or(config.anon_key());
        let mut headers = vec![
            ("apikey".to_owned(), config.anon_key().to_owned()),
            ("Authorization".to_owned(), format!("Bearer {bearer}")),
        ];
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        HttpRequest {
            method,
            url: config.endpoint(path),
            headers,
            body: body.map(|b| b.to_string()),
        }
    }

    async fn call<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, AuthError> {
        let response = self.inner.transport.send(request).await?;
        if !response.is_success() {
            return Err(provider_error(&response));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    fn is_expiring(&self, session: &Session) -> bool {
        session.expires_within(self.inner.clock.now_unix(), EXPIRY_MARGIN_SECS)
    }

    fn load_session(&self) -> Option<Session> {
        let raw = self.inner.store.load(&self.inner.storage_key)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("discarding unreadable stored session: {err}");
                self.clear();
                None
            }
        }
    }

    fn persist(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(raw) => self.inner.store.save(&self.inner.storage_key, &raw),
            Err(err) => log::warn!("failed to serialize session: {err}"),
        }
    }

    fn clear(&self) {
        self.inner.store.remove(&self.inner.storage_key);
    }

    fn emit(&self, event: AuthEvent, session: Option<Session>) {
        self.inner.hub.notify(&SessionChange { event, session });
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

/// Turn a non-2xx response into a provider error with the most specific
/// message the body offers.
fn provider_error(response: &HttpResponse) -> AuthError {
    let body: ErrorBody = serde_json::from_str(&response.body).unwrap_or_default();
    let message = body
        .msg
        .or(body.error_description)
        .or(body.message)
        .or(body.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with status {}", response.status));
    AuthError::Provider { status: response.status, message }
}
