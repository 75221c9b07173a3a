//! Browser implementations of the session client's environment seams.
//!
//! Client-side (hydrate): `gloo-net` for HTTP, `localStorage` for the
//! persisted session, `Date.now()` for time.
//! Server-side (SSR): requests fail as unavailable and storage is in-memory,
//! so server rendering always sees an unresolved session.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures (private mode, quota) are swallowed: the session simply
//! does not survive a reload. Transport failures surface as
//! [`AuthError::Transport`] for the caller to treat as anonymous.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use async_trait::async_trait;
use session::{
    AuthError, Clock, HttpRequest, HttpResponse, MemoryStore, ProviderConfig, SessionClient, SessionStore,
    Transport,
};

/// Fetch-backed HTTP transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method, RequestBuilder};

            let method = match request.method {
                session::Method::Get => Method::GET,
                session::Method::Post => Method::POST,
                session::Method::Put => Method::PUT,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let built = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| AuthError::Transport(e.to_string()))?;

            let resp = built
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AuthError::Transport(unavailable_message()))
        }
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable_message() -> String {
    "not available on server".to_owned()
}

/// `localStorage`-backed session store with an in-memory fallback.
#[derive(Debug, Default)]
pub struct BrowserStore {
    fallback: MemoryStore,
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                return storage.get_item(key).ok().flatten();
            }
        }
        self.fallback.load(key)
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
                return;
            }
        }
        self.fallback.save(key, value);
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
                return;
            }
        }
        self.fallback.remove(key);
    }
}

/// `Date.now()` in the browser, `std::time` on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_unix(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            (js_sys::Date::now() / 1000.0) as i64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            session::SystemClock.now_unix()
        }
    }
}

/// Provider config baked in at build time, or the local development stack.
pub fn provider_config() -> ProviderConfig {
    ProviderConfig::from_build_env().unwrap_or_else(|err| {
        leptos::logging::warn!("{err}; falling back to local auth provider");
        ProviderConfig::local_dev()
    })
}

/// Construct the session client for this browser context.
pub fn session_client() -> SessionClient {
    SessionClient::new(provider_config(), BrowserTransport, BrowserStore::default(), BrowserClock)
}
