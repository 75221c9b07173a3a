//! Scripted fakes shared by this crate's tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::task::Poll;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::SessionClient;
use crate::config::ProviderConfig;
use crate::error::AuthError;
use crate::transport::{Clock, HttpRequest, HttpResponse, MemoryStore, SessionStore, Transport};
use crate::types::{Session, User, UserMetadata};

pub const NOW: i64 = 1_700_000_000;

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, AuthError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    yield_first: AtomicBool,
}

impl ScriptedTransport {
    pub fn reply(&self, status: u16, body: serde_json::Value) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn fail(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(AuthError::Transport(message.to_owned())));
    }

    /// Give other tasks one scheduler turn before each reply, so concurrent
    /// callers interleave the way they do against a real network.
    pub fn yield_before_reply(&self) {
        self.yield_first.store(true, Ordering::Relaxed);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AuthError> {
        self.requests.lock().unwrap().push(request);
        if self.yield_first.load(Ordering::Relaxed) {
            yield_now().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::Transport("no scripted reply".to_owned())))
    }
}

async fn yield_now() {
    let mut yielded = false;
    futures::future::poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await;
}

pub struct FixedClock(pub AtomicI64);

impl Clock for FixedClock {
    fn now_unix(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct Harness {
    pub client: SessionClient,
    pub transport: Arc<ScriptedTransport>,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<FixedClock>,
}

impl Harness {
    pub fn new() -> Self {
        let config = ProviderConfig::new("https://proj.example.co", "anon-key").unwrap();
        let transport = Arc::new(ScriptedTransport::default());
        let store = Arc::new(MemoryStore::default());
        let clock = Arc::new(FixedClock(AtomicI64::new(NOW)));
        let client = SessionClient::new(config, transport.clone(), store.clone(), clock.clone());
        Self { client, transport, store, clock }
    }

    /// Seed storage as if a previous page load had signed in.
    pub fn store_session(&self, session: &Session) {
        self.store
            .save("sb-proj-auth-token", &serde_json::to_string(session).unwrap());
    }

    pub fn stored_session(&self) -> Option<Session> {
        self.store
            .load("sb-proj-auth-token")
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }
}

pub fn user(full_name: Option<&str>) -> User {
    User {
        id: "user-1".to_owned(),
        email: Some("ada@example.com".to_owned()),
        user_metadata: UserMetadata { full_name: full_name.map(str::to_owned) },
        created_at: Some("2025-01-01T00:00:00Z".to_owned()),
        email_confirmed_at: Some("2025-01-01T00:05:00Z".to_owned()),
    }
}

pub fn session(expires_at: i64) -> Session {
    Session {
        access_token: "access-1".to_owned(),
        refresh_token: "refresh-1".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: Some(expires_at),
        user: user(Some("Ada Lovelace")),
    }
}

pub fn session_json(access_token: &str, full_name: &str) -> serde_json::Value {
    serde_json::json!({
        "access_token": access_token,
        "refresh_token": format!("{access_token}-refresh"),
        "token_type": "bearer",
        "expires_in": 3600,
        "user": {
            "id": "user-1",
            "email": "ada@example.com",
            "created_at": "2025-01-01T00:00:00Z",
            "user_metadata": { "full_name": full_name }
        }
    })
}
