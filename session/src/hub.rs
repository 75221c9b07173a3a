//! Session change notification fan-out.
//!
//! DESIGN
//! ======
//! Each listener owns the receiving half of an unbounded channel; the hub
//! keeps the senders keyed by subscription id. Unsubscribing drops the
//! sender, which ends the listener's stream, so consumer loops terminate
//! without a separate shutdown signal.

#[cfg(test)]
#[path = "hub_test.rs"]
mod hub_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use futures::channel::mpsc;

use crate::types::SessionChange;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: HashMap<u64, mpsc::UnboundedSender<SessionChange>>,
}

/// Registry of session-change listeners.
#[derive(Clone, Default)]
pub struct SessionHub {
    inner: Arc<Mutex<HubInner>>,
}

impl SessionHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Changes are delivered on the returned receiver
    /// until the subscription is released.
    #[must_use]
    pub fn subscribe(&self) -> (Subscription, mpsc::UnboundedReceiver<SessionChange>) {
        let (tx, rx) = mpsc::unbounded();
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, tx);
        (Subscription { id, hub: Arc::downgrade(&self.inner) }, rx)
    }

    /// Deliver a change to every live listener, pruning closed ones.
    pub fn notify(&self, change: &SessionChange) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner
            .listeners
            .retain(|_, tx| tx.unbounded_send(change.clone()).is_ok());
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }
}

/// Handle to one registered listener. Released on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    hub: Weak<Mutex<HubInner>>,
}

impl Subscription {
    /// Remove the listener; its receiver yields `None` afterwards.
    /// Calling this more than once is harmless.
    pub fn unsubscribe(&self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .listeners
                .remove(&self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for HubInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubInner")
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
