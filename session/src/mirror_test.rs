use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use super::*;
use crate::test_support::{Harness, NOW, session, session_json, user};

/// Spawn `mirror.run` on a local pool, collecting every published state.
fn spawn_mirror(pool: &LocalPool, mirror: SessionMirror) -> Rc<RefCell<Vec<MirrorState>>> {
    let published = Rc::new(RefCell::new(Vec::new()));
    let sink = published.clone();
    pool.spawner()
        .spawn_local(mirror.run(move |state| sink.borrow_mut().push(state)))
        .expect("spawn");
    published
}

// =============================================================
// MirrorState
// =============================================================

#[test]
fn default_state_is_loading() {
    assert_eq!(MirrorState::default(), MirrorState::Loading);
    assert_eq!(MirrorState::default().status(), SessionStatus::Loading);
    assert!(!MirrorState::default().is_resolved());
}

#[test]
fn lookup_failure_fails_open_to_anonymous() {
    let state = MirrorState::from_lookup(Err(AuthError::Transport("offline".to_owned())));
    assert_eq!(state, MirrorState::Anonymous);
}

#[test]
fn lookup_with_session_is_authenticated() {
    let state = MirrorState::from_lookup(Ok(Some(session(NOW + 60))));
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("user-1"));
    assert_eq!(state.status(), SessionStatus::Authenticated);
}

#[test]
fn apply_signed_out_always_clears() {
    let mut state = MirrorState::Authenticated(user(None));
    state.apply(&SessionChange { event: AuthEvent::SignedOut, session: Some(session(NOW)) });
    assert_eq!(state, MirrorState::Anonymous);
}

#[test]
fn apply_signed_in_overwrites_anonymous() {
    let mut state = MirrorState::Anonymous;
    state.apply(&SessionChange { event: AuthEvent::SignedIn, session: Some(session(NOW)) });
    assert!(matches!(state, MirrorState::Authenticated(_)));
}

#[test]
fn replace_user_only_applies_when_authenticated() {
    let mut anonymous = MirrorState::Anonymous;
    anonymous.replace_user(user(Some("X")));
    assert_eq!(anonymous, MirrorState::Anonymous);

    let mut state = MirrorState::Authenticated(user(Some("Old")));
    state.replace_user(user(Some("New")));
    assert_eq!(
        state.user().and_then(|u| u.user_metadata.full_name.as_deref()),
        Some("New")
    );
}

// =============================================================
// SessionMirror lifecycle
// =============================================================

#[test]
fn run_publishes_anonymous_when_no_session() {
    let h = Harness::new();
    let mut pool = LocalPool::new();
    let published = spawn_mirror(&pool, SessionMirror::attach(&h.client));

    pool.run_until_stalled();

    assert_eq!(*published.borrow(), vec![MirrorState::Anonymous]);
}

#[test]
fn run_follows_sign_in_and_sign_out() {
    let h = Harness::new();
    let mut pool = LocalPool::new();
    let mirror = SessionMirror::attach(&h.client);
    let handle = mirror.handle();
    let published = spawn_mirror(&pool, mirror);
    pool.run_until_stalled();

    h.transport.reply(200, session_json("access-1", "Ada"));
    block_on(h.client.sign_in_with_password("ada@example.com", "pw")).expect("sign in");
    pool.run_until_stalled();

    h.transport.reply(204, serde_json::Value::Null);
    block_on(h.client.sign_out());
    pool.run_until_stalled();

    let states = published.borrow().clone();
    assert_eq!(states.len(), 3);
    assert_eq!(states[0], MirrorState::Anonymous);
    assert_eq!(states[1].status(), SessionStatus::Authenticated);
    assert_eq!(states[2], MirrorState::Anonymous);

    handle.dispose();
    pool.run();
}

#[test]
fn dispose_before_fetch_resolves_publishes_nothing() {
    let h = Harness::new();
    h.store_session(&session(NOW + 3600));
    let mut pool = LocalPool::new();
    let mirror = SessionMirror::attach(&h.client);
    mirror.handle().dispose();
    let published = spawn_mirror(&pool, mirror);

    pool.run();

    assert!(published.borrow().is_empty());
}

#[test]
fn dispose_releases_listener_and_stops_updates() {
    let h = Harness::new();
    let mut pool = LocalPool::new();
    let mirror = SessionMirror::attach(&h.client);
    let handle = mirror.handle();
    let published = spawn_mirror(&pool, mirror);
    pool.run_until_stalled();

    handle.dispose();
    assert!(!handle.is_alive());

    h.transport.reply(200, session_json("access-1", "Ada"));
    block_on(h.client.sign_in_with_password("ada@example.com", "pw")).expect("sign in");
    // The run future must finish on its own once the listener is gone.
    pool.run();

    assert_eq!(*published.borrow(), vec![MirrorState::Anonymous]);
}

#[test]
fn mirrors_are_independent_per_view() {
    let h = Harness::new();
    let mut pool = LocalPool::new();
    let first = SessionMirror::attach(&h.client);
    let first_handle = first.handle();
    let first_states = spawn_mirror(&pool, first);
    let second = SessionMirror::attach(&h.client);
    let second_handle = second.handle();
    let second_states = spawn_mirror(&pool, second);
    pool.run_until_stalled();

    first_handle.dispose();
    h.transport.reply(200, session_json("access-1", "Ada"));
    block_on(h.client.sign_in_with_password("ada@example.com", "pw")).expect("sign in");
    pool.run_until_stalled();

    assert_eq!(first_states.borrow().len(), 1);
    assert_eq!(second_states.borrow().len(), 2);

    second_handle.dispose();
    pool.run();
}

#[test]
fn failed_initial_fetch_resolves_anonymous() {
    let h = Harness::new();
    h.store_session(&session(NOW - 10));
    h.transport.fail("offline");
    let mut pool = LocalPool::new();
    let mirror = SessionMirror::attach(&h.client);
    let handle = mirror.handle();
    let published = spawn_mirror(&pool, mirror);

    pool.run_until_stalled();

    assert_eq!(*published.borrow(), vec![MirrorState::Anonymous]);
    handle.dispose();
    pool.run();
}
