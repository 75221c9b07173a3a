#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn transport_is_unavailable_outside_browser() {
    let request = HttpRequest {
        method: session::Method::Get,
        url: "http://localhost:54321/auth/v1/user".to_owned(),
        headers: Vec::new(),
        body: None,
    };
    let result = futures::executor::block_on(BrowserTransport.send(request));
    assert_eq!(result, Err(AuthError::Transport(unavailable_message())));
}

#[test]
fn store_falls_back_to_memory() {
    let store = BrowserStore::default();
    assert_eq!(store.load("k"), None);
    store.save("k", "v");
    assert_eq!(store.load("k"), Some("v".to_owned()));
    store.remove("k");
    assert_eq!(store.load("k"), None);
}

#[test]
fn clock_reports_current_epoch_seconds() {
    // 2023-11-14 or later.
    assert!(BrowserClock.now_unix() > 1_700_000_000);
}

#[test]
fn session_client_builds_without_build_env() {
    let client = session_client();
    assert!(client.config().url().starts_with("http"));
}
