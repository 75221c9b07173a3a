use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::get;
use session::ProviderConfig;
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;

/// Serve a fake provider whose health endpoint answers `status` when the
/// anon key matches. Returns its base URL.
async fn fake_provider(status: StatusCode) -> String {
    let app = Router::new().route(
        "/auth/v1/health",
        get(move |headers: HeaderMap| async move {
            if headers.get("apikey").and_then(|v| v.to_str().ok()) == Some("anon-key") {
                status
            } else {
                StatusCode::UNAUTHORIZED
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = api_routes(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { serde_json::Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

#[tokio::test]
async fn healthz_is_ok_without_provider() {
    let (status, _) = get_json(AppState::new(None), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn readyz_unavailable_when_unconfigured() {
    let (status, body) = get_json(AppState::new(None), "/readyz").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["ready"], false);
    assert_eq!(body["reason"], "session provider is not configured");
}

#[tokio::test]
async fn readyz_ok_when_provider_healthy() {
    let url = fake_provider(StatusCode::OK).await;
    let config = ProviderConfig::new(&url, "anon-key").unwrap();
    let (status, body) = get_json(AppState::new(Some(config)), "/readyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "ready": true }));
}

#[tokio::test]
async fn readyz_reports_upstream_status() {
    let url = fake_provider(StatusCode::BAD_GATEWAY).await;
    let config = ProviderConfig::new(&url, "anon-key").unwrap();
    let (status, body) = get_json(AppState::new(Some(config)), "/readyz").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["reason"], "session provider health returned 502");
}

#[tokio::test]
async fn readyz_sends_anon_key() {
    let url = fake_provider(StatusCode::OK).await;
    let config = ProviderConfig::new(&url, "wrong-key").unwrap();
    let (status, body) = get_json(AppState::new(Some(config)), "/readyz").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["reason"], "session provider health returned 401");
}

#[tokio::test]
async fn readyz_unavailable_when_provider_unreachable() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config = ProviderConfig::new(&format!("http://{addr}"), "anon-key").unwrap();
    let (status, body) = get_json(AppState::new(Some(config)), "/readyz").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["reason"].as_str().unwrap().starts_with("session provider unreachable"));
}
