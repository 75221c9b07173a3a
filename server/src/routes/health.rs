//! Liveness and readiness probes.
//!
//! `/healthz` only proves the process answers. `/readyz` additionally checks
//! that the hosted auth provider is configured and reports healthy, since the
//! site is unusable for sign-in without it.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Readiness {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match probe_provider(&state).await {
        Ok(()) => (StatusCode::OK, Json(Readiness { ready: true, reason: None })),
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Readiness { ready: false, reason: Some(e.to_string()) }))
        }
    }
}

async fn probe_provider(state: &AppState) -> Result<(), ServerError> {
    let config = state.provider.as_ref().ok_or(ServerError::ProviderNotConfigured)?;
    let resp = state
        .http
        .get(config.endpoint("health"))
        .header("apikey", config.anon_key())
        .send()
        .await?;
    let status = resp.status();
    if status.is_success() { Ok(()) } else { Err(ServerError::ProviderUnhealthy(status.as_u16())) }
}
