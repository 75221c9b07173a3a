//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no session state of its own; it only knows where the hosted
//! auth provider lives so readiness can probe it.

use std::time::Duration;

use session::ProviderConfig;

/// Upper bound on a single readiness probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct AppState {
    pub provider: Option<ProviderConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(provider: Option<ProviderConfig>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "http client build failed; using defaults");
                reqwest::Client::new()
            });
        Self { provider, http }
    }
}
