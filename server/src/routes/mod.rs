//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the probe endpoints and the Leptos SSR shell under a single Axum
//! router. All authentication happens in the browser against the hosted
//! provider; the server only renders pages and serves assets.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::state::AppState;

/// Liveness and readiness probes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .with_state(state)
}

/// Static asset directory: `SITE_DIR` if set, else the Leptos site root.
fn site_dir(site_root: &str) -> PathBuf {
    std::env::var("SITE_DIR").map_or_else(|_| PathBuf::from(site_root), PathBuf::from)
}

/// Full site: probes + Leptos SSR pages + `/pkg` bundle + static fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_app(state: AppState) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_path = site_dir(leptos_options.site_root.as_ref());
    let assets = ServeDir::new(&site_path).append_index_html_on_directories(true);

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_path.join("pkg")))
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
