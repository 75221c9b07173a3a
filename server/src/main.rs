mod error;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Non-fatal: the site still serves, readiness reports the provider as unconfigured.
    let provider = match session::ProviderConfig::from_env() {
        Ok(config) => {
            tracing::info!(url = config.url(), "session provider configured");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(error = %e, "session provider not configured; readiness probe will fail");
            None
        }
    };

    let state = state::AppState::new(provider);
    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "imsdly listening");
    axum::serve(listener, app).await.expect("server failed");
}
