//! Server error taxonomy.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("session provider is not configured")]
    ProviderNotConfigured,
    #[error("session provider unreachable: {0}")]
    ProviderUnreachable(#[from] reqwest::Error),
    #[error("session provider health returned {0}")]
    ProviderUnhealthy(u16),
}
