//! Hosted auth provider configuration.
//!
//! The provider URL and anon key are public values. The browser bundle bakes
//! them in at build time; the server reads the same names at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const URL_VAR: &str = "SESSION_PROVIDER_URL";
pub const ANON_KEY_VAR: &str = "SESSION_PROVIDER_ANON_KEY";

const LOCAL_DEV_URL: &str = "http://localhost:54321";
const LOCAL_DEV_ANON_KEY: &str = "local-dev-anon-key";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid provider url: {0}")]
    InvalidUrl(String),
}

/// Location and public key of the hosted auth API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    url: String,
    anon_key: String,
}

impl ProviderConfig {
    /// Build a config, normalizing a trailing slash off the URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not `http(s)://host[...]` or the key is empty.
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim().trim_end_matches('/');
        if host_of(url).is_none() {
            return Err(ConfigError::InvalidUrl(url.to_owned()));
        }
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(ConfigError::Missing(ANON_KEY_VAR));
        }
        Ok(Self { url: url.to_owned(), anon_key: anon_key.to_owned() })
    }

    /// Load from `SESSION_PROVIDER_URL` / `SESSION_PROVIDER_ANON_KEY` at runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(URL_VAR).map_err(|_| ConfigError::Missing(URL_VAR))?;
        let key = std::env::var(ANON_KEY_VAR).map_err(|_| ConfigError::Missing(ANON_KEY_VAR))?;
        Self::new(&url, &key)
    }

    /// Load the values captured when this crate was compiled.
    ///
    /// # Errors
    ///
    /// Returns an error if the build environment lacked either variable.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let url = option_env!("SESSION_PROVIDER_URL").ok_or(ConfigError::Missing(URL_VAR))?;
        let key = option_env!("SESSION_PROVIDER_ANON_KEY").ok_or(ConfigError::Missing(ANON_KEY_VAR))?;
        Self::new(url, key)
    }

    /// The hosted stack's local development defaults (`localhost:54321`).
    #[must_use]
    pub fn local_dev() -> Self {
        Self { url: LOCAL_DEV_URL.to_owned(), anon_key: LOCAL_DEV_ANON_KEY.to_owned() }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Absolute URL of an auth API path such as `token?grant_type=password`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }

    /// Browser storage key for the persisted session: `sb-<project-ref>-auth-token`.
    #[must_use]
    pub fn storage_key(&self) -> String {
        let host = host_of(&self.url).unwrap_or_default();
        let project_ref = host.split('.').next().unwrap_or(host);
        format!("sb-{project_ref}-auth-token")
    }
}

/// Host part of an `http(s)` URL, without port or path.
fn host_of(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit('@').next()?.split(':').next()?;
    if host.is_empty() { None } else { Some(host) }
}
