//! Display-name helpers and the best-effort profile name update.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::client::SessionClient;
use crate::error::AuthError;
use crate::types::{User, UserMetadata};

/// Name shown for `user`: the metadata full name, else the email local part.
#[must_use]
pub fn display_name(user: &User) -> String {
    if let Some(name) = user.user_metadata.full_name.as_deref().map(str::trim) {
        if !name.is_empty() {
            return name.to_owned();
        }
    }
    user.email
        .as_deref()
        .and_then(|email| email.split('@').next())
        .filter(|local| !local.is_empty())
        .unwrap_or("User")
        .to_owned()
}

/// Uppercased first character of the display name, for avatar badges.
#[must_use]
pub fn avatar_initial(user: &User) -> String {
    display_name(user)
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Trim and validate a requested display name.
///
/// # Errors
///
/// Returns [`AuthError::Invalid`] for blank names.
pub fn normalize_display_name(input: &str) -> Result<String, AuthError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(AuthError::Invalid("Name cannot be empty."));
    }
    Ok(name.to_owned())
}

/// Ask the provider to rename the signed-in user.
///
/// Best-effort: returns the updated user on success and `None` on any
/// failure, which is logged and otherwise swallowed.
pub async fn update_display_name(client: &SessionClient, input: &str) -> Option<User> {
    let name = match normalize_display_name(input) {
        Ok(name) => name,
        Err(err) => {
            log::info!("profile update skipped: {err}");
            return None;
        }
    };
    let metadata = UserMetadata { full_name: Some(name) };
    match client.update_user(&metadata).await {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("profile update failed: {err}");
            None
        }
    }
}
