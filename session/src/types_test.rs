use super::*;

fn sample_session(expires_at: Option<i64>) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at,
        user: User {
            id: "u1".to_owned(),
            email: Some("ada@example.com".to_owned()),
            user_metadata: UserMetadata::default(),
            created_at: None,
            email_confirmed_at: None,
        },
    }
}

#[test]
fn user_parses_provider_shape_and_ignores_unknown_fields() {
    let raw = r#"{
        "id": "8d0f",
        "aud": "authenticated",
        "role": "authenticated",
        "email": "ada@example.com",
        "email_confirmed_at": "2025-01-02T03:04:05Z",
        "created_at": "2025-01-01T00:00:00Z",
        "app_metadata": {"provider": "email"},
        "user_metadata": {"full_name": "Ada Lovelace", "avatar": null}
    }"#;
    let user: User = serde_json::from_str(raw).expect("user");
    assert_eq!(user.id, "8d0f");
    assert_eq!(user.user_metadata.full_name.as_deref(), Some("Ada Lovelace"));
    assert!(user.email_verified());
}

#[test]
fn user_without_metadata_defaults() {
    let user: User = serde_json::from_str(r#"{"id":"x"}"#).expect("user");
    assert_eq!(user.email, None);
    assert_eq!(user.user_metadata, UserMetadata::default());
    assert!(!user.email_verified());
}

#[test]
fn stamped_fills_missing_expiry_only() {
    let session = sample_session(None).stamped(1_000);
    assert_eq!(session.expires_at, Some(4_600));

    let session = sample_session(Some(42)).stamped(1_000);
    assert_eq!(session.expires_at, Some(42));
}

#[test]
fn expires_within_respects_margin() {
    let session = sample_session(Some(1_100));
    assert!(!session.expires_within(1_000, 10));
    assert!(session.expires_within(1_095, 10));
    assert!(session.expires_within(2_000, 10));
}

#[test]
fn session_without_expiry_counts_as_expiring() {
    assert!(sample_session(None).expires_within(0, 10));
}

#[test]
fn auth_event_uses_provider_event_names() {
    assert_eq!(serde_json::to_value(AuthEvent::TokenRefreshed).expect("json"), "TOKEN_REFRESHED");
    assert_eq!(serde_json::to_value(AuthEvent::SignedOut).expect("json"), "SIGNED_OUT");
}
