use super::*;
use session::{MirrorState, User, UserMetadata};

fn signed_in(full_name: Option<&str>) -> AuthState {
    AuthState::from(MirrorState::Authenticated(User {
        id: "user-1".to_owned(),
        email: Some("ada@example.com".to_owned()),
        user_metadata: UserMetadata { full_name: full_name.map(str::to_owned) },
        created_at: Some("2024-03-09T12:30:00.000000Z".to_owned()),
        email_confirmed_at: None,
    }))
}

#[test]
fn member_since_takes_the_date_part() {
    assert_eq!(member_since(Some("2024-03-09T12:30:00.000000Z")), "2024-03-09");
}

#[test]
fn member_since_rejects_missing_or_malformed_timestamps() {
    assert_eq!(member_since(None), "Unknown");
    assert_eq!(member_since(Some("2024")), "Unknown");
    assert_eq!(member_since(Some("last tuesday")), "Unknown");
}

#[test]
fn greeting_prefers_full_name() {
    assert_eq!(greeting(&signed_in(Some("Ada Lovelace"))), "Welcome back, Ada Lovelace");
}

#[test]
fn greeting_falls_back_to_email_local_part() {
    assert_eq!(greeting(&signed_in(None)), "Welcome back, ada");
}
