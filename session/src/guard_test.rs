use super::*;

#[test]
fn public_routes_always_render() {
    for status in [SessionStatus::Loading, SessionStatus::Authenticated, SessionStatus::Anonymous] {
        assert_eq!(decide(RouteAccess::Public, status), GuardDecision::Render);
    }
}

#[test]
fn gated_route_waits_while_loading() {
    assert_eq!(
        decide(RouteAccess::AuthenticatedOnly, SessionStatus::Loading),
        GuardDecision::Wait
    );
}

#[test]
fn gated_route_redirects_anonymous_to_auth() {
    assert_eq!(
        decide(RouteAccess::AuthenticatedOnly, SessionStatus::Anonymous),
        GuardDecision::Redirect(routes::AUTH)
    );
    assert_eq!(
        decide(RouteAccess::AuthenticatedOnly, SessionStatus::Authenticated),
        GuardDecision::Render
    );
}

#[test]
fn anonymous_only_route_redirects_signed_in_users() {
    let access = RouteAccess::AnonymousOnly { redirect_to: routes::DASHBOARD };
    assert_eq!(
        decide(access, SessionStatus::Authenticated),
        GuardDecision::Redirect(routes::DASHBOARD)
    );
    assert_eq!(decide(access, SessionStatus::Anonymous), GuardDecision::Render);
}

#[test]
fn guard_never_redirects_before_resolution() {
    let mut guard = RouteGuard::new(RouteAccess::AuthenticatedOnly);
    assert_eq!(guard.evaluate(SessionStatus::Loading), None);
    assert!(!guard.allows(SessionStatus::Loading));
}

#[test]
fn guard_redirects_once_per_resolved_status() {
    let mut guard = RouteGuard::new(RouteAccess::AuthenticatedOnly);
    assert_eq!(guard.evaluate(SessionStatus::Anonymous), Some(routes::AUTH));
    assert_eq!(guard.evaluate(SessionStatus::Anonymous), None);
}

#[test]
fn guard_redirects_again_after_sign_out() {
    let mut guard = RouteGuard::new(RouteAccess::AuthenticatedOnly);
    assert_eq!(guard.evaluate(SessionStatus::Authenticated), None);
    assert!(guard.allows(SessionStatus::Authenticated));
    assert_eq!(guard.evaluate(SessionStatus::Anonymous), Some(routes::AUTH));
    assert!(!guard.allows(SessionStatus::Anonymous));
}
