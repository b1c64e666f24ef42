use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::identity::IdentityError;

// =========================================================================
// FakeProvider
// =========================================================================

/// Provider double: holds a cached session and the flag the remote side
/// would report on reload.
struct FakeProvider {
    session: Option<Session>,
    remote_verified: bool,
    fail_reload: bool,
    reloads: Cell<usize>,
}

impl FakeProvider {
    fn signed_out() -> Self {
        Self { session: None, remote_verified: false, fail_reload: false, reloads: Cell::new(0) }
    }

    fn signed_in(cached_verified: bool, remote_verified: bool) -> Self {
        Self {
            session: Some(Session {
                uid: "u1".to_owned(),
                email: Some("u1@example.com".to_owned()),
                email_verified: cached_verified,
                id_token: "tok".to_owned(),
            }),
            remote_verified,
            fail_reload: false,
            reloads: Cell::new(0),
        }
    }

    fn failing(cached_verified: bool) -> Self {
        Self { fail_reload: true, ..Self::signed_in(cached_verified, true) }
    }
}

#[async_trait::async_trait(?Send)]
impl SessionProvider for FakeProvider {
    fn current_session(&self) -> Option<Session> {
        self.session.clone()
    }

    async fn reload(&self, session: &Session) -> Result<Session, IdentityError> {
        self.reloads.set(self.reloads.get() + 1);
        if self.fail_reload {
            return Err(IdentityError::Timeout { ms: 8_000 });
        }
        Ok(Session { email_verified: self.remote_verified, ..session.clone() })
    }
}

fn resolve(guard: &NavigationGuard<FakeProvider>, route: AppRoute) -> GuardOutcome {
    block_on(guard.resolve(NavigationRequest::new(route)))
}

fn reloads(guard: &NavigationGuard<FakeProvider>) -> usize {
    guard.provider().reloads.get()
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn signed_out_dashboard_redirects_to_auth() {
    let guard = NavigationGuard::new(FakeProvider::signed_out());
    assert_eq!(resolve(&guard, AppRoute::Dashboard), GuardOutcome::Redirect(AppRoute::Auth));
    assert_eq!(reloads(&guard), 0);
}

#[test]
fn verified_session_on_auth_redirects_to_dashboard() {
    let guard = NavigationGuard::new(FakeProvider::signed_in(true, true));
    assert_eq!(resolve(&guard, AppRoute::Auth), GuardOutcome::Redirect(AppRoute::Dashboard));
}

#[test]
fn unverified_session_on_auth_redirects_to_verify() {
    let guard = NavigationGuard::new(FakeProvider::signed_in(false, false));
    assert_eq!(resolve(&guard, AppRoute::Auth), GuardOutcome::Redirect(AppRoute::Verify));
}

#[test]
fn profile_with_session_is_allowed_without_refresh() {
    let guard = NavigationGuard::new(FakeProvider::signed_in(false, false));
    assert_eq!(resolve(&guard, AppRoute::Profile), GuardOutcome::Allow);
    assert_eq!(reloads(&guard), 0);
}

#[test]
fn stale_unverified_cache_refreshed_to_verified_is_allowed() {
    let guard = NavigationGuard::new(FakeProvider::signed_in(false, true));
    assert_eq!(resolve(&guard, AppRoute::Dashboard), GuardOutcome::Allow);
    assert_eq!(reloads(&guard), 1);
}

// =========================================================================
// Refresh is authoritative
// =========================================================================

#[test]
fn stale_verified_cache_refreshed_to_unverified_redirects_to_verify() {
    let guard = NavigationGuard::new(FakeProvider::signed_in(true, false));
    assert_eq!(resolve(&guard, AppRoute::Dashboard), GuardOutcome::Redirect(AppRoute::Verify));
}

#[test]
fn auth_page_decision_uses_refreshed_flag() {
    let guard = NavigationGuard::new(FakeProvider::signed_in(false, true));
    assert_eq!(resolve(&guard, AppRoute::Auth), GuardOutcome::Redirect(AppRoute::Dashboard));
    assert_eq!(reloads(&guard), 1);
}

// =========================================================================
// Refresh failure
// =========================================================================

#[test]
fn failed_refresh_on_dashboard_redirects_to_verify() {
    let guard = NavigationGuard::new(FakeProvider::failing(true));
    assert_eq!(resolve(&guard, AppRoute::Dashboard), GuardOutcome::Redirect(AppRoute::Verify));
}

#[test]
fn failed_refresh_on_auth_redirects_to_verify() {
    let guard = NavigationGuard::new(FakeProvider::failing(true));
    assert_eq!(resolve(&guard, AppRoute::Auth), GuardOutcome::Redirect(AppRoute::Verify));
}

#[test]
fn fresh_sign_in_reaches_dashboard_only_through_reload() {
    // Sign-in stores an unverified session; the reload decides.
    let guard = NavigationGuard::new(FakeProvider::signed_in(false, true));
    assert_eq!(resolve(&guard, AppRoute::Dashboard), GuardOutcome::Allow);
    assert_eq!(reloads(&guard), 1);

    let guard = NavigationGuard::new(FakeProvider::failing(false));
    assert_eq!(resolve(&guard, AppRoute::Dashboard), GuardOutcome::Redirect(AppRoute::Verify));
    assert_eq!(reloads(&guard), 1);
}

#[test]
fn failed_refresh_does_not_affect_routes_without_verification() {
    let guard = NavigationGuard::new(FakeProvider::failing(false));
    assert_eq!(resolve(&guard, AppRoute::Verify), GuardOutcome::Allow);
    assert_eq!(resolve(&guard, AppRoute::Profile), GuardOutcome::Allow);
    assert_eq!(reloads(&guard), 0);
}

// =========================================================================
// Requirements
// =========================================================================

#[test]
fn public_routes_allowed_when_signed_out() {
    let guard = NavigationGuard::new(FakeProvider::signed_out());
    assert_eq!(resolve(&guard, AppRoute::Auth), GuardOutcome::Allow);
    assert_eq!(resolve(&guard, AppRoute::Root), GuardOutcome::Allow);
}

#[test]
fn root_allowed_when_signed_in() {
    let guard = NavigationGuard::new(FakeProvider::signed_in(false, false));
    assert_eq!(resolve(&guard, AppRoute::Root), GuardOutcome::Allow);
    assert_eq!(reloads(&guard), 0);
}

#[test]
fn every_auth_route_redirects_to_auth_when_signed_out() {
    let guard = NavigationGuard::new(FakeProvider::signed_out());
    for descriptor in crate::routes::ROUTE_TABLE.iter().filter(|d| d.requirements.requires_auth) {
        assert_eq!(resolve(&guard, descriptor.route), GuardOutcome::Redirect(AppRoute::Auth), "{}", descriptor.path);
    }
}

#[test]
fn verify_page_allowed_for_unverified_session() {
    let guard = NavigationGuard::new(FakeProvider::signed_in(false, false));
    assert_eq!(resolve(&guard, AppRoute::Verify), GuardOutcome::Allow);
}

// =========================================================================
// Properties
// =========================================================================

#[test]
fn repeated_resolution_is_idempotent() {
    for provider in [
        FakeProvider::signed_out(),
        FakeProvider::signed_in(false, false),
        FakeProvider::signed_in(true, true),
        FakeProvider::failing(true),
    ] {
        let guard = NavigationGuard::new(provider);
        for descriptor in &crate::routes::ROUTE_TABLE {
            let first = resolve(&guard, descriptor.route);
            let second = resolve(&guard, descriptor.route);
            assert_eq!(first, second, "{}", descriptor.path);
        }
    }
}

#[test]
fn source_route_does_not_change_outcome() {
    let guard = NavigationGuard::new(FakeProvider::signed_in(false, false));
    let plain = block_on(guard.resolve(NavigationRequest::new(AppRoute::Dashboard)));
    let with_source =
        block_on(guard.resolve(NavigationRequest::new(AppRoute::Dashboard).with_source(Some(AppRoute::Profile))));
    assert_eq!(plain, with_source);
}

#[test]
fn decision_order_checks_session_before_verification() {
    let session = DECISION_ORDER.iter().position(|r| *r == GuardRule::RequireSession).unwrap();
    let verified = DECISION_ORDER.iter().position(|r| *r == GuardRule::RequireVerifiedEmail).unwrap();
    assert!(session < verified);
}

#[test]
fn outcome_redirect_accessor() {
    assert_eq!(GuardOutcome::Allow.redirect(), None);
    assert_eq!(GuardOutcome::Redirect(AppRoute::Verify).redirect(), Some(AppRoute::Verify));
}
