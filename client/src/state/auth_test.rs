use super::*;

fn session(uid: &str, verified: bool) -> Session {
    Session {
        uid: uid.to_owned(),
        email: Some(format!("{uid}@example.com")),
        email_verified: verified,
        id_token: format!("token-{uid}"),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_signed_out() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.is_verified());
    assert_eq!(state.email(), None);
}

#[test]
fn auth_state_reports_cached_verification() {
    let state = AuthState { session: Some(session("u1", true)) };
    assert!(state.session.is_some());
    assert!(state.is_verified());
    assert_eq!(state.email(), Some("u1@example.com"));
}

// =============================================================
// replace_if_same_user
// =============================================================

#[test]
fn replace_if_same_user_updates_flag() {
    let mut state = AuthState { session: Some(session("u1", false)) };
    state.replace_if_same_user(session("u1", true));
    assert!(state.is_verified());
}

#[test]
fn replace_if_same_user_ignored_after_sign_out() {
    let mut state = AuthState::default();
    state.replace_if_same_user(session("u1", true));
    assert!(state.session.is_none());
}

#[test]
fn replace_if_same_user_ignores_other_user() {
    let mut state = AuthState { session: Some(session("u1", false)) };
    state.replace_if_same_user(session("u2", true));
    assert_eq!(state.session.as_ref().map(|s| s.uid.as_str()), Some("u1"));
    assert!(!state.is_verified());
}
