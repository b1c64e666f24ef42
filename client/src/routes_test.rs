use super::*;

// =============================================================
// Table shape
// =============================================================

#[test]
fn verified_routes_always_require_auth() {
    for descriptor in &ROUTE_TABLE {
        if descriptor.requirements.requires_verified {
            assert!(descriptor.requirements.requires_auth, "{} requires verification without auth", descriptor.path);
        }
    }
}

#[test]
fn descriptor_matches_route_for_every_entry() {
    for descriptor in &ROUTE_TABLE {
        assert_eq!(descriptor.route.descriptor(), descriptor);
    }
}

#[test]
fn root_redirects_to_auth() {
    assert_eq!(AppRoute::Root.descriptor().target, RouteTarget::Redirect(AppRoute::Auth));
}

#[test]
fn dashboard_requires_verified_session() {
    assert_eq!(AppRoute::Dashboard.descriptor().requirements, RouteRequirements::VERIFIED);
}

#[test]
fn verify_and_profile_only_require_sign_in() {
    assert_eq!(AppRoute::Verify.descriptor().requirements, RouteRequirements::SIGNED_IN);
    assert_eq!(AppRoute::Profile.descriptor().requirements, RouteRequirements::SIGNED_IN);
}

#[test]
fn auth_page_is_public() {
    assert_eq!(AppRoute::Auth.descriptor().requirements, RouteRequirements::PUBLIC);
}

// =============================================================
// Paths
// =============================================================

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(AppRoute::Dashboard.segment(), "dashboard");
    assert_eq!(AppRoute::Root.segment(), "");
}

#[test]
fn display_renders_path() {
    assert_eq!(AppRoute::Verify.to_string(), "/verify");
}

// =============================================================
// lookup
// =============================================================

#[test]
fn lookup_finds_exact_path() {
    assert_eq!(lookup("/profile").map(|d| d.route), Some(AppRoute::Profile));
}

#[test]
fn lookup_ignores_trailing_slash() {
    assert_eq!(lookup("/dashboard/").map(|d| d.route), Some(AppRoute::Dashboard));
}

#[test]
fn lookup_keeps_root() {
    assert_eq!(lookup("/").map(|d| d.route), Some(AppRoute::Root));
}

#[test]
fn lookup_strips_query_and_fragment() {
    assert_eq!(lookup("/auth?next=1").map(|d| d.route), Some(AppRoute::Auth));
    assert_eq!(lookup("/verify#top").map(|d| d.route), Some(AppRoute::Verify));
}

#[test]
fn lookup_unknown_path_is_none() {
    assert!(lookup("/settings").is_none());
    assert!(lookup("").is_none());
}

#[test]
fn canonical_redirect_sends_trailing_slash_to_table_path() {
    assert_eq!(canonical_redirect("/dashboard/"), Some(AppRoute::Dashboard));
    assert_eq!(canonical_redirect("/profile?tab=email"), Some(AppRoute::Profile));
}

#[test]
fn canonical_redirect_ignores_canonical_and_unknown_paths() {
    assert_eq!(canonical_redirect("/dashboard"), None);
    assert_eq!(canonical_redirect("/"), None);
    assert_eq!(canonical_redirect("/settings/"), None);
}
