//! Static route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigable path is declared once here together with the minimum
//! session state needed to view it. `app` binds these entries to the router
//! and `guard` reads their requirements before each page is shown.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt::Display;

/// The routes the app can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Site root; only ever redirects.
    Root,
    /// Sign-in / sign-up page.
    Auth,
    /// Verification-pending page.
    Verify,
    /// Home page for verified users.
    Dashboard,
    /// Account details.
    Profile,
}

/// Page rendered by a routed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Auth,
    Verify,
    Dashboard,
    Profile,
}

/// What the router does when a path matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render a page (after the guard allows it).
    Page(Page),
    /// Immediately replace the location with another route.
    Redirect(AppRoute),
}

/// Minimum session state required to view a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteRequirements {
    pub requires_auth: bool,
    pub requires_verified: bool,
}

impl RouteRequirements {
    /// No session needed.
    pub const PUBLIC: Self = Self { requires_auth: false, requires_verified: false };
    /// Any signed-in session.
    pub const SIGNED_IN: Self = Self { requires_auth: true, requires_verified: false };
    /// A signed-in session whose email is verified. Always implies `requires_auth`.
    pub const VERIFIED: Self = Self { requires_auth: true, requires_verified: true };
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub route: AppRoute,
    pub path: &'static str,
    pub target: RouteTarget,
    pub requirements: RouteRequirements,
}

/// All routes, in declaration order.
pub static ROUTE_TABLE: [RouteDescriptor; 5] = [
    RouteDescriptor {
        route: AppRoute::Root,
        path: "/",
        target: RouteTarget::Redirect(AppRoute::Auth),
        requirements: RouteRequirements::PUBLIC,
    },
    RouteDescriptor {
        route: AppRoute::Auth,
        path: "/auth",
        target: RouteTarget::Page(Page::Auth),
        requirements: RouteRequirements::PUBLIC,
    },
    RouteDescriptor {
        route: AppRoute::Verify,
        path: "/verify",
        target: RouteTarget::Page(Page::Verify),
        requirements: RouteRequirements::SIGNED_IN,
    },
    RouteDescriptor {
        route: AppRoute::Dashboard,
        path: "/dashboard",
        target: RouteTarget::Page(Page::Dashboard),
        requirements: RouteRequirements::VERIFIED,
    },
    RouteDescriptor {
        route: AppRoute::Profile,
        path: "/profile",
        target: RouteTarget::Page(Page::Profile),
        requirements: RouteRequirements::SIGNED_IN,
    },
];

impl AppRoute {
    /// Table entry for this route.
    pub fn descriptor(self) -> &'static RouteDescriptor {
        let index = match self {
            Self::Root => 0,
            Self::Auth => 1,
            Self::Verify => 2,
            Self::Dashboard => 3,
            Self::Profile => 4,
        };
        &ROUTE_TABLE[index]
    }

    /// Absolute path, e.g. `/dashboard`.
    pub fn path(self) -> &'static str {
        self.descriptor().path
    }

    /// Path without the leading slash, as the router's static segment wants it.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Find the table entry for a location path.
///
/// A single trailing slash is ignored and query strings or fragments are
/// stripped, so `/dashboard/?tab=1` resolves like `/dashboard`.
pub fn lookup(path: &str) -> Option<&'static RouteDescriptor> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let normalized = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    ROUTE_TABLE.iter().find(|d| d.path == normalized)
}

/// Route an unmatched location should be sent to, if it names a table entry
/// in non-canonical form (e.g. `/dashboard/`). `None` for canonical or unknown
/// paths, so a caller redirecting on `Some` can never loop.
pub fn canonical_redirect(path: &str) -> Option<AppRoute> {
    lookup(path).filter(|d| d.path != path).map(|d| d.route)
}
