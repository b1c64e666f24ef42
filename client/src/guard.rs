//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before every routed page is shown. Reads the current session from the
//! injected [`SessionProvider`], checks it against the target route's
//! requirements, and either lets the navigation through or names the route to
//! go to instead.
//!
//! DECISION ORDER
//! ==============
//! Rules are tried in [`DECISION_ORDER`]; the first one that redirects wins.
//! Authentication is checked before verification, so a signed-out user asking
//! for a verified-only page lands on sign-in, never on the verification page.
//!
//! ERROR HANDLING
//! ==============
//! The verification flag is always reloaded from the provider before it gates
//! anything. A failed or timed-out reload counts as "unverified": the guard
//! still resolves, toward `/verify`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::identity::{Session, SessionProvider};
use crate::routes::{AppRoute, RouteDescriptor};

/// Result of guarding one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Show the requested page.
    Allow,
    /// Replace the navigation with another route.
    Redirect(AppRoute),
}

impl GuardOutcome {
    /// Redirect target, if any.
    pub fn redirect(self) -> Option<AppRoute> {
        match self {
            Self::Allow => None,
            Self::Redirect(route) => Some(route),
        }
    }
}

/// A single navigation attempt.
#[derive(Debug, Clone, Copy)]
pub struct NavigationRequest {
    pub to: &'static RouteDescriptor,
    pub from: Option<&'static RouteDescriptor>,
}

impl NavigationRequest {
    pub fn new(to: AppRoute) -> Self {
        Self { to: to.descriptor(), from: None }
    }

    #[must_use]
    pub fn with_source(mut self, route: Option<AppRoute>) -> Self {
        self.from = route.map(AppRoute::descriptor);
        self
    }
}

/// One step of the decision list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRule {
    /// Signed-out users may not open routes that require auth.
    RequireSession,
    /// Signed-in users opening the sign-in page are sent on by verification state.
    BounceSignedInFromSignIn,
    /// Routes that require a verified email reject unverified sessions.
    RequireVerifiedEmail,
}

/// Rules in evaluation order. Falling off the end allows the navigation.
pub const DECISION_ORDER: [GuardRule; 3] =
    [GuardRule::RequireSession, GuardRule::BounceSignedInFromSignIn, GuardRule::RequireVerifiedEmail];

/// Decides each navigation against the session reported by `P`.
#[derive(Clone)]
pub struct NavigationGuard<P> {
    provider: P,
}

impl<P: SessionProvider> NavigationGuard<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[cfg(test)]
    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve a navigation to exactly one outcome.
    pub async fn resolve(&self, request: NavigationRequest) -> GuardOutcome {
        let session = self.provider.current_session();
        for rule in DECISION_ORDER {
            if let Some(outcome) = self.apply(rule, request.to, session.as_ref()).await {
                log::debug!(
                    "guard {:?}: {} -> {} redirected to {:?}",
                    rule,
                    request.from.map_or("(entry)", |d| d.path),
                    request.to.path,
                    outcome.redirect().map(AppRoute::path),
                );
                return outcome;
            }
        }
        GuardOutcome::Allow
    }

    /// Evaluate one rule; `Some` short-circuits the remaining rules.
    async fn apply(&self, rule: GuardRule, to: &RouteDescriptor, session: Option<&Session>) -> Option<GuardOutcome> {
        match (rule, session) {
            (GuardRule::RequireSession, None) if to.requirements.requires_auth => {
                Some(GuardOutcome::Redirect(AppRoute::Auth))
            }
            (GuardRule::BounceSignedInFromSignIn, Some(session)) if to.route == AppRoute::Auth => {
                let next = if self.refreshed_verified(session).await { AppRoute::Dashboard } else { AppRoute::Verify };
                Some(GuardOutcome::Redirect(next))
            }
            (GuardRule::RequireVerifiedEmail, Some(session)) if to.requirements.requires_verified => {
                (!self.refreshed_verified(session).await).then_some(GuardOutcome::Redirect(AppRoute::Verify))
            }
            _ => None,
        }
    }

    /// Reload the session and report its verification flag; failure reads as unverified.
    async fn refreshed_verified(&self, session: &Session) -> bool {
        match self.provider.reload(session).await {
            Ok(fresh) => fresh.email_verified,
            Err(e) => {
                log::warn!("verification refresh failed, treating session as unverified: {e}");
                false
            }
        }
    }
}
