//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the identity provider (`identity::firebase`) and read by the
//! navigation guard and identity-aware pages.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::identity::Session;

/// Current sign-in state. Provided via context as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    /// Cached verification flag; may be stale until the next refresh.
    pub fn is_verified(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.email_verified)
    }

    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.email.as_deref())
    }

    /// Replace the stored session with a fresher copy of the same user.
    ///
    /// Ignored when signed out or when `fresh` belongs to another user, so a
    /// refresh that lands after sign-out cannot resurrect the session.
    pub fn replace_if_same_user(&mut self, fresh: Session) {
        if self.session.as_ref().is_some_and(|current| current.uid == fresh.uid) {
            self.session = Some(fresh);
        }
    }
}
