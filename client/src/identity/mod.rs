//! Identity-provider seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in state is owned by an external provider. The navigation guard only
//! sees it through [`SessionProvider`], which is injected at construction so
//! tests can substitute a double. `firebase` is the browser implementation.


pub mod firebase;
pub mod types;

use std::future::Future;

use futures::future::{self, Either};

pub use types::{IdentityError, Session};

/// Read access to the provider's current session plus an on-demand reload.
#[async_trait::async_trait(?Send)]
pub trait SessionProvider {
    /// The locally known session, or `None` when signed out.
    fn current_session(&self) -> Option<Session>;

    /// Re-fetch the session from the provider so `email_verified` is current.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] when the provider cannot be reached, rejects
    /// the token, or does not answer in time.
    async fn reload(&self, session: &Session) -> Result<Session, IdentityError>;
}

/// Resolve `call`, or fail with [`IdentityError::Timeout`] if `timer` finishes first.
pub async fn race_timeout<T, C, S>(call: C, timer: S, ms: u32) -> Result<T, IdentityError>
where
    C: Future<Output = Result<T, IdentityError>>,
    S: Future<Output = ()>,
{
    let call = std::pin::pin!(call);
    let timer = std::pin::pin!(timer);
    match future::select(call, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(IdentityError::Timeout { ms }),
    }
}
