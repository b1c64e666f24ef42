//! Firebase Authentication over its REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each bounded by the
//! configured refresh timeout.
//! Server-side (SSR) and native tests: every remote call fails with
//! [`IdentityError::Unavailable`], so the guard resolves conservatively.
//!
//! The signed-in session is kept in the shared `RwSignal<AuthState>`; nothing
//! is persisted across page loads.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firebase_test.rs"]
mod firebase_test;

use leptos::prelude::*;
use serde::Deserialize;
use serde_json::json;

use super::{IdentityError, Session, SessionProvider};
use crate::config::{ConfigError, IdentityConfig};
use crate::state::auth::AuthState;

const SIGN_IN_METHOD: &str = "accounts:signInWithPassword";
const SIGN_UP_METHOD: &str = "accounts:signUp";
const LOOKUP_METHOD: &str = "accounts:lookup";
const SEND_OOB_CODE_METHOD: &str = "accounts:sendOobCode";

/// Session provider backed by a Firebase project.
#[derive(Clone)]
pub struct FirebaseIdentity {
    config: Result<IdentityConfig, ConfigError>,
    auth: RwSignal<AuthState>,
}

impl FirebaseIdentity {
    pub fn new(config: Result<IdentityConfig, ConfigError>, auth: RwSignal<AuthState>) -> Self {
        Self { config, auth }
    }

    /// The signal this provider writes the session into.
    pub fn auth(&self) -> RwSignal<AuthState> {
        self.auth
    }

    /// Sign in with email + password and store the resulting session.
    ///
    /// The stored session starts unverified; `signInWithPassword` does not
    /// report verification state and the guard reloads it where it matters.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the provider rejects the credentials or
    /// cannot be reached.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let config = self.config()?;
        let body = post(config, SIGN_IN_METHOD, &credentials_payload(email, password)).await?;
        let session = session_from_auth(&body)?;
        self.auth.update(|state| state.session = Some(session.clone()));
        log::info!("signed in uid={}", session.uid);
        Ok(session)
    }

    /// Create an account, store the session, and request a verification email.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if account creation fails. A failure to
    /// send the verification email is logged but not returned; the user can
    /// resend it from the verification page.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let config = self.config()?;
        let body = post(config, SIGN_UP_METHOD, &credentials_payload(email, password)).await?;
        let session = session_from_auth(&body)?;
        self.auth.update(|state| state.session = Some(session.clone()));
        log::info!("created account uid={}", session.uid);
        if let Err(e) = self.send_verification_email(&session).await {
            log::warn!("verification email not sent: {e}");
        }
        Ok(session)
    }

    /// Ask the provider to email a verification link to the session's address.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the request fails.
    pub async fn send_verification_email(&self, session: &Session) -> Result<(), IdentityError> {
        let config = self.config()?;
        post(config, SEND_OOB_CODE_METHOD, &verify_email_payload(&session.id_token)).await?;
        Ok(())
    }

    /// Drop the in-memory session.
    pub fn sign_out(&self) {
        self.auth.update(|state| state.session = None);
        log::info!("signed out");
    }

    fn config(&self) -> Result<&IdentityConfig, IdentityError> {
        self.config.as_ref().map_err(|e| IdentityError::NotConfigured(e.clone()))
    }
}

#[async_trait::async_trait(?Send)]
impl SessionProvider for FirebaseIdentity {
    fn current_session(&self) -> Option<Session> {
        self.auth.get_untracked().session
    }

    async fn reload(&self, session: &Session) -> Result<Session, IdentityError> {
        let config = self.config()?;
        let fresh = lookup(config, session).await?;
        self.auth.update(|state| state.replace_if_same_user(fresh.clone()));
        Ok(fresh)
    }
}

async fn lookup(config: &IdentityConfig, session: &Session) -> Result<Session, IdentityError> {
    let body = post(config, LOOKUP_METHOD, &lookup_payload(&session.id_token)).await?;
    apply_lookup(session, &body)
}

/// POST a JSON payload to an identity toolkit method and return the raw body.
async fn post(config: &IdentityConfig, method: &str, payload: &serde_json::Value) -> Result<String, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.method_url(method);
        let ms = config.refresh_timeout_ms;
        super::race_timeout(send_json(&url, payload), gloo_timers::future::TimeoutFuture::new(ms), ms).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, method, payload);
        Err(IdentityError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send_json(url: &str, payload: &serde_json::Value) -> Result<String, IdentityError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| IdentityError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| IdentityError::Request(e.to_string()))?;
    let ok = resp.ok();
    let status = resp.status();
    let body = resp.text().await.map_err(|e| IdentityError::Request(e.to_string()))?;
    if !ok {
        return Err(error_from_response(status, &body));
    }
    Ok(body)
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    local_id: String,
    email: Option<String>,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    email: Option<String>,
    #[serde(default)]
    email_verified: bool,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

fn credentials_payload(email: &str, password: &str) -> serde_json::Value {
    json!({ "email": email, "password": password, "returnSecureToken": true })
}

fn lookup_payload(id_token: &str) -> serde_json::Value {
    json!({ "idToken": id_token })
}

fn verify_email_payload(id_token: &str) -> serde_json::Value {
    json!({ "requestType": "VERIFY_EMAIL", "idToken": id_token })
}

/// Build a session from a sign-in or sign-up response. Verification state is
/// unknown at this point and starts as `false`.
fn session_from_auth(body: &str) -> Result<Session, IdentityError> {
    let resp: AuthResponse = serde_json::from_str(body).map_err(|e| IdentityError::Parse(e.to_string()))?;
    Ok(Session { uid: resp.local_id, email: resp.email, email_verified: false, id_token: resp.id_token })
}

/// Merge an `accounts:lookup` response into `session`, keeping its token.
fn apply_lookup(session: &Session, body: &str) -> Result<Session, IdentityError> {
    let resp: LookupResponse = serde_json::from_str(body).map_err(|e| IdentityError::Parse(e.to_string()))?;
    let user = resp
        .users
        .into_iter()
        .find(|u| u.local_id == session.uid)
        .ok_or(IdentityError::MissingUser)?;
    Ok(Session {
        uid: user.local_id,
        email: user.email.or_else(|| session.email.clone()),
        email_verified: user.email_verified,
        id_token: session.id_token.clone(),
    })
}

/// Map a non-success response to an error, preferring the provider's code.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_response(status: u16, body: &str) -> IdentityError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => IdentityError::Rejected { code: envelope.error.message },
        Err(_) => IdentityError::Status(status),
    }
}
