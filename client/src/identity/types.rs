//! Session and error types shared by every session provider.

use crate::config::ConfigError;

// =============================================================================
// SESSION
// =============================================================================

/// The identity provider's view of a signed-in principal.
///
/// `email_verified` is a snapshot taken when the session was last loaded; it
/// goes stale when the user verifies from another tab or device.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Provider-assigned user id (`localId`).
    pub uid: String,
    pub email: Option<String>,
    pub email_verified: bool,
    /// Bearer token presented back to the provider.
    pub id_token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("uid", &self.uid)
            .field("email", &self.email)
            .field("email_verified", &self.email_verified)
            .field("id_token", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by identity-provider calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    /// Identity settings are missing or invalid.
    #[error("identity provider not configured: {0}")]
    NotConfigured(ConfigError),

    /// The call only works in the browser build.
    #[error("identity provider unavailable in this build")]
    Unavailable,

    /// The HTTP request could not be sent or completed.
    #[error("request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status and no error code.
    #[error("provider responded with status {0}")]
    Status(u16),

    /// The provider rejected the call with an error code such as `EMAIL_NOT_FOUND`.
    #[error("provider rejected request: {code}")]
    Rejected { code: String },

    /// The response body did not have the expected shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// An account lookup returned no user for the token.
    #[error("no user found for session")]
    MissingUser,

    /// The call did not finish within the configured bound.
    #[error("timed out after {ms} ms")]
    Timeout { ms: u32 },
}

impl IdentityError {
    /// Short text suitable for showing under a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { code } => rejected_message(code).to_owned(),
            Self::Timeout { .. } | Self::Request(_) => "Could not reach the sign-in service. Try again.".to_owned(),
            Self::NotConfigured(_) | Self::Unavailable => "Sign-in is not available right now.".to_owned(),
            Self::Status(_) | Self::Parse(_) | Self::MissingUser => "Something went wrong. Try again.".to_owned(),
        }
    }
}

fn rejected_message(code: &str) -> &'static str {
    // Provider codes may carry a suffix, e.g. "WEAK_PASSWORD : Password should be ...".
    let code = code.split(':').next().unwrap_or_default().trim();
    match code {
        "EMAIL_EXISTS" => "An account with this email already exists.",
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => "Incorrect email or password.",
        "INVALID_EMAIL" => "Enter a valid email address.",
        "USER_DISABLED" => "This account has been disabled.",
        "WEAK_PASSWORD" => "Password must be at least 6 characters.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Try again later.",
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "USER_NOT_FOUND" => "Your session has expired. Sign in again.",
        _ => "Something went wrong. Try again.",
    }
}
