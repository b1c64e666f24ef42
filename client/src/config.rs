//! Identity-provider settings baked into the build.
//!
//! The hydrate bundle has no process environment, so values are captured at
//! compile time with `option_env!` and validated when the app starts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_REFRESH_TIMEOUT_MS: u32 = 8_000;

pub const API_KEY_VAR: &str = "WABISABI_FIREBASE_API_KEY";
pub const PROJECT_ID_VAR: &str = "WABISABI_FIREBASE_PROJECT_ID";
pub const ENDPOINT_VAR: &str = "WABISABI_IDENTITY_ENDPOINT";
pub const REFRESH_TIMEOUT_VAR: &str = "WABISABI_REFRESH_TIMEOUT_MS";

/// Errors produced while reading identity settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required setting was absent or blank.
    #[error("missing setting: {var}")]
    Missing { var: &'static str },

    /// A setting was present but could not be parsed.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Web API key of the Firebase project.
    pub api_key: String,
    pub project_id: Option<String>,
    /// Base URL of the identity toolkit REST API, without trailing slash.
    pub endpoint: String,
    /// Upper bound on a single verification refresh.
    pub refresh_timeout_ms: u32,
}

impl IdentityConfig {
    /// Read settings captured at compile time.
    ///
    /// Required:
    /// - `WABISABI_FIREBASE_API_KEY`
    ///
    /// Optional:
    /// - `WABISABI_FIREBASE_PROJECT_ID`
    /// - `WABISABI_IDENTITY_ENDPOINT`: default identitytoolkit v1 (set to the
    ///   auth emulator URL for local work)
    /// - `WABISABI_REFRESH_TIMEOUT_MS`: default 8000
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the API key is missing or the timeout is
    /// not a positive integer.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| match var {
            API_KEY_VAR => option_env!("WABISABI_FIREBASE_API_KEY"),
            PROJECT_ID_VAR => option_env!("WABISABI_FIREBASE_PROJECT_ID"),
            ENDPOINT_VAR => option_env!("WABISABI_IDENTITY_ENDPOINT"),
            REFRESH_TIMEOUT_VAR => option_env!("WABISABI_REFRESH_TIMEOUT_MS"),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`IdentityConfig::from_build_env`].
    pub fn from_lookup<'a, F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let non_blank = |var: &str| lookup(var).map(str::trim).filter(|v| !v.is_empty());

        let api_key = non_blank(API_KEY_VAR)
            .ok_or(ConfigError::Missing { var: API_KEY_VAR })?
            .to_owned();
        let project_id = non_blank(PROJECT_ID_VAR).map(str::to_owned);
        let endpoint = non_blank(ENDPOINT_VAR)
            .unwrap_or(DEFAULT_IDENTITY_ENDPOINT)
            .trim_end_matches('/')
            .to_owned();
        let refresh_timeout_ms = parse_timeout(non_blank(REFRESH_TIMEOUT_VAR))?;

        Ok(Self { api_key, project_id, endpoint, refresh_timeout_ms })
    }

    /// Full URL of an identity toolkit method, e.g. `accounts:lookup`.
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/{method}?key={}", self.endpoint, self.api_key)
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_REFRESH_TIMEOUT_MS);
    };
    match raw.parse::<u32>() {
        Ok(0) => Err(ConfigError::Invalid { var: REFRESH_TIMEOUT_VAR, reason: "must be greater than zero".to_owned() }),
        Ok(ms) => Ok(ms),
        Err(e) => Err(ConfigError::Invalid { var: REFRESH_TIMEOUT_VAR, reason: e.to_string() }),
    }
}
