//! TMS credentials read from the environment

use crate::error::{AppError, Result};

pub const ENV_BASE_URL: &str = "TMS_BASE_URL";
pub const ENV_CLIENT_ID: &str = "TMS_OAUTH_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "TMS_OAUTH_CLIENT_SECRET";
pub const ENV_USERNAME: &str = "TMS_OAUTH_USERNAME";
pub const ENV_PASSWORD: &str = "TMS_OAUTH_PASSWORD";
pub const ENV_SCOPE: &str = "TMS_OAUTH_SCOPE";
pub const ENV_USER_TYPE: &str = "TMS_OAUTH_TYPE";
pub const ENV_API_KEY: &str = "TMS_X_API_KEY";

pub const DEFAULT_SCOPE: &str = "read+trust+write";
pub const DEFAULT_USER_TYPE: &str = "business";

/// Everything needed to reach and authenticate against the TMS.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct TmsCredentials {
    /// Base URL without trailing slash
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub scope: String,
    /// OAuth `type` parameter
    pub user_type: String,
    /// Value for the `x-api-key` header
    pub api_key: String,
}

impl TmsCredentials {
    /// Read credentials from the process environment.
    ///
    /// `base_url_fallback` is used when `TMS_BASE_URL` is unset or blank.
    pub fn from_env(base_url_fallback: Option<&str>) -> Result<Self> {
        Self::from_lookup(with_base_url_fallback(
            |name| std::env::var(name).ok(),
            base_url_fallback,
        ))
    }

    /// Read credentials through an arbitrary variable lookup.
    ///
    /// Blank values count as missing. The error names every missing
    /// required variable at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut missing = Vec::new();
        let mut required = |name: &'static str| {
            get(name).unwrap_or_else(|| {
                missing.push(name);
                String::new()
            })
        };

        let base_url = required(ENV_BASE_URL);
        let client_id = required(ENV_CLIENT_ID);
        let client_secret = required(ENV_CLIENT_SECRET);
        let username = required(ENV_USERNAME);
        let password = required(ENV_PASSWORD);
        let api_key = required(ENV_API_KEY);

        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id,
            client_secret,
            username,
            password,
            scope: get(ENV_SCOPE).unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            user_type: get(ENV_USER_TYPE).unwrap_or_else(|| DEFAULT_USER_TYPE.to_string()),
            api_key,
        })
    }
}

/// Wrap a lookup so a missing or blank base URL resolves to `fallback`
fn with_base_url_fallback<'a, F>(
    lookup: F,
    fallback: Option<&'a str>,
) -> impl Fn(&str) -> Option<String> + 'a
where
    F: Fn(&str) -> Option<String> + 'a,
{
    move |name: &str| {
        let value = lookup(name).filter(|v| !v.trim().is_empty());
        if name == ENV_BASE_URL {
            value.or_else(|| fallback.map(str::to_string))
        } else {
            value
        }
    }
}

impl std::fmt::Debug for TmsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmsCredentials")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("scope", &self.scope)
            .field("user_type", &self.user_type)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
