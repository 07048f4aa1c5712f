//! Authentication models

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Seconds shaved off `expires_in` so a token is never used in its final minute
pub const EXPIRY_BUFFER_SECS: i64 = 60;

/// Body of `POST /v1/oauth/token` (password grant)
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub scope: &'a str,
    #[serde(rename = "type")]
    pub user_type: &'a str,
}

/// Response from `POST /v1/oauth/token`
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expiry")]
    pub expires_in: i64,
}

fn default_expiry() -> i64 {
    3600 // Default 1 hour if not provided
}

/// Cached bearer token
#[derive(Clone)]
pub struct OAuthToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl OAuthToken {
    /// Create token state from the OAuth response, applying the expiry buffer
    pub fn from_response(response: TokenResponse, now: DateTime<Utc>) -> Self {
        Self {
            access_token: response.access_token,
            expires_at: now + Duration::seconds(response.expires_in - EXPIRY_BUFFER_SECS),
        }
    }

    /// Usable while `now < expires_at`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl std::fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthToken")
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(expires_in: i64, now: DateTime<Utc>) -> OAuthToken {
        OAuthToken::from_response(
            TokenResponse {
                access_token: "abc".into(),
                expires_in,
            },
            now,
        )
    }

    #[test]
    fn expiry_keeps_a_one_minute_buffer() {
        let now = Utc::now();
        let t = token(3600, now);
        assert_eq!(t.expires_at, now + Duration::seconds(3540));
        assert!(t.is_valid_at(now));
        assert!(!t.is_valid_at(now + Duration::seconds(3540)));
    }

    #[test]
    fn short_lived_token_is_already_stale() {
        let now = Utc::now();
        assert!(!token(45, now).is_valid_at(now));
    }

    #[test]
    fn debug_redacts_token() {
        let debug_str = format!("{:?}", token(3600, Utc::now()));
        assert!(!debug_str.contains("abc"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn missing_expiry_defaults_to_an_hour() {
        let resp: TokenResponse = serde_json::from_str(r#"{"access_token": "x"}"#).unwrap();
        assert_eq!(resp.expires_in, 3600);
    }
}
