//! Session token cache for the TMS OAuth endpoint
//!
//! Handles the password-grant exchange and keeps one bearer token in memory
//! until it is about to expire.

use chrono::Utc;
use tokio::sync::{Mutex, RwLock};

use super::endpoints::paths;
use crate::config::TmsCredentials;
use crate::error::{ApiError, ApiResult};
use crate::models::{OAuthToken, TokenRequest, TokenResponse};

const GRANT_TYPE: &str = "password";

/// Owns the cached bearer token and refreshes it on demand.
///
/// Reads of a still-valid token only take the read lock. Refreshes are
/// serialized through `refresh_lock`, so concurrent callers that miss the
/// cache wait for a single OAuth request and then reuse its result.
pub struct TokenManager {
    /// Current token, if any
    state: RwLock<Option<OAuthToken>>,
    /// Single-flight guard around the OAuth call
    refresh_lock: Mutex<()>,
    /// Full URL of the token endpoint
    token_url: String,
    credentials: TmsCredentials,
    /// Shared HTTP transport
    http: reqwest::Client,
}

impl TokenManager {
    /// Create a new token manager
    pub fn new(credentials: TmsCredentials, http: reqwest::Client) -> Self {
        Self {
            state: RwLock::new(None),
            refresh_lock: Mutex::new(()),
            token_url: format!(
                "{}{}",
                credentials.base_url.trim_end_matches('/'),
                paths::OAUTH_TOKEN
            ),
            credentials,
            http,
        }
    }

    /// Get a valid access token, refreshing if needed
    pub async fn get_token(&self) -> ApiResult<String> {
        if let Some(token) = self.cached().await {
            return Ok(token);
        }

        let _guard = self.refresh_lock.lock().await;

        // Another caller may have refreshed while we waited for the guard
        if let Some(token) = self.cached().await {
            tracing::debug!("Reusing token refreshed by a concurrent caller");
            return Ok(token);
        }

        let token = self.fetch_token().await?;
        let access = token.access_token.clone();
        *self.state.write().await = Some(token);
        Ok(access)
    }

    /// Current token when it is still inside its validity window
    async fn cached(&self) -> Option<String> {
        let state = self.state.read().await;
        state
            .as_ref()
            .filter(|t| t.is_valid_at(Utc::now()))
            .map(|t| t.access_token.clone())
    }

    /// Password-grant exchange against the OAuth endpoint
    async fn fetch_token(&self) -> ApiResult<OAuthToken> {
        let creds = &self.credentials;
        let body = TokenRequest {
            grant_type: GRANT_TYPE,
            client_id: &creds.client_id,
            client_secret: &creds.client_secret,
            username: &creds.username,
            password: &creds.password,
            scope: &creds.scope,
            user_type: &creds.user_type,
        };

        tracing::debug!("Requesting OAuth token from {}", self.token_url);

        let response = self
            .http
            .post(&self.token_url)
            .header(paths::API_KEY_HEADER, &creds.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Authentication(format!("token request failed: {}", e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let message = super::client::error_body(response).await;
            tracing::warn!("OAuth token request rejected: {}", status);
            tracing::debug!("OAuth error body: {}", truncate(&message, 500));
            return Err(ApiError::Authentication(format!("TMS OAuth error: {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Authentication(format!("token response unreadable: {}", e)))?;

        let token_response: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Authentication(format!("token response malformed: {}", e)))?;

        let token = OAuthToken::from_response(token_response, Utc::now());
        tracing::info!("Obtained new TMS OAuth token, valid until {}", token.expires_at);
        Ok(token)
    }

    /// Check if a usable token is cached
    pub async fn is_authenticated(&self) -> bool {
        self.cached().await.is_some()
    }

    /// Expiry of the cached token, if any
    pub async fn expires_at(&self) -> Option<chrono::DateTime<Utc>> {
        self.state.read().await.as_ref().map(|t| t.expires_at)
    }

    /// Drop the cached token so the next call re-authenticates
    pub async fn invalidate(&self) {
        *self.state.write().await = None;
    }
}

/// Clip a body for logging without splitting a UTF-8 character
pub(crate) fn truncate(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("token_url", &self.token_url)
            .field("state", &"[REDACTED]")
            .finish()
    }
}
