//! TMS shipment REST client
//!
//! Wraps the shared HTTP transport, the token cache and the schema
//! transformer behind three calls: create, list and get-details.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use super::auth::{truncate, TokenManager};
use super::endpoints::{self, paths};
use super::pagination::PageQuery;
use crate::config::TmsCredentials;
use crate::error::{ApiError, ApiResult};
use crate::models::{Load, Pagination, ShipmentDetails, ShipmentListResponse, ShipmentResponse};
use crate::transform;

/// Per-request timeout applied by [`ShipmentClient::new`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// One page of listed shipments, already mapped to the Load view
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub shipments: Vec<Load>,
    /// Passed through from the TMS unchanged
    pub pagination: Pagination,
}

impl PageResult {
    pub fn more_available(&self) -> bool {
        self.pagination.more_available
    }
}

/// TMS API client
#[derive(Clone)]
pub struct ShipmentClient {
    /// HTTP client
    http: reqwest::Client,
    /// Base URL without trailing slash
    base_url: String,
    api_key: String,
    /// Shared token cache
    auth: Arc<TokenManager>,
}

impl ShipmentClient {
    /// Create a client with its own HTTP transport
    pub fn new(credentials: TmsCredentials, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self::with_http(credentials, http))
    }

    /// Create a client on top of an existing transport
    pub fn with_http(credentials: TmsCredentials, http: reqwest::Client) -> Self {
        let base_url = credentials.base_url.trim_end_matches('/').to_string();
        let api_key = credentials.api_key.clone();
        let auth = Arc::new(TokenManager::new(credentials, http.clone()));

        Self {
            http,
            base_url,
            api_key,
            auth,
        }
    }

    pub fn token_manager(&self) -> &TokenManager {
        &self.auth
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authenticated request builder with both TMS headers set
    async fn authorized<U: reqwest::IntoUrl>(
        &self,
        method: reqwest::Method,
        url: U,
    ) -> ApiResult<reqwest::RequestBuilder> {
        let token = self.auth.get_token().await?;

        Ok(self
            .http
            .request(method, url)
            .bearer_auth(token)
            .header(paths::API_KEY_HEADER, &self.api_key))
    }

    // ==================== API Methods ====================

    /// Submit a Load as a new TMS shipment.
    ///
    /// On a rejection the decoded response, if any, rides along inside
    /// [`ApiError::ExternalApi`].
    pub async fn create_shipment(&self, load: &Load) -> ApiResult<ShipmentResponse> {
        let request = transform::to_external_request(load)?;

        let response = self
            .authorized(reqwest::Method::POST, self.url(paths::SHIPMENTS))
            .await?
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() >= 400 {
            tracing::warn!(
                "Shipment create for load {} rejected: {}",
                load.freight_load_id,
                status
            );
            return Err(match serde_json::from_str::<ShipmentResponse>(&body) {
                Ok(decoded) => {
                    let message = match decoded.failure_message() {
                        m if m.is_empty() => body.clone(),
                        m => m,
                    };
                    ApiError::ExternalApi {
                        status: status.as_u16(),
                        status_line: status.to_string(),
                        message,
                        response: Some(Box::new(decoded)),
                    }
                }
                Err(_) => ApiError::external(status, body),
            });
        }

        let created: ShipmentResponse = decode(&body, "create shipment")?;
        tracing::info!(
            "Created TMS shipment {} for load {}",
            created.shipment_id,
            load.freight_load_id
        );
        Ok(created)
    }

    /// Fetch one page of shipments; page 0 sends no pagination parameters
    pub async fn list_shipments(&self, page: u32) -> ApiResult<PageResult> {
        let mut request = self
            .authorized(reqwest::Method::GET, self.url(paths::SHIPMENTS_LIST))
            .await?;
        if let Some(query) = PageQuery::for_page(page) {
            request = request.query(&query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = error_body(response).await;
            tracing::warn!("Shipment list page {} failed: {}", page, status);
            return Err(ApiError::external(status, message));
        }

        let body = response.text().await?;
        let listing: ShipmentListResponse = decode(&body, "list shipments")?;
        let details = listing.details;

        tracing::info!(
            "Listed {} shipments (start {}, more available: {})",
            details.shipments.len(),
            details.pagination.start,
            details.pagination.more_available
        );

        Ok(PageResult {
            shipments: details
                .shipments
                .iter()
                .map(transform::from_external_data)
                .collect(),
            pagination: details.pagination,
        })
    }

    /// Fetch the raw detail document for one shipment
    pub async fn get_shipment_details(&self, shipment_id: &str) -> ApiResult<ShipmentDetails> {
        let url = endpoints::shipment_by_id(&self.base_url, shipment_id)?;
        let response = self.authorized(reqwest::Method::GET, url).await?.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = error_body(response).await;
            tracing::warn!("Shipment {} lookup failed: {}", shipment_id, status);
            return Err(ApiError::external(status, message));
        }

        let body = response.text().await?;
        decode(&body, "shipment details")
    }
}

impl std::fmt::Debug for ShipmentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShipmentClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Parse a success body, logging it on error
fn decode<T: serde::de::DeserializeOwned>(body: &str, context: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            "JSON parse error for {}: {}. Body: {}",
            context,
            e,
            truncate(body, 1000)
        );
        ApiError::Decode(format!("{}: {}", context, e))
    })
}

/// Read a failure body; a body that cannot be read is reported in its place
pub(crate) async fn error_body(response: reqwest::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Could not read {} response body: {}", status, e);
            format!("<unreadable body: {}>", e)
        }
    }
}

/// Race a client call against a cancellation signal.
///
/// The losing request future is dropped, which aborts the HTTP exchange.
pub async fn with_cancellation<T, F>(cancel: &CancellationToken, call: F) -> ApiResult<T>
where
    F: Future<Output = ApiResult<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ApiError::Cancelled),
        result = call => result,
    }
}
