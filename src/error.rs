//! Error types for the TMS bridge

use thiserror::Error;

use crate::models::ShipmentResponse;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while talking to the TMS.
///
/// Each kind stays distinct all the way to the caller so it can tell a missing
/// session from a rejected payload from an unreachable upstream.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure on a shipment call (after a token was obtained)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// OAuth token could not be obtained
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The Load could not be mapped to the TMS request schema
    #[error("Transform failed: {0}")]
    Transform(String),

    /// The TMS answered with status >= 400
    #[error("TMS API error: {status_line} - {message}")]
    ExternalApi {
        status: u16,
        status_line: String,
        message: String,
        /// Decoded create response, when the TMS sent one with the failure
        response: Option<Box<ShipmentResponse>>,
    },

    /// The TMS body was not the JSON we expected
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A shipment id that cannot name a single resource (empty or a dot segment)
    #[error("Invalid shipment id: {0:?}")]
    InvalidShipmentId(String),

    /// The configured base URL cannot carry a request path
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Build an upstream rejection from a status and raw body
    pub fn external(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        Self::ExternalApi {
            status: status.as_u16(),
            status_line: status.to_string(),
            message: message.into(),
            response: None,
        }
    }

    /// True when the failure was caused by the caller's input rather than upstream
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::Transform(_) | Self::InvalidShipmentId(_))
    }
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for ApiError
pub type ApiResult<T> = std::result::Result<T, ApiError>;
