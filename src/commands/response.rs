//! Response envelope and error rendering

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{Pagination, ShipmentResponse};

/// `{success, data?, error?}` envelope plus the optional extras some routes add
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tms_response: Option<ShipmentResponse>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            has_more: None,
            pagination: None,
            tms_response: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.has_more = Some(pagination.more_available);
        self.pagination = Some(pagination);
        self
    }

    pub fn with_tms_response(mut self, response: ShipmentResponse) -> Self {
        self.tms_response = Some(response);
        self
    }
}

/// A failed request, rendered as `{success:false, error}`
#[derive(Debug)]
pub struct HandlerError {
    pub status: StatusCode,
    pub message: String,
    pub tms_response: Option<ShipmentResponse>,
}

impl HandlerError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            tms_response: None,
        }
    }

    /// Map a client failure, prefixing the message with what was being attempted
    pub fn from_api(context: &str, err: ApiError) -> Self {
        let status = if err.is_caller_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let message = format!("{}: {}", context, err);
        let tms_response = match err {
            ApiError::ExternalApi { response, .. } => response.map(|r| *r),
            _ => None,
        };

        Self {
            status,
            message,
            tms_response,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{}", self.message);
        } else {
            tracing::warn!("{}", self.message);
        }

        let body = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(self.message),
            message: None,
            has_more: None,
            pagination: None,
            tms_response: self.tms_response,
        };
        (self.status, Json(body)).into_response()
    }
}
