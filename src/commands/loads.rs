//! `/api/loads` handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::{ApiResponse, AppState, HandlerError};
use crate::models::Load;
use crate::transform;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

/// Parse the `page` query value; missing or blank means page 0
pub fn parse_page(raw: Option<&str>) -> Result<u32, HandlerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value
            .parse()
            .map_err(|_| HandlerError::bad_request(format!("Invalid page number: {}", value))),
    }
}

/// GET /api/loads?page=N
pub async fn list_loads(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Vec<Load>>>, HandlerError> {
    let page = parse_page(params.page.as_deref())?;
    tracing::debug!("Listing loads, page {}", page);

    let result = state
        .client
        .list_shipments(page)
        .await
        .map_err(|e| HandlerError::from_api("Failed to fetch shipments from TMS", e))?;

    Ok(Json(
        ApiResponse::ok(result.shipments).with_pagination(result.pagination),
    ))
}

/// POST /api/loads
pub async fn create_load(
    State(state): State<AppState>,
    payload: Result<Json<Load>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Load>>), HandlerError> {
    let Json(load) = payload.map_err(|rejection| {
        HandlerError::bad_request(format!("Invalid request data: {}", rejection.body_text()))
    })?;

    tracing::info!("Creating shipment for load {}", load.freight_load_id);

    let response = state
        .client
        .create_shipment(&load)
        .await
        .map_err(|e| HandlerError::from_api("Failed to create shipment in TMS", e))?;

    let created = transform::apply_create_response(load, &response);
    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::ok(created)
                .with_message("Load created successfully in TMS")
                .with_tms_response(response),
        ),
    ))
}
