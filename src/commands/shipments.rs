//! `/api/shipments/{id}` handler

use axum::extract::{Path, State};
use axum::Json;

use super::{ApiResponse, AppState, HandlerError};
use crate::models::ShipmentDetails;

/// GET /api/shipments/{id}, returning the TMS document unmapped
pub async fn get_shipment_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ShipmentDetails>>, HandlerError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(HandlerError::bad_request("Shipment ID is required"));
    }

    tracing::debug!("Fetching shipment details for {}", id);

    let details = state
        .client
        .get_shipment_details(id)
        .await
        .map_err(|e| HandlerError::from_api("Failed to fetch shipment details from TMS", e))?;

    Ok(Json(ApiResponse::ok(details)))
}
