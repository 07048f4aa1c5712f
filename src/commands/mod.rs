//! HTTP handlers for the downstream surface
//!
//! Every response uses the `{success, data?, error?}` envelope.

pub mod health;
pub mod loads;
pub mod response;
pub mod shipments;

use axum::routing::get;
use axum::Router;

use crate::api::ShipmentClient;

pub use response::{ApiResponse, HandlerError};

/// Shared handler state
#[derive(Clone, Debug)]
pub struct AppState {
    pub client: ShipmentClient,
}

impl AppState {
    pub fn new(client: ShipmentClient) -> Self {
        Self { client }
    }
}

/// Build the router for the bridge service
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/loads", get(loads::list_loads).post(loads::create_load))
        .route("/api/shipments/{id}", get(shipments::get_shipment_details))
        .with_state(state)
}

/// Serve the router until `shutdown` resolves
pub async fn serve<F>(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown: F,
) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Listening on http://{}", addr);
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
