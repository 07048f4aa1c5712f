//! Schema transformer between the Load model and the TMS shipment schema.
//!
//! Pure functions only; no I/O happens here.

pub mod inbound;
pub mod outbound;
pub mod policy;

pub use inbound::{apply_create_response, from_external_data, StopLookup};
pub use outbound::{to_cents, to_external_request, to_external_request_at, ShipmentWindow};
