//! Shipment detail document
//!
//! `GET /v1/shipments/{id}` returns a richer, variably shaped document than the
//! list endpoint. It is kept as an untyped JSON tree and handed to callers as
//! is. Keys callers may rely on (looked up under `details` when the TMS wraps
//! the payload, otherwise at the root):
//!
//! - `id`, `customId`
//! - `status.code.key`, `status.code.value`
//! - `globalRoute[]`, `customerOrder[]`, `carrierOrder[]`
//!
//! Everything else is opaque passthrough.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentDetails(Value);

impl ShipmentDetails {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    /// The shipment object, unwrapping a `details` envelope if present
    pub fn shipment(&self) -> &Value {
        match self.0.get("details") {
            Some(inner) if inner.is_object() => inner,
            _ => &self.0,
        }
    }

    pub fn custom_id(&self) -> Option<&str> {
        self.shipment().get("customId").and_then(Value::as_str)
    }

    pub fn status_value(&self) -> Option<&str> {
        self.shipment()
            .pointer("/status/code/value")
            .and_then(Value::as_str)
    }

    pub fn global_route(&self) -> &[Value] {
        self.shipment()
            .get("globalRoute")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
