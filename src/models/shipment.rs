//! TMS shipment wire schema
//!
//! Request types mirror what `POST /v1/shipments` accepts. Shipment records in
//! responses are lenient (`#[serde(default)]`) because list and detail payloads
//! omit most of the request fields; the list envelope itself is not.

use serde::{Deserialize, Serialize};

use crate::models::common::{string_or_i64, Code, Pagination};

/// Body of `POST /v1/shipments`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentRequest {
    pub ltl_shipment: bool,
    pub start_date: ZonedDate,
    pub end_date: ZonedDate,
    pub status: ShipmentStatus,
    pub lane: Lane,
    pub global_route: Vec<RouteStop>,
    pub skip_distance_calculation: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mode_info: Vec<ModeInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ShipmentService>,
    pub customer_order: Vec<CustomerOrder>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub carrier_order: Vec<CarrierOrder>,
    #[serde(rename = "use_routing_guide")]
    pub use_routing_guide: bool,
}

/// A date string paired with its IANA timezone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZonedDate {
    pub date: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentStatus {
    pub code: Code,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Origin/destination descriptor, e.g. `"Dallas, TX"` -> `"Austin, TX"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lane {
    pub start: String,
    pub end: String,
}

/// One stop of the shipment's global route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteStop {
    pub global_ship_location_source_id: String,
    pub name: String,
    pub scheduling_type: Code,
    pub stop_type: Code,
    pub timezone: String,
    pub location: Location,
    pub segment_sequence: u32,
    pub layover_time: Measure,
    pub sequence: u32,
    pub state: String,
    pub appointment: Appointment,
    pub appointment_confirmation: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Code>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub po_numbers: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
    pub transportation: Transportation,
}

/// Stop address and on-site contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address_line1: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address_line2: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zip_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contact_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
}

/// A quantity with a coded unit (layover time, distance)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measure {
    pub value: i64,
    pub units: Code,
}

/// Appointment window; `flex` is the tolerance in seconds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appointment {
    pub date: String,
    pub timezone: String,
    pub flex: i64,
    pub has_time: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transportation {
    pub mode: Code,
    pub service_type: Code,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModeInfo {
    #[serde(rename = "_operation")]
    pub operation: i32,
    pub source_segment_sequence: String,
    pub mode: Code,
    pub service_type: Code,
    pub total_segment_value: SegmentValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentValue {
    pub sync: bool,
    pub value: i64,
    pub currency: Code,
}

/// Accessorial service requested for the shipment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentService {
    /// Which leg the service applies to: `pickup`, `delivery` or `shipment`
    pub service_type: String,
    pub code: Code,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerOrder {
    pub customer_order_source_id: i64,
    pub customer: Party,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    pub costs: Costs,
    #[serde(rename = "externalIds", skip_serializing_if = "Vec::is_empty")]
    pub external_ids: Vec<ExternalId>,
}

/// Customer or carrier reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    #[serde(deserialize_with = "string_or_i64")]
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub item_category: Code,
    pub qty: i64,
    pub unit: Code,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(rename = "_operation")]
    pub operation: i32,
    pub is_hazmat: bool,
    pub stackable: bool,
    /// Unit value in cents
    pub value: i64,
    /// `value * qty`, in cents
    pub total_value: i64,
    pub currency: Code,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_temp: Option<Temperature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_temp: Option<Temperature>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Temperature {
    pub temp: f64,
    pub temp_unit: Code,
}

/// Order costs; amounts in cents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Costs {
    pub total_amount: i64,
    pub line_item: Vec<LineItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub code: Code,
    pub qty: i64,
    pub price: i64,
    pub amount: i64,
    pub billable: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalId {
    #[serde(rename = "type")]
    pub id_type: Code,
    pub value: String,
    pub copy_to_carrier_order: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarrierOrder {
    pub carrier_order_source_id: i64,
    pub carrier: Party,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub costs: Option<Costs>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub drivers: Vec<Driver>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Driver {
    pub driver_id: i64,
    #[serde(rename = "_operation")]
    pub operation: i32,
    pub segment_sequence: u32,
}

/// Response from `POST /v1/shipments`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentResponse {
    pub shipment_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ShipmentResponse {
    /// The most specific human-readable failure text in the response
    pub fn failure_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_default()
    }
}

/// Response from `GET /v1/shipments/list`.
///
/// The envelope is strict: a body without `details`, `pagination` or
/// `shipments` is not a listing, even on a 200.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShipmentListResponse {
    #[serde(rename = "Status", default)]
    pub status: String,
    pub details: ShipmentListDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShipmentListDetails {
    pub pagination: Pagination,
    pub shipments: Vec<ShipmentData>,
}

/// One shipment as the list endpoint returns it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentData {
    #[serde(deserialize_with = "string_or_i64")]
    pub id: i64,
    pub custom_id: String,
    pub status: ShipmentStatus,
    pub lane: Option<Lane>,
    pub global_route: Vec<RouteStop>,
    pub customer_order: Vec<OrderRef>,
    pub carrier_order: Vec<OrderRef>,
    pub created: String,
    pub updated: String,
    pub last_updated_on: String,
    pub created_date: String,
}

/// Customer or carrier order summary on a listed shipment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRef {
    #[serde(deserialize_with = "string_or_i64")]
    pub id: i64,
    #[serde(alias = "carrier")]
    pub customer: Party,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_tolerates_sparse_shipments() {
        let json = r#"{
            "Status": "SUCCESS",
            "details": {
                "pagination": {"start": 25, "pageSize": 24, "totalRecordsInPage": 1, "moreAvailable": true},
                "shipments": [{
                    "id": 101,
                    "customId": "S-101",
                    "status": {"code": {"key": "2102", "value": "Covered"}},
                    "customerOrder": [{"id": 7, "customer": {"id": 3, "name": "Acme"}, "deleted": false}],
                    "carrierOrder": [{"id": 8, "carrier": {"id": "9", "name": "Fast Freight"}}]
                }]
            }
        }"#;

        let resp: ShipmentListResponse = serde_json::from_str(json).unwrap();
        assert!(resp.details.pagination.more_available);
        let shipment = &resp.details.shipments[0];
        assert_eq!(shipment.custom_id, "S-101");
        assert_eq!(shipment.carrier_order[0].customer.name, "Fast Freight");
        assert_eq!(shipment.carrier_order[0].customer.id, 9);
        assert!(shipment.global_route.is_empty());
    }

    #[test]
    fn list_envelope_requires_its_blocks() {
        for json in [
            r#"{"error": "session expired"}"#,
            r#"{"Status": "SUCCESS", "details": {"shipments": []}}"#,
            r#"{"Status": "SUCCESS", "details": {"pagination": {"start": 1}}}"#,
        ] {
            assert!(serde_json::from_str::<ShipmentListResponse>(json).is_err(), "{json}");
        }

        let empty: ShipmentListResponse =
            serde_json::from_str(r#"{"details": {"pagination": {}, "shipments": []}}"#).unwrap();
        assert!(empty.status.is_empty());
        assert!(empty.details.shipments.is_empty());
    }

    #[test]
    fn request_uses_tms_field_names() {
        let request = ShipmentRequest {
            use_routing_guide: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["use_routing_guide"], true);
        assert!(value.get("carrierOrder").is_none());
        assert!(value.get("services").is_none());
        assert!(value["globalRoute"].is_array());
    }

    #[test]
    fn failure_message_prefers_error() {
        let resp = ShipmentResponse {
            message: Some("see error".into()),
            error: Some("invalid lane".into()),
            ..Default::default()
        };
        assert_eq!(resp.failure_message(), "invalid lane");
    }
}
