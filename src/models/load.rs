//! Load domain model
//!
//! The canonical freight record exchanged with callers. Field names follow the
//! camelCase JSON the consuming front end sends and expects back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{option_datetime, serialize_option_datetime, NOT_AVAILABLE};

/// A freight load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    #[serde(rename = "externalTMSLoadID")]
    pub external_tms_load_id: String,
    #[serde(rename = "freightLoadID")]
    pub freight_load_id: String,
    pub status: String,
    pub customer: Customer,
    pub bill_to: BillTo,
    pub pickup: Pickup,
    pub consignee: Consignee,
    #[serde(default)]
    pub carrier: Carrier,
    #[serde(default)]
    pub rate_data: RateData,
    #[serde(default)]
    pub specifications: Specifications,
}

/// Customer party
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    #[serde(rename = "externalTMSId")]
    pub external_tms_id: String,
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub ref_number: String,
}

impl Customer {
    /// A customer known only by name; every other field is the sentinel
    pub fn named(external_tms_id: String, name: String) -> Self {
        Self {
            external_tms_id,
            name,
            address_line1: NOT_AVAILABLE.into(),
            address_line2: NOT_AVAILABLE.into(),
            city: NOT_AVAILABLE.into(),
            state: NOT_AVAILABLE.into(),
            zipcode: NOT_AVAILABLE.into(),
            country: NOT_AVAILABLE.into(),
            contact: NOT_AVAILABLE.into(),
            phone: NOT_AVAILABLE.into(),
            email: NOT_AVAILABLE.into(),
            ref_number: NOT_AVAILABLE.into(),
        }
    }
}

/// Bill-to party
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillTo {
    #[serde(rename = "externalTMSId")]
    pub external_tms_id: String,
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
}

impl BillTo {
    pub fn unknown() -> Self {
        Self {
            external_tms_id: NOT_AVAILABLE.into(),
            name: NOT_AVAILABLE.into(),
            address_line1: NOT_AVAILABLE.into(),
            address_line2: NOT_AVAILABLE.into(),
            city: NOT_AVAILABLE.into(),
            state: NOT_AVAILABLE.into(),
            zipcode: NOT_AVAILABLE.into(),
            country: NOT_AVAILABLE.into(),
            contact: NOT_AVAILABLE.into(),
            phone: NOT_AVAILABLE.into(),
            email: NOT_AVAILABLE.into(),
        }
    }
}

/// Pickup facility and timing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pickup {
    #[serde(rename = "externalTMSId")]
    pub external_tms_id: String,
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub business_hours: String,
    pub ref_number: String,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub ready_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub appt_time: Option<DateTime<Utc>>,
    pub appt_note: String,
    pub timezone: String,
    pub warehouse_id: String,
}

/// Delivery facility and timing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consignee {
    #[serde(rename = "externalTMSId")]
    pub external_tms_id: String,
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub business_hours: String,
    pub ref_number: String,
    pub must_deliver: String,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub appt_time: Option<DateTime<Utc>>,
    pub appt_note: String,
    pub timezone: String,
    pub warehouse_id: String,
}

/// Carrier assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Carrier {
    pub mc_number: String,
    pub dot_number: String,
    pub name: String,
    pub phone: String,
    pub dispatcher: String,
    pub seal_number: String,
    pub scac: String,
    pub first_driver_name: String,
    pub first_driver_phone: String,
    pub second_driver_name: String,
    pub second_driver_phone: String,
    pub email: String,
    pub dispatch_city: String,
    pub dispatch_state: String,
    #[serde(rename = "externalTMSTruckId")]
    pub external_tms_truck_id: String,
    #[serde(rename = "externalTMSTrailerId")]
    pub external_tms_trailer_id: String,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub confirmation_sent_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub confirmation_received_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub dispatched_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub expected_pickup_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub pickup_start: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub pickup_end: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub expected_delivery_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub delivery_start: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "option_datetime", serialize_with = "serialize_option_datetime")]
    pub delivery_end: Option<DateTime<Utc>>,
    pub signed_by: String,
    #[serde(rename = "externalTMSId")]
    pub external_tms_id: String,
}

impl Carrier {
    /// A carrier known only by name; string fields are the sentinel, times unset
    pub fn named(name: String) -> Self {
        Self {
            mc_number: NOT_AVAILABLE.into(),
            dot_number: NOT_AVAILABLE.into(),
            name,
            phone: NOT_AVAILABLE.into(),
            dispatcher: NOT_AVAILABLE.into(),
            seal_number: NOT_AVAILABLE.into(),
            scac: NOT_AVAILABLE.into(),
            first_driver_name: NOT_AVAILABLE.into(),
            first_driver_phone: NOT_AVAILABLE.into(),
            second_driver_name: NOT_AVAILABLE.into(),
            second_driver_phone: NOT_AVAILABLE.into(),
            email: NOT_AVAILABLE.into(),
            dispatch_city: NOT_AVAILABLE.into(),
            dispatch_state: NOT_AVAILABLE.into(),
            external_tms_truck_id: NOT_AVAILABLE.into(),
            external_tms_trailer_id: NOT_AVAILABLE.into(),
            signed_by: NOT_AVAILABLE.into(),
            external_tms_id: NOT_AVAILABLE.into(),
            ..Default::default()
        }
    }
}

/// Customer and carrier rate figures, in USD
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RateData {
    pub customer_rate_type: String,
    pub customer_num_hours: f64,
    pub customer_lh_rate_usd: f64,
    pub fsc_percent: f64,
    pub fsc_per_mile: f64,
    pub carrier_rate_type: String,
    pub carrier_num_hours: f64,
    pub carrier_lh_rate_usd: f64,
    pub carrier_max_rate: f64,
    pub net_profit_usd: f64,
    pub profit_percent: f64,
}

/// Freight specifications and accessorial service flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Specifications {
    pub in_pallet_count: i64,
    pub out_pallet_count: i64,
    pub num_commodities: i64,
    pub total_weight: f64,
    pub billable_weight: f64,
    pub po_nums: String,
    pub operator: String,
    pub route_miles: f64,
    pub min_temp_fahrenheit: f64,
    pub max_temp_fahrenheit: f64,
    pub liftgate_pickup: bool,
    pub liftgate_delivery: bool,
    pub inside_pickup: bool,
    pub inside_delivery: bool,
    pub tarps: bool,
    pub oversized: bool,
    pub hazmat: bool,
    pub straps: bool,
    pub permits: bool,
    pub escorts: bool,
    pub seal: bool,
    pub custom_bonded: bool,
    pub labor: bool,
}

impl Specifications {
    /// True when a temperature range was requested
    pub fn has_temperature_range(&self) -> bool {
        self.min_temp_fahrenheit != 0.0 || self.max_temp_fahrenheit != 0.0
    }
}
