//! TMS shipment data -> Load view

use super::policy;
use crate::models::{
    BillTo, Carrier, Consignee, Customer, Load, OrderRef, Pickup, RateData, RouteStop,
    ShipmentData, ShipmentResponse, Specifications, NOT_AVAILABLE,
};

/// Outcome of looking up a stop by type on the route
#[derive(Debug, Clone, Copy)]
pub enum StopLookup<'a> {
    Found(&'a RouteStop),
    Missing,
}

impl<'a> StopLookup<'a> {
    /// First route entry whose stop-type key matches
    pub fn find(route: &'a [RouteStop], stop_type_key: &str) -> Self {
        route
            .iter()
            .find(|stop| stop.stop_type.key == stop_type_key)
            .map_or(Self::Missing, Self::Found)
    }

    /// Project a field out of the stop, or the sentinel when it is missing/blank
    pub fn field(&self, extract: impl Fn(&RouteStop) -> &str) -> String {
        match self {
            Self::Found(stop) => or_sentinel(extract(stop)),
            Self::Missing => NOT_AVAILABLE.to_string(),
        }
    }
}

fn or_sentinel(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

fn first_party_name(orders: &[OrderRef]) -> String {
    orders
        .first()
        .map(|order| order.customer.name.clone())
        .unwrap_or_default()
}

fn shipment_key(data: &ShipmentData) -> String {
    if data.custom_id.is_empty() {
        data.id.to_string()
    } else {
        data.custom_id.clone()
    }
}

/// Map a listed TMS shipment back to the Load shape.
///
/// Never fails: missing stops and empty order arrays turn into sentinels and
/// empty names respectively.
pub fn from_external_data(data: &ShipmentData) -> Load {
    let key = shipment_key(data);
    let pickup = StopLookup::find(&data.global_route, policy::STOP_TYPE_PICKUP);
    let delivery = StopLookup::find(&data.global_route, policy::STOP_TYPE_DELIVERY);

    Load {
        external_tms_load_id: key.clone(),
        freight_load_id: key.clone(),
        status: data.status.code.value.clone(),
        customer: Customer::named(
            format!("CUST-{}", key),
            first_party_name(&data.customer_order),
        ),
        bill_to: BillTo::unknown(),
        pickup: Pickup {
            external_tms_id: NOT_AVAILABLE.into(),
            name: NOT_AVAILABLE.into(),
            address_line1: pickup.field(|s| s.location.address_line1.as_str()),
            address_line2: pickup.field(|s| s.location.address_line2.as_str()),
            city: pickup.field(|s| s.location.city.as_str()),
            state: pickup.field(|s| s.location.state.as_str()),
            zipcode: pickup.field(|s| s.location.zip_code.as_str()),
            country: pickup.field(|s| s.location.country.as_str()),
            contact: pickup.field(|s| s.location.contact_name.as_str()),
            phone: pickup.field(|s| s.location.phone.as_str()),
            email: pickup.field(|s| s.location.email.as_str()),
            business_hours: NOT_AVAILABLE.into(),
            ref_number: NOT_AVAILABLE.into(),
            ready_time: None,
            appt_time: None,
            appt_note: pickup.field(|s| s.notes.as_str()),
            timezone: pickup.field(|s| s.timezone.as_str()),
            warehouse_id: NOT_AVAILABLE.into(),
        },
        consignee: Consignee {
            external_tms_id: NOT_AVAILABLE.into(),
            name: NOT_AVAILABLE.into(),
            address_line1: delivery.field(|s| s.location.address_line1.as_str()),
            address_line2: delivery.field(|s| s.location.address_line2.as_str()),
            city: delivery.field(|s| s.location.city.as_str()),
            state: delivery.field(|s| s.location.state.as_str()),
            zipcode: delivery.field(|s| s.location.zip_code.as_str()),
            country: delivery.field(|s| s.location.country.as_str()),
            contact: delivery.field(|s| s.location.contact_name.as_str()),
            phone: delivery.field(|s| s.location.phone.as_str()),
            email: delivery.field(|s| s.location.email.as_str()),
            business_hours: NOT_AVAILABLE.into(),
            ref_number: NOT_AVAILABLE.into(),
            must_deliver: NOT_AVAILABLE.into(),
            appt_time: None,
            appt_note: delivery.field(|s| s.notes.as_str()),
            timezone: delivery.field(|s| s.timezone.as_str()),
            warehouse_id: NOT_AVAILABLE.into(),
        },
        carrier: Carrier::named(first_party_name(&data.carrier_order)),
        rate_data: RateData::default(),
        specifications: Specifications {
            po_nums: NOT_AVAILABLE.into(),
            operator: NOT_AVAILABLE.into(),
            ..Default::default()
        },
    }
}

/// Record the TMS-assigned shipment id on the Load that was submitted
pub fn apply_create_response(mut load: Load, response: &ShipmentResponse) -> Load {
    if !response.shipment_id.is_empty() {
        load.external_tms_load_id = response.shipment_id.clone();
    }
    load
}
