//! Load -> TMS shipment request

use chrono::{DateTime, Duration, Utc};

use super::policy::{self, code, ServiceScope, SERVICE_TABLE};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Appointment, CarrierOrder, Costs, CustomerOrder, Driver, ExternalId, Item, Lane, LineItem,
    Load, Location, Measure, ModeInfo, Party, RouteStop, SegmentValue, ShipmentRequest,
    ShipmentService, ShipmentStatus, Specifications, Temperature, Transportation, ZonedDate,
};

/// Resolved start/end of the shipment; `end >= start` always holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipmentWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ShipmentWindow {
    /// Pick start/end from the Load's appointments, falling back to defaults
    pub fn resolve(load: &Load, now: DateTime<Utc>) -> Self {
        let start = load
            .pickup
            .appt_time
            .or(load.pickup.ready_time)
            .unwrap_or_else(|| now + Duration::hours(policy::DEFAULT_START_OFFSET_HOURS));

        let mut end = load
            .consignee
            .appt_time
            .unwrap_or_else(|| start + Duration::hours(policy::DEFAULT_TRANSIT_HOURS));

        if end < start {
            tracing::debug!("Delivery {} precedes pickup {}, clamping", end, start);
            end = start + Duration::hours(policy::MIN_TRANSIT_HOURS);
        }

        Self { start, end }
    }
}

/// Convert USD to integer cents.
///
/// Amounts that are not finite or do not fit in an `i64` are rejected
/// instead of saturating.
pub fn to_cents(usd: f64) -> ApiResult<i64> {
    let cents = (usd * 100.0).round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if !cents.is_finite() || cents >= i64::MAX as f64 || cents < i64::MIN as f64 {
        return Err(ApiError::Transform(format!(
            "amount {} USD cannot be expressed in cents",
            usd
        )));
    }
    Ok(cents as i64)
}

fn format_date(at: DateTime<Utc>) -> String {
    at.format(policy::DATE_FORMAT).to_string()
}

fn timezone_or_default(tz: &str) -> String {
    if tz.trim().is_empty() {
        policy::DEFAULT_TIMEZONE.to_string()
    } else {
        tz.to_string()
    }
}

fn lane_point(city: &str, state: &str) -> String {
    format!("{}, {}", city, state)
}

/// Map a Load onto the TMS create-shipment schema.
///
/// Fails with [`ApiError::Transform`] when a money amount does not fit in
/// integer cents.
pub fn to_external_request(load: &Load) -> ApiResult<ShipmentRequest> {
    to_external_request_at(load, Utc::now())
}

/// Same as [`to_external_request`] with an explicit clock
pub fn to_external_request_at(
    load: &Load,
    now: DateTime<Utc>,
) -> ApiResult<ShipmentRequest> {
    let customer_cents = to_cents(load.rate_data.customer_lh_rate_usd)?;
    let window = ShipmentWindow::resolve(load, now);
    let start = format_date(window.start);
    let end = format_date(window.end);
    let pickup_tz = timezone_or_default(&load.pickup.timezone);
    let delivery_tz = timezone_or_default(&load.consignee.timezone);

    Ok(ShipmentRequest {
        ltl_shipment: false,
        start_date: ZonedDate {
            date: start.clone(),
            time_zone: pickup_tz.clone(),
        },
        end_date: ZonedDate {
            date: end.clone(),
            time_zone: delivery_tz.clone(),
        },
        status: ShipmentStatus {
            code: code(policy::STATUS_COVERED),
            notes: policy::STATUS_NOTES.to_string(),
            description: policy::STATUS_COVERED.1.to_string(),
        },
        lane: Lane {
            start: lane_point(&load.pickup.city, &load.pickup.state),
            end: lane_point(&load.consignee.city, &load.consignee.state),
        },
        global_route: vec![pickup_stop(load, start, pickup_tz), delivery_stop(load, end, delivery_tz)],
        skip_distance_calculation: true,
        mode_info: vec![mode_info(customer_cents)],
        services: services(&load.specifications),
        customer_order: vec![customer_order(load, customer_cents)?],
        carrier_order: carrier_order(load)?.into_iter().collect(),
        use_routing_guide: true,
    })
}

struct StopSpec {
    source_id: &'static str,
    stop_type: (&'static str, &'static str),
    sequence: u32,
    flex: i64,
    service: (&'static str, &'static str),
}

const PICKUP: StopSpec = StopSpec {
    source_id: "pickup-1",
    stop_type: (policy::STOP_TYPE_PICKUP, "Pickup"),
    sequence: 0,
    flex: policy::PICKUP_FLEX_SECS,
    service: policy::PICKUP_STOP_SERVICE,
};

const DELIVERY: StopSpec = StopSpec {
    source_id: "delivery-1",
    stop_type: (policy::STOP_TYPE_DELIVERY, "Delivery"),
    sequence: 1,
    flex: policy::DELIVERY_FLEX_SECS,
    service: policy::DELIVERY_STOP_SERVICE,
};

fn route_stop(
    spec: &StopSpec,
    name: String,
    location: Location,
    notes: &str,
    date: String,
    timezone: String,
    po_nums: &str,
) -> RouteStop {
    RouteStop {
        global_ship_location_source_id: spec.source_id.to_string(),
        name,
        scheduling_type: code(policy::SCHEDULING_BY_APPOINTMENT),
        stop_type: code(spec.stop_type),
        timezone: timezone.clone(),
        location,
        segment_sequence: 0,
        layover_time: Measure {
            value: 1,
            units: code(policy::LAYOVER_UNITS_HOURS),
        },
        sequence: spec.sequence,
        state: "OPEN".to_string(),
        appointment: Appointment {
            date,
            timezone,
            flex: spec.flex,
            has_time: true,
        },
        appointment_confirmation: true,
        services: vec![code(spec.service)],
        po_numbers: po_numbers(po_nums),
        notes: notes.to_string(),
        transportation: transportation(),
    }
}

fn pickup_stop(load: &Load, date: String, timezone: String) -> RouteStop {
    let p = &load.pickup;
    route_stop(
        &PICKUP,
        format!("{}: {}", p.contact, p.ref_number),
        Location {
            address_line1: p.address_line1.clone(),
            address_line2: p.address_line2.clone(),
            city: p.city.clone(),
            state: p.state.clone(),
            zip_code: p.zipcode.clone(),
            country: p.country.clone(),
            contact_name: p.contact.clone(),
            phone: p.phone.clone(),
            email: p.email.clone(),
        },
        &p.appt_note,
        date,
        timezone,
        &load.specifications.po_nums,
    )
}

fn delivery_stop(load: &Load, date: String, timezone: String) -> RouteStop {
    let c = &load.consignee;
    route_stop(
        &DELIVERY,
        format!("{}: {}", c.contact, c.ref_number),
        Location {
            address_line1: c.address_line1.clone(),
            address_line2: c.address_line2.clone(),
            city: c.city.clone(),
            state: c.state.clone(),
            zip_code: c.zipcode.clone(),
            country: c.country.clone(),
            contact_name: c.contact.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
        },
        &c.appt_note,
        date,
        timezone,
        &load.specifications.po_nums,
    )
}

fn po_numbers(po_nums: &str) -> Vec<String> {
    if po_nums.trim().is_empty() {
        Vec::new()
    } else {
        vec![po_nums.to_string()]
    }
}

fn transportation() -> Transportation {
    Transportation {
        mode: code(policy::MODE_TRUCKLOAD),
        service_type: code(policy::SERVICE_TYPE_ANY),
    }
}

fn mode_info(customer_cents: i64) -> ModeInfo {
    ModeInfo {
        operation: 0,
        source_segment_sequence: "0".to_string(),
        mode: code(policy::MODE_TRUCKLOAD),
        service_type: code(policy::SERVICE_TYPE_ANY),
        total_segment_value: SegmentValue {
            sync: true,
            value: customer_cents,
            currency: code(policy::CURRENCY_USD),
        },
    }
}

/// One entry per set flag, in table order, plus the temperature service
pub fn services(specs: &Specifications) -> Vec<ShipmentService> {
    let mut services: Vec<ShipmentService> = SERVICE_TABLE
        .iter()
        .filter(|m| m.flag.is_set(specs))
        .map(|m| ShipmentService {
            service_type: m.scope.as_str().to_string(),
            code: code((m.key, m.value)),
            notes: String::new(),
        })
        .collect();

    if specs.has_temperature_range() {
        services.push(ShipmentService {
            service_type: ServiceScope::Shipment.as_str().to_string(),
            code: code(policy::TEMPERATURE_SERVICE),
            notes: format!(
                "{}F to {}F",
                specs.min_temp_fahrenheit, specs.max_temp_fahrenheit
            ),
        });
    }

    services
}

fn temperature(fahrenheit: f64) -> Temperature {
    Temperature {
        temp: fahrenheit,
        temp_unit: code(policy::TEMP_UNIT_FAHRENHEIT),
    }
}

fn customer_order(load: &Load, unit_cents: i64) -> ApiResult<CustomerOrder> {
    let specs = &load.specifications;
    let total_cents = unit_cents.checked_mul(specs.in_pallet_count).ok_or_else(|| {
        ApiError::Transform(format!(
            "total value of {} pallets at {} cents overflows",
            specs.in_pallet_count, unit_cents
        ))
    })?;
    let temps = specs.has_temperature_range();

    let item = Item {
        item_category: code(policy::ITEM_CATEGORY_OTHER),
        qty: specs.in_pallet_count,
        unit: code(policy::ITEM_UNIT_PALLETS),
        name: "Freight".to_string(),
        notes: format!("PO: {}, Operator: {}", specs.po_nums, specs.operator),
        operation: 0,
        is_hazmat: specs.hazmat,
        stackable: true,
        value: unit_cents,
        total_value: total_cents,
        currency: code(policy::CURRENCY_USD),
        min_temp: temps.then(|| temperature(specs.min_temp_fahrenheit)),
        max_temp: temps.then(|| temperature(specs.max_temp_fahrenheit)),
    };

    let external_ids = po_numbers(&specs.po_nums)
        .into_iter()
        .map(|value| ExternalId {
            id_type: code(policy::EXTERNAL_ID_PURCHASE_ORDER),
            value,
            copy_to_carrier_order: true,
        })
        .collect();

    Ok(CustomerOrder {
        customer_order_source_id: policy::DEFAULT_PARTY_ID,
        customer: Party {
            id: policy::DEFAULT_PARTY_ID,
            name: load.customer.name.clone(),
        },
        items: vec![item],
        costs: flat_costs(unit_cents, "Freight charges"),
        external_ids,
    })
}

fn flat_costs(cents: i64, notes: &str) -> Costs {
    Costs {
        total_amount: cents,
        line_item: vec![LineItem {
            code: code(policy::LINE_ITEM_FREIGHT_FLAT),
            qty: 1,
            price: cents,
            amount: cents,
            billable: true,
            notes: notes.to_string(),
        }],
    }
}

fn carrier_order(load: &Load) -> ApiResult<Option<CarrierOrder>> {
    let carrier = &load.carrier;
    if carrier.name.trim().is_empty() {
        return Ok(None);
    }

    let carrier_cents = to_cents(load.rate_data.carrier_lh_rate_usd)?;

    Ok(Some(CarrierOrder {
        carrier_order_source_id: policy::DEFAULT_PARTY_ID,
        carrier: Party {
            id: policy::DEFAULT_PARTY_ID,
            name: carrier.name.clone(),
        },
        costs: (carrier_cents != 0).then(|| flat_costs(carrier_cents, "Carrier line haul")),
        drivers: vec![Driver {
            driver_id: policy::DEFAULT_PARTY_ID,
            operation: 0,
            segment_sequence: 0,
        }],
    }))
}
