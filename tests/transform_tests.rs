//! Load -> TMS request mapping through the public API

mod common;

use common::sample_load;
use tms_bridge_lib::transform::{to_external_request, to_external_request_at};

#[test]
fn hazmat_and_liftgate_pickup_map_to_exactly_two_services() {
    let request = to_external_request(&sample_load()).unwrap();

    let mut keys: Vec<&str> = request.services.iter().map(|s| s.code.key.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["21301", "21503"]);

    let scopes: Vec<&str> = request.services.iter().map(|s| s.service_type.as_str()).collect();
    assert!(scopes.contains(&"pickup"));
    assert!(scopes.contains(&"shipment"));

    assert_eq!(request.lane.start, "CityA, StA");
    assert_eq!(request.lane.end, "CityB, StB");
}

#[test]
fn po_number_reaches_the_customer_order() {
    let request = to_external_request(&sample_load()).unwrap();
    let order = &request.customer_order[0];

    assert_eq!(order.external_ids[0].value, "PO-1001");
    assert!(order.items[0].notes.contains("PO-1001"));
    assert_eq!(request.global_route[0].po_numbers, vec!["PO-1001"]);
}

#[test]
fn end_never_precedes_start() {
    let mut load = sample_load();
    load.consignee.appt_time = load
        .pickup
        .appt_time
        .map(|t| t - chrono::Duration::hours(5));

    let request = to_external_request_at(&load, chrono::Utc::now()).unwrap();
    assert!(request.end_date.date >= request.start_date.date);
    assert_eq!(request.start_date.date, "2026-03-02T15:00:00Z");
    assert_eq!(request.end_date.date, "2026-03-03T15:00:00Z");
}
