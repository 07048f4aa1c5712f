//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde_json::json;
use tms_bridge_lib::api::ShipmentClient;
use tms_bridge_lib::config::TmsCredentials;
use tms_bridge_lib::models::{Consignee, Load, Pickup, RateData, Specifications};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-access-token";
pub const API_KEY: &str = "test-api-key";

pub fn credentials(base_url: &str) -> TmsCredentials {
    TmsCredentials {
        base_url: base_url.to_string(),
        client_id: "client".into(),
        client_secret: "secret".into(),
        username: "ops@example.com".into(),
        password: "password".into(),
        scope: "read+trust+write".into(),
        user_type: "business".into(),
        api_key: API_KEY.into(),
    }
}

pub fn client(server: &MockServer) -> ShipmentClient {
    ShipmentClient::new(credentials(&server.uri()), Duration::from_secs(5))
        .expect("client should build")
}

pub fn token_response(expires_in: i64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": TOKEN,
        "token_type": "bearer",
        "expires_in": expires_in,
    }))
}

/// Mount the OAuth endpoint, expecting exactly `calls` token requests
pub async fn mount_token(server: &MockServer, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/v1/oauth/token"))
        .and(header("x-api-key", API_KEY))
        .respond_with(token_response(3600))
        .expect(calls)
        .mount(server)
        .await;
}

pub fn sample_load() -> Load {
    Load {
        external_tms_load_id: "EXT-1".into(),
        freight_load_id: "FL-1".into(),
        status: "Open".into(),
        pickup: Pickup {
            city: "CityA".into(),
            state: "StA".into(),
            contact: "Dock".into(),
            ref_number: "R-1".into(),
            appt_time: Some(Utc.with_ymd_and_hms(2026, 3, 2, 15, 0, 0).unwrap()),
            ..Default::default()
        },
        consignee: Consignee {
            city: "CityB".into(),
            state: "StB".into(),
            appt_time: Some(Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap()),
            ..Default::default()
        },
        rate_data: RateData {
            customer_lh_rate_usd: 1500.0,
            ..Default::default()
        },
        specifications: Specifications {
            in_pallet_count: 2,
            po_nums: "PO-1001".into(),
            hazmat: true,
            liftgate_pickup: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn list_body(more_available: bool) -> serde_json::Value {
    json!({
        "Status": "SUCCESS",
        "details": {
            "pagination": {
                "start": 25,
                "pageSize": 24,
                "totalRecordsInPage": 1,
                "moreAvailable": more_available
            },
            "shipments": [{
                "id": 901,
                "customId": "S-901",
                "status": {"code": {"key": "2102", "value": "Covered"}},
                "globalRoute": [
                    {"stopType": {"key": "1501", "value": "Delivery"},
                     "location": {"city": "Austin", "state": "TX"}},
                    {"stopType": {"key": "1500", "value": "Pickup"},
                     "location": {"city": "Dallas", "state": "TX"}}
                ],
                "customerOrder": [{"id": 1, "customer": {"id": 7, "name": "Acme"}}],
                "carrierOrder": []
            }]
        }
    })
}
