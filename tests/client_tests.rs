//! ShipmentClient and TokenManager against a mocked TMS

mod common;

use std::time::Duration;

use common::{client, list_body, mount_token, sample_load, token_response, API_KEY, TOKEN};
use serde_json::json;
use tms_bridge_lib::api::with_cancellation;
use tms_bridge_lib::ApiError;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{
    bearer_token, body_partial_json, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Token cache
// ============================================================================

#[tokio::test]
async fn concurrent_callers_share_one_token_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/oauth/token"))
        .and(body_partial_json(json!({"grant_type": "password", "type": "business"})))
        .respond_with(token_response(3600).set_delay(Duration::from_millis(200)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let auth = client.token_manager();

    let results = futures::future::join_all((0..8).map(|_| auth.get_token())).await;
    for result in results {
        assert_eq!(result.unwrap(), TOKEN);
    }
}

#[tokio::test]
async fn cached_token_is_reused() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    let client = client(&server);
    let auth = client.token_manager();
    assert!(!auth.is_authenticated().await);

    auth.get_token().await.unwrap();
    auth.get_token().await.unwrap();
    assert!(auth.is_authenticated().await);
}

#[tokio::test]
async fn token_inside_expiry_buffer_is_refreshed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/oauth/token"))
        .respond_with(token_response(30))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    client.token_manager().get_token().await.unwrap();
    client.token_manager().get_token().await.unwrap();
}

#[tokio::test]
async fn invalidate_forces_a_new_token() {
    let server = MockServer::start().await;
    mount_token(&server, 2).await;

    let client = client(&server);
    let auth = client.token_manager();
    auth.get_token().await.unwrap();
    auth.invalidate().await;
    auth.get_token().await.unwrap();
}

#[tokio::test]
async fn rejected_credentials_are_authentication_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let err = client(&server).token_manager().get_token().await.unwrap_err();
    match err {
        ApiError::Authentication(message) => assert!(message.contains("401"), "{message}"),
        other => panic!("expected authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn failed_token_blocks_the_shipment_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/oauth/token"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(false)))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).list_shipments(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Authentication(_)));
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn create_sends_mapped_request_with_both_headers() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/v1/shipments"))
        .and(bearer_token(TOKEN))
        .and(header("x-api-key", API_KEY))
        .and(body_partial_json(json!({
            "lane": {"start": "CityA, StA", "end": "CityB, StB"},
            "startDate": {"date": "2026-03-02T15:00:00Z"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shipmentId": "TMS-42",
            "status": "SUCCESS"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).create_shipment(&sample_load()).await.unwrap();
    assert_eq!(response.shipment_id, "TMS-42");
    assert_eq!(response.status, "SUCCESS");
}

#[tokio::test]
async fn rejected_create_reports_decoded_response() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/v1/shipments"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "ERROR",
            "error": "lane is required"
        })))
        .mount(&server)
        .await;

    let err = client(&server).create_shipment(&sample_load()).await.unwrap_err();
    match err {
        ApiError::ExternalApi {
            status,
            status_line,
            message,
            response,
        } => {
            assert_eq!(status, 400);
            assert_eq!(status_line, "400 Bad Request");
            assert_eq!(message, "lane is required");
            assert_eq!(response.unwrap().status, "ERROR");
        }
        other => panic!("expected external API error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_with_non_json_500_is_external_error() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/v1/shipments"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client(&server).create_shipment(&sample_load()).await.unwrap_err();
    match err {
        ApiError::ExternalApi {
            status,
            message,
            response,
            ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
            assert!(response.is_none());
        }
        other => panic!("expected external API error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_success_body_is_decode_error() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/v1/shipments"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let err = client(&server).create_shipment(&sample_load()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn list_page_two_sends_offset_and_page_size() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/list"))
        .and(query_param("start", "25"))
        .and(query_param("pageSize", "24"))
        .and(bearer_token(TOKEN))
        .and(header("x-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(true)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server).list_shipments(2).await.unwrap();
    assert!(page.more_available());
    assert_eq!(page.pagination.start, 25);
    assert_eq!(page.shipments.len(), 1);

    let load = &page.shipments[0];
    assert_eq!(load.external_tms_load_id, "S-901");
    assert_eq!(load.status, "Covered");
    assert_eq!(load.customer.name, "Acme");
    assert_eq!(load.pickup.city, "Dallas");
    assert_eq!(load.consignee.city, "Austin");
    assert_eq!(load.carrier.name, "");
}

#[tokio::test]
async fn list_page_zero_sends_no_pagination() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/list"))
        .and(query_param_is_missing("start"))
        .and(query_param_is_missing("pageSize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(false)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server).list_shipments(0).await.unwrap();
    assert!(!page.more_available());
}

#[tokio::test]
async fn list_with_non_json_500_is_external_error() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server).list_shipments(1).await.unwrap_err();
    match err {
        ApiError::ExternalApi { status, message, .. } => {
            assert_eq!(status, 500);
            assert_eq!(message, "<html>oops</html>");
        }
        other => panic!("expected external API error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_list_is_decode_error_not_partial_result() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "details": {"shipments": [{"id": 1}, {"id": {"nested": true}}]}
        })))
        .mount(&server)
        .await;

    let err = client(&server).list_shipments(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn error_envelope_on_200_is_decode_error_not_empty_page() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "session expired"
        })))
        .mount(&server)
        .await;

    let err = client(&server).list_shipments(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn list_without_pagination_block_is_decode_error() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": "SUCCESS",
            "details": {"shipments": []}
        })))
        .mount(&server)
        .await;

    let err = client(&server).list_shipments(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

// ============================================================================
// Details
// ============================================================================

#[tokio::test]
async fn shipment_id_is_sent_as_one_encoded_segment() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(false)))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/list%3Fstart=999"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"details": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/..%2Foauth%2Ftoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"details": {"id": 2}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let first = client.get_shipment_details("list?start=999").await.unwrap();
    assert_eq!(first.as_value()["details"]["id"], 1);
    let second = client.get_shipment_details("../oauth/token").await.unwrap();
    assert_eq!(second.as_value()["details"]["id"], 2);
}

#[tokio::test]
async fn dot_segment_id_is_refused_before_any_request() {
    let server = MockServer::start().await;
    mount_token(&server, 0).await;

    let err = client(&server).get_shipment_details("..").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidShipmentId(_)), "{err:?}");
}

#[tokio::test]
async fn details_are_returned_unmapped() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    let document = json!({
        "details": {
            "id": 901,
            "customId": "S-901",
            "status": {"code": {"key": "2102", "value": "Covered"}},
            "somethingNew": {"deeply": ["nested"]}
        }
    });
    Mock::given(method("GET"))
        .and(path("/v1/shipments/S-901"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document.clone()))
        .mount(&server)
        .await;

    let details = client(&server).get_shipment_details("S-901").await.unwrap();
    assert_eq!(details.as_value(), &document);
    assert_eq!(details.custom_id(), Some("S-901"));
    assert_eq!(details.status_value(), Some("Covered"));
}

#[tokio::test]
async fn details_with_non_json_500_is_external_error() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/S-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("nope"))
        .mount(&server)
        .await;

    let err = client(&server).get_shipment_details("S-1").await.unwrap_err();
    assert!(matches!(err, ApiError::ExternalApi { status: 500, .. }), "{err:?}");
}

// ============================================================================
// Cancellation
// ============================================================================

#[tokio::test]
async fn cancellation_aborts_in_flight_request() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/shipments/list"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_body(false))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let err = with_cancellation(&cancel, client.list_shipments(1)).await.unwrap_err();
    assert!(matches!(err, ApiError::Cancelled));
}
