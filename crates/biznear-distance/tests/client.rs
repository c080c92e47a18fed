//! Integration tests for `DistanceClient` using wiremock HTTP mocks.

use biznear_core::GeoPoint;
use biznear_distance::DistanceClient;
use biznear_search::{DistanceError, TravelMatrix};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> DistanceClient {
    DistanceClient::new(base_url, Some("test-key".to_string()), 10)
        .expect("client construction should not fail")
}

fn origin() -> GeoPoint {
    GeoPoint::new(9.6615, 80.0070)
}

#[tokio::test]
async fn matrix_elements_come_back_in_destination_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "rows": [{
            "elements": [
                {
                    "distance_meters": 1200,
                    "distance_text": "1.2 km",
                    "duration_seconds": 240,
                    "duration_text": "4 mins",
                    "status": "OK"
                },
                {
                    "distance_meters": 3400,
                    "distance_text": "3.4 km",
                    "duration_seconds": 540,
                    "duration_text": "9 mins",
                    "status": "OK"
                }
            ]
        }]
    });

    Mock::given(method("POST"))
        .and(path("/v1/matrix"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "origins": [{ "lat": 9.6615, "lng": 80.0070 }],
            "destinations": [
                { "lat": 9.6650, "lng": 80.0100 },
                { "lat": 9.6740, "lng": 80.0290 }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let destinations = [GeoPoint::new(9.6650, 80.0100), GeoPoint::new(9.6740, 80.0290)];
    let elements = client
        .travel_matrix(origin(), &destinations)
        .await
        .expect("matrix call succeeds");

    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].distance_text.as_deref(), Some("1.2 km"));
    assert_eq!(elements[0].duration_text.as_deref(), Some("4 mins"));
    assert!(elements[0].ok);
    assert_eq!(elements[1].distance_text.as_deref(), Some("3.4 km"));
}

#[tokio::test]
async fn non_ok_element_status_is_exposed_as_not_ok() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "rows": [{
            "elements": [
                {
                    "distance_meters": null,
                    "distance_text": null,
                    "duration_seconds": null,
                    "duration_text": null,
                    "status": "ZERO_RESULTS"
                }
            ]
        }]
    });

    Mock::given(method("POST"))
        .and(path("/v1/matrix"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let elements = client
        .travel_matrix(origin(), &[GeoPoint::new(1.0, 1.0)])
        .await
        .expect("matrix call succeeds");

    assert_eq!(elements.len(), 1);
    assert!(!elements[0].ok);
}

#[tokio::test]
async fn non_2xx_status_is_a_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/matrix"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .travel_matrix(origin(), &[GeoPoint::new(1.0, 1.0)])
        .await
        .unwrap_err();

    assert!(matches!(err, DistanceError::Status { status: 503 }));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/matrix"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .travel_matrix(origin(), &[GeoPoint::new(1.0, 1.0)])
        .await
        .unwrap_err();

    assert!(matches!(err, DistanceError::Decode(_)));
}

#[tokio::test]
async fn empty_rows_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/matrix"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "rows": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .travel_matrix(origin(), &[GeoPoint::new(1.0, 1.0)])
        .await
        .unwrap_err();

    assert!(matches!(err, DistanceError::Decode(_)));
}
