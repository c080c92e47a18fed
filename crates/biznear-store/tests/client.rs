//! Integration tests for `HttpBusinessStore` using wiremock HTTP mocks.

use biznear_core::GeoPoint;
use biznear_search::{BusinessStore, DistrictQuery, GeoQuery, StoreError};
use biznear_store::HttpBusinessStore;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_store(base_url: &str) -> HttpBusinessStore {
    HttpBusinessStore::new(base_url, Some("test-key".to_string()), 10)
        .expect("client construction should not fail")
}

fn business_json(name: &str, lat: f64, lng: f64) -> serde_json::Value {
    serde_json::json!({
        "id": uuid::Uuid::new_v4(),
        "name": name,
        "category": "Health & Medical",
        "address": format!("{name} Road, Jaffna"),
        "phone": "+94 21 222 3344",
        "website": null,
        "rating": 4.2,
        "reviews_count": 12,
        "image_url": null,
        "latitude": lat,
        "longitude": lng
    })
}

#[tokio::test]
async fn geo_query_sends_center_terms_and_radius() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "businesses": [
            business_json("Nallur Clinic", 9.6740, 80.0290),
            business_json("Lanka Dental", 9.6650, 80.0100)
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1/businesses/nearby"))
        .and(query_param("lat", "9.6615"))
        .and(query_param("lng", "80.007"))
        .and(query_param("q", "dentist Health & Medical"))
        .and(query_param("radius", "3000"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let businesses = store
        .geo_query(&GeoQuery {
            center: GeoPoint::new(9.6615, 80.0070),
            query: "dentist Health & Medical".to_string(),
            radius_meters: 3_000,
        })
        .await
        .expect("geo query succeeds");

    // Store order comes back untouched; ranking is not this layer's job.
    assert_eq!(businesses.len(), 2);
    assert_eq!(businesses[0].name, "Nallur Clinic");
    assert_eq!(businesses[1].name, "Lanka Dental");
}

#[tokio::test]
async fn district_query_sends_filters_and_omits_absent_ones() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "businesses": [] });

    Mock::given(method("GET"))
        .and(path("/v1/businesses"))
        .and(query_param("district", "Kandy"))
        .and(query_param("q", "hotel"))
        .and(query_param("category", "Hotels & Lodging"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let businesses = store
        .district_query(&DistrictQuery {
            district: "Kandy".to_string(),
            free_text: Some("hotel".to_string()),
            category: Some("Hotels & Lodging".to_string()),
        })
        .await
        .expect("district query succeeds");

    assert!(businesses.is_empty());
}

#[tokio::test]
async fn district_query_without_optional_filters_sends_only_district() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/businesses"))
        .and(query_param("district", "Galle"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "businesses": [] })),
        )
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let result = store
        .district_query(&DistrictQuery {
            district: "Galle".to_string(),
            free_text: None,
            category: None,
        })
        .await;

    assert!(result.is_ok());
    let requests = server.received_requests().await.expect("recording enabled");
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("q="));
    assert!(!query.contains("category="));
}

#[tokio::test]
async fn backend_failure_is_a_status_error_not_an_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/businesses/nearby"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let err = store
        .geo_query(&GeoQuery {
            center: GeoPoint::new(9.6615, 80.0070),
            query: String::new(),
            radius_meters: 5_000,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Status { status: 500 }));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/businesses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let store = test_store(&server.uri());
    let err = store
        .district_query(&DistrictQuery {
            district: "Kandy".to_string(),
            free_text: None,
            category: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Decode(_)));
}
