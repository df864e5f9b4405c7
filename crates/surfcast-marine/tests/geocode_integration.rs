//! Integration tests for Geocoder using wiremock.

use std::time::Duration;

use surfcast_marine::{GeocodeError, Geocoder};
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocoder(server: &MockServer) -> Geocoder {
    Geocoder::new(
        format!("{}/v1/search", server.uri()),
        Some(Duration::from_secs(5)),
    )
    .unwrap()
}

fn place(name: &str, country: Option<&str>, lat: f64, lon: f64) -> serde_json::Value {
    let mut value = serde_json::json!({
        "id": 5391959,
        "name": name,
        "latitude": lat,
        "longitude": lon,
    });
    if let Some(country) = country {
        value["country"] = serde_json::json!(country);
    }
    value
}

#[tokio::test]
async fn test_resolve_one_san_francisco() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "San Francisco"))
        .and(query_param("count", "1"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [place("San Francisco", Some("United States"), 37.77, -122.42)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resolved = geocoder(&mock_server)
        .resolve_one("San Francisco")
        .await
        .unwrap();

    assert_eq!(resolved.display_name, "San Francisco, United States");
    assert_eq!(resolved.latitude, 37.77);
    assert_eq!(resolved.longitude, -122.42);
}

#[tokio::test]
async fn test_short_queries_make_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let geocoder = geocoder(&mock_server);
    for query in ["", "S"] {
        assert!(geocoder.search(query, 10).await.is_empty());
        let err = geocoder.resolve_one(query).await.unwrap_err();
        assert!(matches!(err.cause(), GeocodeError::QueryTooShort));
    }
}

#[tokio::test]
async fn test_resolve_one_no_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "generationtime_ms": 0.4
        })))
        .mount(&mock_server)
        .await;

    let err = geocoder(&mock_server)
        .resolve_one("Nowhere123")
        .await
        .unwrap_err();
    assert!(matches!(err.cause(), GeocodeError::NoMatch));
}

#[tokio::test]
async fn test_resolve_one_empty_results_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "results": [] })),
        )
        .mount(&mock_server)
        .await;

    let err = geocoder(&mock_server).resolve_one("Atlantis").await.unwrap_err();
    assert!(matches!(err.cause(), GeocodeError::NoMatch));
}

#[tokio::test]
async fn test_resolve_one_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = geocoder(&mock_server).resolve_one("Malibu").await.unwrap_err();
    assert!(matches!(err.cause(), GeocodeError::Status(503)));
    assert_eq!(err.to_string(), "Location not found");
}

#[tokio::test]
async fn test_resolve_one_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = geocoder(&mock_server).resolve_one("Malibu").await.unwrap_err();
    assert!(matches!(err.cause(), GeocodeError::Parse(_)));
}

#[tokio::test]
async fn test_resolve_one_transport_failure() {
    // Nothing listens on port 1
    let geocoder =
        Geocoder::new("http://127.0.0.1:1/v1/search", Some(Duration::from_secs(2))).unwrap();
    let err = geocoder.resolve_one("Malibu").await.unwrap_err();
    assert!(matches!(err.cause(), GeocodeError::Transport(_)));
}

#[tokio::test]
async fn test_search_preserves_rank_order_and_labels() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Santa"))
        .and(query_param("count", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                place("Santa Cruz", Some("United States"), 36.97, -122.03),
                place("Santa Monica", Some("United States"), 34.02, -118.49),
                place("Santa Teresa", None, 9.64, -85.17),
            ]
        })))
        .mount(&mock_server)
        .await;

    let candidates = geocoder(&mock_server).search("Santa", 10).await;
    let labels: Vec<_> = candidates.iter().map(|c| c.label.as_str()).collect();

    assert_eq!(
        labels,
        vec!["Santa Cruz, United States", "Santa Monica, United States", "Santa Teresa"]
    );
    assert_eq!(candidates[2].latitude, 9.64);
}

#[tokio::test]
async fn test_search_failure_yields_no_suggestions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    assert!(geocoder(&mock_server).search("Santa", 10).await.is_empty());
}
