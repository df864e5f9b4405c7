//! Integration tests for MarineDataFetcher using wiremock.

use std::time::Duration;

use surfcast_marine::{MarineDataFetcher, MarineFetchError, MarineParameter};
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(server: &MockServer) -> MarineDataFetcher {
    MarineDataFetcher::new(
        format!("{}/v1/marine", server.uri()),
        Some(Duration::from_secs(5)),
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_santa_cruz_mixed_shapes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/marine"))
        .and(query_param("latitude", "36.963"))
        .and(query_param("longitude", "-122.018"))
        .and(query_param("current", MarineParameter::query_list().as_str()))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 36.958336,
            "longitude": -122.04167,
            "current": {
                "time": "2026-10-16T09:00",
                "interval": 3600,
                "wave_height": [1.2],
                "sea_surface_temperature": 14.5
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let record = fetcher(&mock_server).fetch(36.963, -122.018).await;

    assert_eq!(record.get(MarineParameter::WaveHeight), Some(1.2));
    assert_eq!(record.get(MarineParameter::SeaSurfaceTemperature), Some(14.5));
    let absent = record.iter().filter(|(_, v)| v.is_none()).count();
    assert_eq!(absent, 16);
}

#[tokio::test]
async fn test_fetch_nan_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let record = fetcher(&mock_server).fetch(f64::NAN, f64::NAN).await;
    assert!(record.is_all_absent());
    assert_eq!(record.iter().count(), 18);
}

#[tokio::test]
async fn test_fetch_server_error_collapses_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/marine"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": true,
            "reason": "No data is available for this location"
        })))
        .mount(&mock_server)
        .await;

    let fetcher = fetcher(&mock_server);
    assert!(fetcher.fetch(46.0, 8.0).await.is_all_absent());

    let err = fetcher.try_fetch(46.0, 8.0).await.unwrap_err();
    assert!(matches!(err, MarineFetchError::Status(400)));
}

#[tokio::test]
async fn test_fetch_malformed_json_collapses_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"current\": {\"wave_height\": [1.2"))
        .mount(&mock_server)
        .await;

    let fetcher = fetcher(&mock_server);
    assert!(fetcher.fetch(36.963, -122.018).await.is_all_absent());
    assert!(matches!(
        fetcher.try_fetch(36.963, -122.018).await.unwrap_err(),
        MarineFetchError::Parse(_)
    ));
}

#[tokio::test]
async fn test_fetch_transport_failure_collapses_record() {
    let fetcher =
        MarineDataFetcher::new("http://127.0.0.1:1/v1/marine", Some(Duration::from_secs(2)))
            .unwrap();

    assert!(fetcher.fetch(36.963, -122.018).await.is_all_absent());
}

#[tokio::test]
async fn test_fetch_without_current_block() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 36.958336,
            "longitude": -122.04167
        })))
        .mount(&mock_server)
        .await;

    let record = fetcher(&mock_server).fetch(36.963, -122.018).await;
    assert!(record.is_all_absent());
}

#[tokio::test]
async fn test_fetch_is_idempotent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/marine"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": {
                "wave_height": [0.9],
                "wave_period": 11.0,
                "swell_wave_direction": [285],
                "ocean_current_velocity": 0.0
            }
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher(&mock_server);
    let first = fetcher.fetch(21.66, -158.05).await;
    let second = fetcher.fetch(21.66, -158.05).await;

    assert_eq!(first, second);
    assert_eq!(first.get(MarineParameter::SwellWaveDirection), Some(285.0));
    assert_eq!(first.get(MarineParameter::OceanCurrentVelocity), Some(0.0));
}
