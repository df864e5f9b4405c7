//! Shared helpers for front-end integration tests.

use std::time::Duration;

use surfcast_app::SurfServices;
use surfcast_core::Config;
use tokio::runtime::Handle;
use wiremock::MockServer;

/// Services pointed at `server` for both upstream APIs
pub fn services(server: &MockServer) -> SurfServices {
    let mut config = Config::default();
    config.endpoints.geocoding_url = format!("{}/v1/search", server.uri());
    config.endpoints.marine_url = format!("{}/v1/marine", server.uri());
    config.http.request_timeout_secs = 5;
    SurfServices::new(&config, Handle::current()).unwrap()
}

/// Poll `done` until it returns true, failing after ~3 seconds
pub async fn wait_for<F: FnMut() -> bool>(mut done: F) {
    for _ in 0..300 {
        if done() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(done(), "timed out waiting for state change");
}

pub fn place(name: &str, country: &str, latitude: f64, longitude: f64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "country": country,
        "latitude": latitude,
        "longitude": longitude,
    })
}
