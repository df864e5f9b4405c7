//! Current marine conditions from the Open-Meteo marine API.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::params::{MarineParameter, MarineRecord};

const USER_AGENT: &str = concat!("surfcast/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct MarineResponse {
    #[serde(default)]
    current: Option<HashMap<String, Value>>,
}

/// Why a marine fetch failed. Never leaves this crate's public fetch path:
/// every variant collapses to an all-absent record.
#[derive(Debug, thiserror::Error)]
pub enum MarineFetchError {
    #[error("marine API returned status {0}")]
    Status(u16),
    #[error("malformed marine response: {0}")]
    Parse(String),
    #[error("marine request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct MarineDataFetcher {
    client: Client,
    base_url: String,
}

impl MarineDataFetcher {
    /// Create a fetcher against `base_url` (e.g.
    /// `https://marine-api.open-meteo.com/v1/marine`).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    /// Current value of every catalog parameter at the given coordinates.
    ///
    /// Non-finite coordinates skip the request. Any failure yields
    /// [`MarineRecord::all_absent`], never a partially filled record.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> MarineRecord {
        if !latitude.is_finite() || !longitude.is_finite() {
            tracing::debug!("Skipping marine fetch for invalid coordinates");
            return MarineRecord::all_absent();
        }

        match self.try_fetch(latitude, longitude).await {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(
                    "Marine fetch for {}, {} failed: {}",
                    latitude,
                    longitude,
                    e
                );
                MarineRecord::all_absent()
            }
        }
    }

    /// Like [`fetch`](Self::fetch) but keeps the failure cause.
    pub async fn try_fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<MarineRecord, MarineFetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", MarineParameter::query_list()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MarineFetchError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let parsed: MarineResponse =
            serde_json::from_str(&body).map_err(|e| MarineFetchError::Parse(e.to_string()))?;

        Ok(normalize(parsed.current.unwrap_or_default()))
    }
}

/// Flatten the `current` block into a record. Missing keys stay absent.
fn normalize(current: HashMap<String, Value>) -> MarineRecord {
    let mut record = MarineRecord::all_absent();
    for param in MarineParameter::ALL {
        record.set(param, current.get(param.as_str()).and_then(scalar));
    }
    record
}

/// A sample is a bare number or a one-element time series
fn scalar(value: &Value) -> Option<f64> {
    match value {
        Value::Array(items) => items.first().and_then(Value::as_f64),
        other => other.as_f64(),
    }
}
