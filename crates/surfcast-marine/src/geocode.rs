//! Forward geocoding: convert place names to coordinates.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::types::{PlaceCandidate, ResolvedPlace};

/// Queries shorter than this never reach the network
pub const MIN_QUERY_LEN: usize = 2;

const USER_AGENT: &str = concat!("surfcast/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl From<GeocodingResult> for PlaceCandidate {
    fn from(result: GeocodingResult) -> Self {
        let label = match result.country.as_deref().filter(|c| !c.is_empty()) {
            Some(country) => format!("{}, {}", result.name, country),
            None => result.name,
        };
        Self {
            label,
            latitude: result.latitude,
            longitude: result.longitude,
        }
    }
}

/// Why a geocode produced nothing.
///
/// Callers of [`Geocoder::resolve_one`] only see [`NotFound`]; the cause is
/// kept on it for logging.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("query is too short")]
    QueryTooShort,
    #[error("no matching place")]
    NoMatch,
    #[error("geocoder returned status {0}")]
    Status(u16),
    #[error("malformed geocoder response: {0}")]
    Parse(String),
    #[error("geocoder request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// No place could be resolved for a query
#[derive(Debug, thiserror::Error)]
#[error("Location not found")]
pub struct NotFound {
    #[source]
    cause: GeocodeError,
}

impl NotFound {
    pub fn new(cause: GeocodeError) -> Self {
        Self { cause }
    }

    /// The underlying reason: no match, bad status, parse or transport failure
    pub fn cause(&self) -> &GeocodeError {
        &self.cause
    }
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
    min_query_len: usize,
}

impl Geocoder {
    /// Create a geocoder against `base_url` (e.g.
    /// `https://geocoding-api.open-meteo.com/v1/search`).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
            min_query_len: MIN_QUERY_LEN,
        })
    }

    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.min_query_len = min_query_len;
        self
    }

    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    /// Whether `query` is long enough to be sent upstream
    pub fn accepts(&self, query: &str) -> bool {
        query.chars().count() >= self.min_query_len
    }

    /// Ranked candidates for `query`, keeping the failure cause.
    /// An empty upstream result is `Ok(vec![])`.
    pub async fn candidates(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<PlaceCandidate>, GeocodeError> {
        if !self.accepts(query) {
            return Err(GeocodeError::QueryTooShort);
        }

        let count = limit.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", query),
                ("count", count.as_str()),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let parsed: GeocodingResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Parse(e.to_string()))?;

        Ok(parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .map(PlaceCandidate::from)
            .collect())
    }

    /// Up to `limit` candidates in upstream rank order.
    /// Short queries and upstream failures both yield an empty list.
    pub async fn search(&self, query: &str, limit: u32) -> Vec<PlaceCandidate> {
        match self.candidates(query, limit).await {
            Ok(candidates) => candidates,
            Err(GeocodeError::QueryTooShort) => Vec::new(),
            Err(e) => {
                tracing::debug!("Place search for {:?} failed: {}", query, e);
                Vec::new()
            }
        }
    }

    /// The single best match for `query`.
    pub async fn resolve_one(&self, query: &str) -> Result<ResolvedPlace, NotFound> {
        let first = self
            .candidates(query, 1)
            .await
            .and_then(|c| c.into_iter().next().ok_or(GeocodeError::NoMatch));

        match first {
            Ok(candidate) => {
                tracing::debug!("Resolved {:?} to {}", query, candidate.label);
                Ok(candidate.into())
            }
            Err(cause) => {
                tracing::debug!("Could not resolve {:?}: {}", query, cause);
                Err(NotFound::new(cause))
            }
        }
    }
}
