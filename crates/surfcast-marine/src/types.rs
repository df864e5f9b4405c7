use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::geocode::NotFound;
use crate::params::MarineRecord;

/// A place suggested by the geocoder, not yet chosen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceCandidate {
    /// "Name, Country", or just the name when the country is unknown
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// The place a lookup runs against
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPlace {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<PlaceCandidate> for ResolvedPlace {
    fn from(candidate: PlaceCandidate) -> Self {
        Self {
            display_name: candidate.label,
            latitude: candidate.latitude,
            longitude: candidate.longitude,
        }
    }
}

/// Place plus current marine conditions, handed to the display layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfResult {
    #[serde(flatten)]
    pub place: ResolvedPlace,
    #[serde(flatten)]
    pub marine: MarineRecord,
    pub fetched_at: DateTime<Utc>,
}

impl SurfResult {
    pub fn new(place: ResolvedPlace, marine: MarineRecord) -> Self {
        Self {
            place,
            marine,
            fetched_at: Utc::now(),
        }
    }
}

/// Lookup failures surfaced to the user
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    LocationNotFound(#[from] NotFound),
    #[error("Lookup failed: {0}")]
    Failed(String),
}

impl LookupError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::LocationNotFound(_) => "Location not found.",
            Self::Failed(_) => "Failed to fetch surf data.",
        }
    }
}
