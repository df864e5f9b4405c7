//! Place resolution followed by the marine fetch.

use std::sync::Arc;

use tracing::instrument;

use crate::geocode::{Geocoder, NotFound};
use crate::params::MarineParameter;
use crate::provider::MarineDataFetcher;
use crate::types::{LookupError, PlaceCandidate, ResolvedPlace, SurfResult};

/// What the user asked for: free text to geocode, or a place whose
/// coordinates are already known (a chosen suggestion).
#[derive(Debug, Clone, PartialEq)]
pub enum LookupRequest {
    Text(String),
    Place(ResolvedPlace),
}

impl LookupRequest {
    pub fn text(raw: impl Into<String>) -> Self {
        Self::Text(raw.into())
    }

    /// Label shown while the lookup runs
    pub fn label(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Place(place) => &place.display_name,
        }
    }
}

impl From<PlaceCandidate> for LookupRequest {
    fn from(candidate: PlaceCandidate) -> Self {
        Self::Place(candidate.into())
    }
}

#[derive(Debug, Clone)]
pub struct LookupOrchestrator {
    geocoder: Arc<Geocoder>,
    fetcher: Arc<MarineDataFetcher>,
}

impl LookupOrchestrator {
    pub fn new(geocoder: Arc<Geocoder>, fetcher: Arc<MarineDataFetcher>) -> Self {
        Self { geocoder, fetcher }
    }

    /// Resolve the place (skipped when coordinates are supplied), then fetch
    /// its marine conditions.
    ///
    /// A failed geocode ends the run with `LocationNotFound` before any
    /// marine request. Marine failures do not fail the run; they show up as
    /// absent values.
    #[instrument(skip(self), level = "info")]
    pub async fn run(&self, request: LookupRequest) -> Result<SurfResult, LookupError> {
        let place = self.resolve(request).await?;
        Ok(self.conditions(place).await)
    }

    /// First stage of [`run`](Self::run): the place the lookup will use.
    pub async fn resolve(&self, request: LookupRequest) -> Result<ResolvedPlace, NotFound> {
        match request {
            LookupRequest::Place(place) => Ok(place),
            LookupRequest::Text(text) => self.geocoder.resolve_one(&text).await,
        }
    }

    /// Second stage of [`run`](Self::run): current marine conditions at `place`.
    pub async fn conditions(&self, place: ResolvedPlace) -> SurfResult {
        let marine = self.fetcher.fetch(place.latitude, place.longitude).await;
        tracing::info!(
            "Fetched marine data for {} ({} of {} parameters present)",
            place.display_name,
            marine.present_count(),
            MarineParameter::COUNT
        );

        SurfResult::new(place, marine)
    }
}
