//! Surf conditions for a named place.
//!
//! Resolves free text to coordinates via the Open-Meteo geocoding API and
//! fetches current marine conditions from the Open-Meteo marine API.

pub mod geocode;
pub mod lookup;
pub mod params;
pub mod provider;
pub mod types;

pub use geocode::{GeocodeError, Geocoder, NotFound, MIN_QUERY_LEN};
pub use lookup::{LookupOrchestrator, LookupRequest};
pub use params::{MarineParameter, MarineRecord};
pub use provider::{MarineDataFetcher, MarineFetchError};
pub use types::*;
