//! Shared services built once from configuration.
//!
//! The geocoder, marine fetcher and orchestrator are constructed from an
//! already-resolved [`Config`] and handed to each model explicitly; nothing
//! reads configuration while a request is in flight.

use std::sync::Arc;

use surfcast_core::{AppError, Config, ConfigError};
use surfcast_marine::{Geocoder, LookupOrchestrator, MarineDataFetcher};
use tokio::runtime::Handle;

use crate::models::{AutocompleteController, LookupSession};
use crate::page::SurfPage;

pub struct SurfServices {
    runtime: Handle,
    geocoder: Arc<Geocoder>,
    orchestrator: Arc<LookupOrchestrator>,
    suggestion_limit: u32,
}

impl SurfServices {
    /// Build services from a validated config.
    pub fn new(config: &Config, runtime: Handle) -> Result<Self, AppError> {
        let validation = config.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }
        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        let timeout = config.http.request_timeout();
        let geocoder = Geocoder::new(config.endpoints.geocoding_url.clone(), timeout)
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?
            .with_min_query_len(config.search.min_query_len);
        let fetcher = MarineDataFetcher::new(config.endpoints.marine_url.clone(), timeout)
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        let geocoder = Arc::new(geocoder);
        let orchestrator = Arc::new(LookupOrchestrator::new(geocoder.clone(), Arc::new(fetcher)));

        tracing::info!(
            "Surf services ready (geocoding: {}, marine: {})",
            config.endpoints.geocoding_url,
            config.endpoints.marine_url
        );

        Ok(Self {
            runtime,
            geocoder,
            orchestrator,
            suggestion_limit: config.search.suggestion_limit,
        })
    }

    /// Load configuration from disk and environment, then build services.
    pub fn from_env(runtime: Handle) -> Result<Self, AppError> {
        Self::from_loaded(Config::load(), runtime)
    }

    /// A config that could not be read or parsed is a `ParseError`; one
    /// that loads but fails validation is `Invalid`.
    fn from_loaded(loaded: anyhow::Result<Config>, runtime: Handle) -> Result<Self, AppError> {
        let config = loaded.map_err(|e| ConfigError::ParseError(format!("{e:#}")))?;
        Self::new(&config, runtime)
    }

    pub fn search_model(&self) -> AutocompleteController {
        AutocompleteController::new(self.geocoder.clone(), self.runtime.clone())
            .with_limit(self.suggestion_limit)
    }

    pub fn lookup_model(&self) -> LookupSession {
        LookupSession::new(self.orchestrator.clone(), self.runtime.clone())
    }

    pub fn page(&self) -> SurfPage {
        SurfPage::new(self.search_model(), self.lookup_model())
    }
}
