use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_MARINE_URL: &str = "https://marine-api.open-meteo.com/v1/marine";

pub const GEOCODING_URL_ENV: &str = "SURFCAST_GEOCODING_URL";
pub const MARINE_URL_ENV: &str = "SURFCAST_MARINE_URL";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Upstream service base URLs
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Autocomplete settings
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Place-name geocoding endpoint (Open-Meteo geocoding API)
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    /// Marine observations endpoint (Open-Meteo marine API)
    #[serde(default = "default_marine_url")]
    pub marine_url: String,
}

fn default_geocoding_url() -> String {
    DEFAULT_GEOCODING_URL.to_string()
}

fn default_marine_url() -> String {
    DEFAULT_MARINE_URL.to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            marine_url: default_marine_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds. 0 leaves it to the network layer.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        (self.request_timeout_secs > 0)
            .then(|| std::time::Duration::from_secs(self.request_timeout_secs))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Shortest query (in characters) that triggers a geocoder request
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Number of suggestions requested per keystroke
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u32,
}

fn default_min_query_len() -> usize {
    2
}

fn default_suggestion_limit() -> u32 {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl Config {
    /// Load configuration from the user config directory, falling back to
    /// defaults when no file exists, then apply environment overrides.
    ///
    /// The result is not validated; see [`Config::validate`].
    pub fn load() -> Result<Self> {
        Self::load_with(Self::config_path(), |key| std::env::var(key).ok())
    }

    /// Load from `path` if it exists, then apply overrides from `lookup`.
    pub fn load_with<F>(path: Option<PathBuf>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(lookup);
        Ok(config)
    }

    /// Load configuration from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Apply endpoint overrides from a key lookup (the process environment
    /// in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(GEOCODING_URL_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::info!("Using geocoding endpoint from {}", GEOCODING_URL_ENV);
            self.endpoints.geocoding_url = url;
        }
        if let Some(url) = lookup(MARINE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            tracing::info!("Using marine endpoint from {}", MARINE_URL_ENV);
            self.endpoints.marine_url = url;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        validate_url(
            &self.endpoints.geocoding_url,
            "endpoints.geocoding_url",
            &mut result,
        );
        validate_url(&self.endpoints.marine_url, "endpoints.marine_url", &mut result);

        if self.http.request_timeout_secs == 0 {
            result.add_warning(
                "http.request_timeout_secs",
                "Request timeout disabled (0 seconds)",
            );
        } else if self.http.request_timeout_secs > 300 {
            result.add_warning(
                "http.request_timeout_secs",
                "Request timeout is more than 5 minutes",
            );
        }

        if self.search.min_query_len == 0 {
            result.add_error(
                "search.min_query_len",
                "Minimum query length must be greater than 0",
            );
        }

        if self.search.suggestion_limit == 0 {
            result.add_error(
                "search.suggestion_limit",
                "Suggestion limit must be greater than 0",
            );
        } else if self.search.suggestion_limit > 100 {
            // The geocoding API caps `count` at 100
            result.add_warning(
                "search.suggestion_limit",
                "Suggestion limit above 100 will be capped upstream",
            );
        }

        result
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("surfcast").join("config.toml"))
    }
}

fn validate_url(url_str: &str, field_name: &str, result: &mut ValidationResult) {
    match Url::parse(url_str) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                result.add_error(
                    field_name,
                    format!("URL must use http or https scheme, got: {}", url.scheme()),
                );
            }

            if url.host().is_none() {
                result.add_error(field_name, "URL must have a host");
            }

            if url.query().is_some() {
                result.add_warning(field_name, "Query string will be merged with request parameters");
            }
        }
        Err(e) => {
            result.add_error(field_name, format!("Invalid URL: {}", e));
        }
    }
}
