//! Centralized error types for the Surfcast application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Surf lookup error: {0}")]
    Surf(#[from] SurfError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Surf(e) => e.user_message(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::HttpClient(_) => "Unable to start the network client.",
        }
    }
}

/// Location and marine lookup errors, as shown to the user.
#[derive(Debug, Error)]
pub enum SurfError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Lookup failed: {0}")]
    LookupFailed(String),
}

impl SurfError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SurfError::LocationNotFound(_) => "Location not found.",
            SurfError::LookupFailed(_) => "Failed to fetch surf data.",
        }
    }
}
