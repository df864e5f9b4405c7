pub mod config;
pub mod error;

pub use config::{Config, EndpointConfig, HttpConfig, SearchConfig, ValidationResult};
pub use error::{AppError, ConfigError, SurfError};

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    tracing::info!("Surfcast core initialized");
    Ok(())
}
