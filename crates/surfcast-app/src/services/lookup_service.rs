//! Lookup backend: place resolution plus marine fetch.
//! All network work runs off the UI thread; results sent via mpsc.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use surfcast_marine::{LookupError, LookupOrchestrator, LookupRequest, SurfResult};
use tokio::runtime::Handle;
use tokio::task::JoinError;

/// Error type for lookup operations
#[derive(Debug, Clone)]
pub enum LookupServiceError {
    LocationNotFound(String),
    Failed(String),
}

impl std::fmt::Display for LookupServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupServiceError::LocationNotFound(s) => write!(f, "Location not found: {}", s),
            LookupServiceError::Failed(s) => write!(f, "Lookup failed: {}", s),
        }
    }
}

impl std::error::Error for LookupServiceError {}

impl From<LookupError> for LookupServiceError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::LocationNotFound(not_found) => {
                LookupServiceError::LocationNotFound(not_found.cause().to_string())
            }
            LookupError::Failed(s) => LookupServiceError::Failed(s),
        }
    }
}

/// Messages sent from async operations back to the UI thread
#[derive(Debug)]
pub enum LookupServiceMessage {
    /// The lookup issued at `generation` has its place; marine data follows
    Resolved {
        generation: u64,
        display_name: String,
    },
    /// Result of the lookup issued at `generation`
    LookupDone {
        generation: u64,
        result: Result<SurfResult, LookupServiceError>,
    },
}

/// Run a lookup asynchronously.
/// Sends `Resolved` once the place is known and `LookupDone` when complete.
pub fn request_lookup(
    tx: &Sender<LookupServiceMessage>,
    runtime: &Handle,
    orchestrator: Arc<LookupOrchestrator>,
    generation: u64,
    request: LookupRequest,
) {
    let tx = tx.clone();
    let progress = tx.clone();

    runtime.spawn(async move {
        // Run on its own task so a panic surfaces as a JoinError
        let joined = tokio::spawn(async move {
            let place = orchestrator.resolve(request).await?;
            let _ = progress.send(LookupServiceMessage::Resolved {
                generation,
                display_name: place.display_name.clone(),
            });
            Ok::<_, LookupError>(orchestrator.conditions(place).await)
        })
        .await;
        let _ = tx.send(LookupServiceMessage::LookupDone {
            generation,
            result: settle(joined),
        });
    });
}

/// Fold a finished lookup task into the service result
fn settle(
    joined: Result<Result<SurfResult, LookupError>, JoinError>,
) -> Result<SurfResult, LookupServiceError> {
    match joined {
        Ok(result) => result.map_err(LookupServiceError::from),
        Err(e) => {
            tracing::error!("Lookup task failed: {}", e);
            Err(LookupServiceError::Failed(e.to_string()))
        }
    }
}
