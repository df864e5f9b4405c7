//! Lookup state for the results panel: `result`, `loading` and `error`.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use surfcast_core::AppError;
use surfcast_marine::{LookupOrchestrator, LookupRequest, SurfResult};
use tokio::runtime::Handle;

use crate::services::{request_lookup, LookupServiceMessage};

/// Display-facing state of the most recent lookup.
///
/// Starting a lookup supersedes any earlier one; a late reply from the
/// earlier lookup is dropped on arrival.
pub struct LookupSession {
    orchestrator: Arc<LookupOrchestrator>,
    runtime: Handle,
    tx: Sender<LookupServiceMessage>,
    rx: Receiver<LookupServiceMessage>,
    generation: u64,
    loading: bool,
    error: Option<String>,
    location: String,
    result: Option<SurfResult>,
}

impl LookupSession {
    pub fn new(orchestrator: Arc<LookupOrchestrator>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            orchestrator,
            runtime,
            tx,
            rx,
            generation: 0,
            loading: false,
            error: None,
            location: String::new(),
            result: None,
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Short user-facing message for the last failed lookup
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Display name of the resolved place, set as soon as geocoding
    /// succeeds and before marine data arrives
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn result(&self) -> Option<&SurfResult> {
        self.result.as_ref()
    }

    /// Start a lookup, clearing the previous result and error.
    pub fn begin(&mut self, request: LookupRequest) {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.location.clear();
        self.result = None;

        tracing::info!("Looking up surf conditions for {:?}", request.label());
        request_lookup(
            &self.tx,
            &self.runtime,
            self.orchestrator.clone(),
            self.generation,
            request,
        );
    }

    /// Apply lookup progress. Returns true if visible state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        while let Ok(message) = self.rx.try_recv() {
            match message {
                LookupServiceMessage::Resolved {
                    generation,
                    display_name,
                } => {
                    if generation != self.generation {
                        continue;
                    }
                    self.location = display_name;
                    changed = true;
                }
                LookupServiceMessage::LookupDone { generation, result } => {
                    if generation != self.generation {
                        tracing::debug!("Discarding superseded lookup (generation {})", generation);
                        continue;
                    }

                    self.loading = false;
                    match result {
                        Ok(surf) => {
                            self.location = surf.place.display_name.clone();
                            self.result = Some(surf);
                        }
                        Err(e) => {
                            tracing::warn!("Lookup failed: {}", e);
                            self.error = Some(AppError::from(e).user_message().to_string());
                        }
                    }
                    changed = true;
                }
            }
        }

        changed
    }
}
