//! Autocomplete state for the location search box.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use surfcast_marine::{Geocoder, LookupRequest, PlaceCandidate};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::services::{request_search, SearchRequest, SearchServiceMessage};

pub const DEFAULT_SUGGESTION_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Fetching,
    Settled,
}

#[derive(Debug, Clone, Default)]
struct SearchSession {
    query: String,
    candidates: Vec<PlaceCandidate>,
    selected: Option<PlaceCandidate>,
    /// Bumped on every keystroke, selection and reset; only replies
    /// carrying the current value are applied.
    generation: u64,
    state: SearchState,
}

/// Drives suggestion searches from keystrokes.
///
/// Each qualifying keystroke aborts the previous search and issues a new one.
/// Replies that still arrive for a superseded search are dropped in `poll`,
/// so the last issued query wins regardless of completion order.
pub struct AutocompleteController {
    geocoder: Arc<Geocoder>,
    runtime: Handle,
    limit: u32,
    tx: Sender<SearchServiceMessage>,
    rx: Receiver<SearchServiceMessage>,
    session: SearchSession,
    in_flight: Option<CancellationToken>,
}

impl AutocompleteController {
    pub fn new(geocoder: Arc<Geocoder>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            geocoder,
            runtime,
            limit: DEFAULT_SUGGESTION_LIMIT,
            tx,
            rx,
            session: SearchSession::default(),
            in_flight: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn query(&self) -> &str {
        &self.session.query
    }

    /// Current suggestions, in geocoder rank order
    pub fn candidates(&self) -> &[PlaceCandidate] {
        &self.session.candidates
    }

    pub fn selected(&self) -> Option<&PlaceCandidate> {
        self.session.selected.as_ref()
    }

    pub fn state(&self) -> SearchState {
        self.session.state
    }

    /// True while a suggestion search is outstanding
    pub fn is_fetching(&self) -> bool {
        self.session.state == SearchState::Fetching
    }

    pub fn generation(&self) -> u64 {
        self.session.generation
    }

    /// Handle a change of the input text.
    pub fn on_input(&mut self, text: impl Into<String>) {
        self.supersede();
        self.session.query = text.into();
        self.session.selected = None;

        if !self.geocoder.accepts(&self.session.query) {
            self.session.candidates.clear();
            self.session.state = SearchState::Settled;
            return;
        }

        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());
        self.session.state = SearchState::Fetching;

        request_search(
            &self.tx,
            &self.runtime,
            self.geocoder.clone(),
            SearchRequest {
                generation: self.session.generation,
                query: self.session.query.clone(),
                limit: self.limit,
            },
            cancel,
        );
    }

    /// Apply finished searches. Returns true if visible state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        while let Ok(message) = self.rx.try_recv() {
            match message {
                SearchServiceMessage::SearchDone {
                    generation,
                    candidates,
                } => {
                    if generation != self.session.generation {
                        tracing::debug!(
                            "Discarding stale suggestions (generation {}, current {})",
                            generation,
                            self.session.generation
                        );
                        continue;
                    }

                    self.in_flight = None;
                    self.session.candidates = candidates;
                    self.session.state = SearchState::Settled;
                    changed = true;
                }
            }
        }

        changed
    }

    /// Commit a suggestion: the query becomes its label and suggestions are
    /// hidden. The returned request goes straight to the marine stage.
    pub fn select_candidate(&mut self, candidate: PlaceCandidate) -> LookupRequest {
        self.supersede();
        self.session.query = candidate.label.clone();
        self.session.candidates.clear();
        self.session.state = SearchState::Settled;
        self.session.selected = Some(candidate.clone());

        LookupRequest::from(candidate)
    }

    /// Explicit confirmation of the search box.
    ///
    /// Uses the selected candidate, else the top suggestion, else the trimmed
    /// text for a fresh geocode. Blank text does nothing.
    pub fn submit(&mut self, raw_text: &str) -> Option<LookupRequest> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(selected) = &self.session.selected {
            return Some(LookupRequest::from(selected.clone()));
        }

        if let Some(first) = self.session.candidates.first().cloned() {
            return Some(self.select_candidate(first));
        }

        Some(LookupRequest::text(trimmed))
    }

    /// Drop all session state, e.g. when the search view goes away.
    pub fn reset(&mut self) {
        self.supersede();
        self.session = SearchSession {
            generation: self.session.generation,
            ..SearchSession::default()
        };
    }

    /// Abort the outstanding search and invalidate its reply.
    fn supersede(&mut self) {
        if let Some(cancel) = self.in_flight.take() {
            cancel.cancel();
        }
        self.session.generation += 1;
    }
}

impl Drop for AutocompleteController {
    fn drop(&mut self) {
        if let Some(cancel) = self.in_flight.take() {
            cancel.cancel();
        }
    }
}
