//! Search backend: place suggestions for the autocomplete box.
//! Network work runs off the UI thread; results sent via mpsc.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use surfcast_marine::{Geocoder, PlaceCandidate};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// One suggestion lookup, tagged with the generation that issued it
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
    pub limit: u32,
}

/// Messages sent from async operations back to the UI thread
#[derive(Debug)]
pub enum SearchServiceMessage {
    /// Suggestions for the search issued at `generation`
    SearchDone {
        generation: u64,
        candidates: Vec<PlaceCandidate>,
    },
}

/// Request suggestions asynchronously.
///
/// Sends `SearchDone` on the channel when complete. If `cancel` fires first
/// the request is dropped and nothing is sent.
pub fn request_search(
    tx: &Sender<SearchServiceMessage>,
    runtime: &Handle,
    geocoder: Arc<Geocoder>,
    request: SearchRequest,
    cancel: CancellationToken,
) {
    let tx = tx.clone();

    runtime.spawn(async move {
        let candidates = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(
                    "Search for {:?} (generation {}) aborted",
                    request.query,
                    request.generation
                );
                return;
            }
            candidates = geocoder.search(&request.query, request.limit) => candidates,
        };

        let _ = tx.send(SearchServiceMessage::SearchDone {
            generation: request.generation,
            candidates,
        });
    });
}
