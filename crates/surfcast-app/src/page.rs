//! Joins the search box to the results panel.

use surfcast_marine::PlaceCandidate;

use crate::models::{AutocompleteController, LookupSession};

pub struct SurfPage {
    search: AutocompleteController,
    lookup: LookupSession,
}

impl SurfPage {
    pub fn new(search: AutocompleteController, lookup: LookupSession) -> Self {
        Self { search, lookup }
    }

    pub fn search(&self) -> &AutocompleteController {
        &self.search
    }

    pub fn lookup(&self) -> &LookupSession {
        &self.lookup
    }

    pub fn on_input(&mut self, text: impl Into<String>) {
        self.search.on_input(text);
    }

    /// A suggestion was clicked: go straight to the marine stage.
    pub fn on_select(&mut self, candidate: PlaceCandidate) {
        let request = self.search.select_candidate(candidate);
        self.lookup.begin(request);
    }

    /// The search form was submitted. Returns false when nothing was started.
    pub fn on_submit(&mut self, raw_text: &str) -> bool {
        match self.search.submit(raw_text) {
            Some(request) => {
                self.lookup.begin(request);
                true
            }
            None => false,
        }
    }

    /// Drain both models. Returns true if anything visible changed.
    pub fn poll(&mut self) -> bool {
        let search_changed = self.search.poll();
        let lookup_changed = self.lookup.poll();
        search_changed || lookup_changed
    }

    pub fn unmount(&mut self) {
        self.search.reset();
    }
}
