pub mod search_model;
pub mod surf_model;

pub use search_model::{AutocompleteController, SearchState};
pub use surf_model::LookupSession;
