//! Event-driven front end for surf lookups.
//!
//! Network work runs on a tokio runtime and reports back over mpsc channels;
//! the models drain those channels from the UI thread via `poll()`.

pub mod app_services;
pub mod error_mapping;
pub mod models;
pub mod page;
pub mod services;

pub use app_services::SurfServices;
pub use models::{AutocompleteController, LookupSession, SearchState};
pub use page::SurfPage;
