pub mod lookup_service;
pub mod search_service;

pub use lookup_service::{
    request_lookup, LookupServiceError, LookupServiceMessage,
};
pub use search_service::{request_search, SearchRequest, SearchServiceMessage};
