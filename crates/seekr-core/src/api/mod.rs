//! Search service client.
//!
//! The service speaks plain HTTP GET with JSON responses for queries and plain
//! text for document bodies.

mod client;
mod error;
mod types;
mod view;

pub use client::{SearchClient, normalize_terms};
pub use error::{SearchError, SearchErrorKind, SearchResult, classify_reqwest_error};
pub use types::{DocumentId, SearchHit, SearchResults, parse_search_response};
pub use view::{ResultEntry, SnippetPart, build_result_entries, parse_snippet};
