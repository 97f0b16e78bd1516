use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a failed search-service exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchErrorKind {
    /// The request could not complete (connect failure, reset, DNS).
    Network,
    /// The request exceeded the configured timeout.
    Timeout,
    /// The service answered with a non-success status.
    HttpStatus,
    /// The response body did not have the expected shape.
    MalformedResponse,
}

impl fmt::Display for SearchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchErrorKind::Network => write!(f, "network"),
            SearchErrorKind::Timeout => write!(f, "timeout"),
            SearchErrorKind::HttpStatus => write!(f, "http_status"),
            SearchErrorKind::MalformedResponse => write!(f, "malformed_response"),
        }
    }
}

/// Structured error from the search client with kind and details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchError {
    pub kind: SearchErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl SearchError {
    pub fn new(kind: SearchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn http_status(status: u16, body: &str) -> Self {
        let error = Self::new(SearchErrorKind::HttpStatus, format!("HTTP {status}"));
        if body.trim().is_empty() {
            error
        } else {
            error.with_details(body.trim())
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(SearchErrorKind::MalformedResponse, message)
    }

    /// Whether a retry may succeed (everything except a malformed body).
    pub fn is_retryable(&self) -> bool {
        !matches!(self.kind, SearchErrorKind::MalformedResponse)
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SearchError {}

/// Result type for search client operations.
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Maps a transport error onto the search error taxonomy.
pub fn classify_reqwest_error(e: &reqwest::Error) -> SearchError {
    if e.is_timeout() {
        SearchError::new(SearchErrorKind::Timeout, format!("Request timed out: {e}"))
    } else if e.is_connect() {
        SearchError::new(SearchErrorKind::Network, format!("Connection failed: {e}"))
    } else if e.is_decode() || e.is_body() {
        SearchError::new(SearchErrorKind::MalformedResponse, format!("Unreadable body: {e}"))
    } else if let Some(status) = e.status() {
        SearchError::http_status(status.as_u16(), "")
    } else {
        SearchError::new(SearchErrorKind::Network, format!("Network error: {e}"))
    }
}
