//! Status line state types.

use seekr_core::api::{DocumentId, SearchError, SearchErrorKind};

/// Request that Ctrl+R re-issues after a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryRequest {
    Search { terms: Vec<String> },
    Document { id: DocumentId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    pub message: String,
    pub retry: Option<RetryRequest>,
}

#[derive(Debug, Default)]
pub struct StatusState {
    error: Option<StatusError>,
}

impl StatusState {
    pub fn error(&self) -> Option<&StatusError> {
        self.error.as_ref()
    }

    /// Records a failed request; retryable kinds keep the request for Ctrl+R.
    pub fn set_error(&mut self, context: &str, error: &SearchError, retry: RetryRequest) {
        let message = match error.kind {
            SearchErrorKind::MalformedResponse => format!("{context}: unexpected response"),
            _ => format!("{context}: {error}"),
        };
        self.error = Some(StatusError {
            message,
            retry: error.is_retryable().then_some(retry),
        });
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Removes and returns the pending retry, if any.
    pub fn take_retry(&mut self) -> Option<RetryRequest> {
        let retry = self.error.as_mut()?.retry.take();
        if retry.is_some() {
            self.error = None;
        }
        retry
    }
}
