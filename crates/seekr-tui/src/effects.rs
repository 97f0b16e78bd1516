//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).

use seekr_core::api::DocumentId;
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

#[derive(Debug)]
pub enum UiEffect {
    Quit,

    /// Run a query; the result comes back as `UiEvent::SearchFinished`.
    Search { task: TaskId, terms: Vec<String> },

    /// Fetch a document body; the result comes back as `UiEvent::DocumentLoaded`.
    FetchDocument { task: TaskId, id: DocumentId },

    /// Cancel an in-flight task that has been superseded.
    CancelTask { token: Option<CancellationToken> },
}
