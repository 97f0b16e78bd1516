//! UI event types consumed by the reducer.

use crossterm::event::Event;
use seekr_core::api::{DocumentId, SearchError, SearchResults};

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Animation/debounce heartbeat; the only event that triggers a redraw.
    Tick,
    /// Current terminal size, sent before each batch of events.
    Frame { width: u16, height: u16 },
    Terminal(Event),

    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    SearchFinished {
        terms: Vec<String>,
        result: Result<SearchResults, SearchError>,
    },
    DocumentLoaded {
        id: DocumentId,
        result: Result<String, SearchError>,
    },
    /// A task observed its cancel token; nothing to apply.
    Cancelled,
}
