//! Application state composition.
//!
//! ```text
//! AppState
//! ├── query: QueryState        (term editor, debounce)
//! ├── results: ResultsState    (ranked entries, selection)
//! ├── document: DocumentState  (highlighted body, scroll, navigation)
//! ├── status: StatusState      (last error, retry request)
//! ├── task_seq / tasks         (async task ids and lifecycle)
//! └── settings / layout / focus
//! ```

use std::time::Duration;

use seekr_core::config::Config;
use seekr_core::highlight::Margins;
use seekr_core::navigation::MatchNavigator;

use crate::common::{TaskSeq, Tasks};
use crate::document::DocumentState;
use crate::query::QueryState;
use crate::render::PaneLayout;
use crate::results::ResultsState;
use crate::statusline::StatusState;

/// Pane that receives key input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Query,
    Results,
    Document,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Query => Focus::Results,
            Focus::Results => Focus::Document,
            Focus::Document => Focus::Query,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Query => Focus::Document,
            Focus::Results => Focus::Query,
            Focus::Document => Focus::Results,
        }
    }
}

/// Values taken from `Config` at startup.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub debounce: Duration,
    pub margins: Margins,
    pub navigator: MatchNavigator,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            debounce: config.debounce(),
            margins: config.highlight,
            navigator: config.navigation.navigator(),
        }
    }
}

pub struct AppState {
    pub query: QueryState,
    pub results: ResultsState,
    pub document: DocumentState,
    pub status: StatusState,
    pub focus: Focus,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub settings: Settings,
    /// Pane rectangles from the last `Frame` event (used for mouse hit-testing).
    pub layout: PaneLayout,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            query: QueryState::default(),
            results: ResultsState::default(),
            document: DocumentState::default(),
            status: StatusState::default(),
            focus: Focus::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            settings: Settings::from_config(config),
            layout: PaneLayout::default(),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Whether the runtime should tick at frame rate.
    pub fn is_animating(&self) -> bool {
        self.tasks.is_any_running() || self.document.is_animating() || self.query.has_pending_edit()
    }
}
