//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never mutate
//! state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::document::render_document;
use crate::query::render_query;
use crate::results::render_results;
use crate::state::{AppState, Focus};
use crate::statusline::{StatusView, render_status_line};

/// Height of the bordered query input.
const QUERY_HEIGHT: u16 = 3;

/// Height of status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Share of the body width given to the results list.
const RESULTS_PERCENT: u16 = 40;

/// Screen areas of each pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneLayout {
    pub query: Rect,
    pub results: Rect,
    pub document: Rect,
    pub status: Rect,
}

impl PaneLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(QUERY_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(RESULTS_PERCENT),
                Constraint::Percentage(100 - RESULTS_PERCENT),
            ])
            .split(rows[1]);

        Self {
            query: rows[0],
            results: body[0],
            document: body[1],
            status: rows[2],
        }
    }
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let layout = PaneLayout::compute(frame.area());

    render_query(&app.query, app.focus == Focus::Query, frame, layout.query);
    render_results(
        &app.results,
        app.focus == Focus::Results,
        frame,
        layout.results,
    );
    render_document(
        &app.document,
        app.focus == Focus::Document,
        frame,
        layout.document,
    );

    let view = StatusView {
        status: &app.status,
        tasks: &app.tasks,
        spinner_frame: app.spinner_frame,
        counter: app.document.rendered().map(|_| app.document.counter()),
    };
    render_status_line(&view, frame, layout.status);
}
