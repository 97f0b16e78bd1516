use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::StatusState;
use crate::common::{TaskMeta, Tasks};

/// Spinner frames for status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Ticks per spinner frame.
const SPINNER_SPEED_DIVISOR: usize = 6;

/// Inputs the status line reads from the rest of the app.
pub struct StatusView<'a> {
    pub status: &'a StatusState,
    pub tasks: &'a Tasks,
    pub spinner_frame: usize,
    /// `(current, total)` for the open document, if one is rendered.
    pub counter: Option<(usize, usize)>,
}

pub fn render_status_line(view: &StatusView<'_>, frame: &mut Frame, area: Rect) {
    let spinner = SPINNER_FRAMES[(view.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len()];
    let key = Style::default().fg(Color::DarkGray);

    let mut left: Vec<Span> = Vec::new();
    let pending = [&view.tasks.search, &view.tasks.document]
        .into_iter()
        .find(|t| t.is_running())
        .map(|t| match &t.meta {
            TaskMeta::Search { terms } => format!("Searching {}…", terms.join(" ")),
            TaskMeta::Document { id } => format!("Loading document {id}…"),
            TaskMeta::None => "Working…".to_string(),
        });

    if let Some(text) = pending {
        left.push(Span::styled(spinner, Style::default().fg(Color::Yellow)));
        left.push(Span::raw(" "));
        left.push(Span::styled(text, Style::default().fg(Color::Yellow)));
    } else if let Some(error) = view.status.error() {
        left.push(Span::styled(
            error.message.clone(),
            Style::default().fg(Color::Red),
        ));
        if error.retry.is_some() {
            left.push(Span::raw("  "));
            left.push(Span::styled("Ctrl+R", key));
            left.push(Span::raw(" retry"));
        }
    } else if let Some((current, total)) = view.counter {
        left.push(Span::styled(
            format!("match {current} / {total}"),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(" focus  "),
        Span::styled("n/N", key),
        Span::raw(" next/prev  "),
        Span::styled("Ctrl+C", key),
        Span::raw(" quit"),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints.width() as u16)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(left)), chunks[0]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), chunks[1]);
}
