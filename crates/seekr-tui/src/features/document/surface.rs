//! Width-aware rendering surface for the document pane.

use std::{iter, mem};

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use seekr_core::highlight::{Segment, Surface};

use crate::common::text::{Glyph, glyph};

/// Lays segments out as styled lines, wrapping at `width` columns.
///
/// Rows are counted from the first line of the document, so the offsets it
/// reports only stay valid for the width it was built with.
#[derive(Debug)]
pub struct WrappedSurface {
    width: usize,
    plain: Style,
    highlight: Style,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    line_width: usize,
}

impl WrappedSurface {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            plain: Style::default(),
            highlight: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            lines: Vec::new(),
            spans: Vec::new(),
            line_width: 0,
        }
    }

    fn row(&self) -> usize {
        self.lines.len()
    }

    fn flush_run(&mut self, run: &mut String, style: Style) {
        if !run.is_empty() {
            self.spans.push(Span::styled(mem::take(run), style));
        }
    }

    fn break_line(&mut self) {
        let spans = mem::take(&mut self.spans);
        self.lines.push(Line::from(spans));
        self.line_width = 0;
    }

    /// Closes the trailing line and returns all lines.
    pub fn finish(mut self) -> Vec<Line<'static>> {
        self.break_line();
        self.lines
    }
}

impl Surface for WrappedSurface {
    fn append(&mut self, segment: &Segment<'_>) -> usize {
        let style = if segment.is_highlighted() {
            self.highlight
        } else {
            self.plain
        };
        let mut run = String::new();
        let mut first_row = None;

        for ch in segment.text.chars() {
            if ch == '\n' {
                first_row.get_or_insert(self.row());
                self.flush_run(&mut run, style);
                self.break_line();
                continue;
            }

            let (text, width) = match glyph(ch) {
                Glyph::Hidden => continue,
                Glyph::Char(c, w) => (Some(c), w),
                Glyph::Spaces(n) => (None, n.min(self.width)),
            };

            if self.line_width > 0 && self.line_width + width > self.width {
                self.flush_run(&mut run, style);
                self.break_line();
            }
            first_row.get_or_insert(self.row());

            match text {
                Some(c) => run.push(c),
                None => run.extend(iter::repeat_n(' ', width)),
            }
            self.line_width += width;
        }

        self.flush_run(&mut run, style);
        first_row.unwrap_or_else(|| self.row())
    }
}
