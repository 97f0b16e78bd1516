use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use seekr_core::api::ResultEntry;
use unicode_width::UnicodeWidthStr;

use super::ResultsState;
use crate::common::text::truncate_with_ellipsis;

/// Rows per result: url line plus snippet line.
pub const ENTRY_HEIGHT: usize = 2;

/// Index of the first entry shown so that `selected` stays visible.
pub fn first_visible(selected: usize, visible_entries: usize) -> usize {
    let visible = visible_entries.max(1);
    (selected + 1).saturating_sub(visible)
}

pub fn render_results(results: &ResultsState, focused: bool, frame: &mut Frame, area: Rect) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let title = if results.has_searched() {
        format!(" Results ({}) ", results.len())
    } else {
        " Results ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Line::from(Span::styled(title, Style::default().fg(border))));
    let inner = block.inner(area);
    let width = inner.width as usize;

    let lines: Vec<Line<'static>> = if results.is_empty() {
        let message = if results.has_searched() {
            "No results"
        } else {
            "Type to search"
        };
        vec![Line::from(Span::styled(
            message,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let visible = inner.height as usize / ENTRY_HEIGHT;
        let start = first_visible(results.selected_index(), visible);
        results
            .entries()
            .iter()
            .enumerate()
            .skip(start)
            .take(visible.max(1))
            .flat_map(|(idx, entry)| entry_lines(entry, idx == results.selected_index(), width))
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn entry_lines(entry: &ResultEntry, selected: bool, width: usize) -> [Line<'static>; 2] {
    let marker = if selected { "▶ " } else { "  " };
    let url_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };
    let url = truncate_with_ellipsis(&entry.url, width.saturating_sub(marker.width()));
    let header = Line::from(vec![Span::raw(marker), Span::styled(url, url_style)]);

    let mut spans = vec![Span::raw("  ")];
    let mut remaining = width.saturating_sub(2);
    for part in &entry.snippet {
        if remaining == 0 {
            break;
        }
        let text = truncate_with_ellipsis(&part.text, remaining);
        remaining = remaining.saturating_sub(text.width());
        let style = if part.marked {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(text, style));
    }

    [header, Line::from(spans)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visible_keeps_selection_in_view() {
        assert_eq!(first_visible(0, 5), 0);
        assert_eq!(first_visible(4, 5), 0);
        assert_eq!(first_visible(5, 5), 1);
        assert_eq!(first_visible(3, 0), 3);
    }
}
