use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{DocumentBody, DocumentState};
use crate::common::Scrollbar;
use crate::common::text::truncate_with_ellipsis;

/// Columns reserved on the right of the text for the scrollbar.
pub const SCROLLBAR_WIDTH: u16 = 1;

/// Text area inside the document block (borders and scrollbar excluded).
pub fn text_area(block_area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(block_area);
    Rect {
        width: inner.width.saturating_sub(SCROLLBAR_WIDTH),
        ..inner
    }
}

pub fn render_document(doc: &DocumentState, focused: bool, frame: &mut Frame, area: Rect) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let title_width = area.width.saturating_sub(4) as usize;
    let title = if doc.url.is_empty() {
        " Document ".to_string()
    } else {
        format!(" {} ", truncate_with_ellipsis(&doc.url, title_width.saturating_sub(2)))
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Line::from(Span::styled(title, Style::default().fg(border))));
    if doc.rendered().is_some() {
        let (current, total) = doc.counter();
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {current} / {total} "),
                Style::default().fg(Color::Yellow),
            ))
            .right_aligned(),
        );
    }
    frame.render_widget(block, area);

    let text = text_area(area);
    let placeholder = |message: String, color: Color| {
        Paragraph::new(Line::from(Span::styled(message, Style::default().fg(color))))
    };
    match doc.body() {
        DocumentBody::Empty => frame.render_widget(
            placeholder("Select a result and press Enter".into(), Color::DarkGray),
            text,
        ),
        DocumentBody::Loading => {
            frame.render_widget(placeholder("Loading…".into(), Color::DarkGray), text);
        }
        DocumentBody::Failed(message) => {
            frame.render_widget(placeholder(message.clone(), Color::Red), text);
        }
        DocumentBody::Loaded(_) => {
            let lines = doc.visible_lines().to_vec();
            frame.render_widget(Paragraph::new(lines), text);

            let markers = doc
                .rendered()
                .map(|r| r.navigation.offsets())
                .unwrap_or_default();
            let bar_area = Rect {
                x: text.x + text.width,
                width: SCROLLBAR_WIDTH,
                ..text
            };
            frame.render_widget(
                Scrollbar::new(doc.total_lines(), doc.viewport_height(), doc.scroll().top)
                    .markers(markers),
                bar_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_area_excludes_borders_and_scrollbar() {
        let area = text_area(Rect::new(10, 2, 40, 12));
        assert_eq!(area, Rect::new(11, 3, 37, 10));
    }
}
