use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::QueryState;

const PLACEHOLDER: &str = "type search terms…";

pub fn render_query(query: &QueryState, focused: bool, frame: &mut Frame, area: Rect) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Line::from(Span::styled(" Search ", Style::default().fg(border))));
    let inner = block.inner(area);

    let prefix_width = query.text()[..query.cursor()].width();
    let inner_width = inner.width as usize;
    let scroll = prefix_width.saturating_sub(inner_width.saturating_sub(1));

    let line = if query.text().is_empty() && !focused {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(query.text())
    };
    let paragraph = Paragraph::new(line)
        .block(block)
        .scroll((0, scroll as u16));
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner.x + (prefix_width - scroll) as u16;
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
