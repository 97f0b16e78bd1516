//! Document scrollbar with match markers.
//!
//! The thumb length is computed once from the content/viewport ratio so it
//! does not fluctuate while scrolling. Match rows are projected onto the track
//! as ticks, which gives an overview of where hits sit in a long document.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";
const MARKER_SYMBOL: &str = "━";

#[derive(Debug, Clone)]
pub struct Scrollbar<'a> {
    /// Total number of lines in content.
    total_lines: usize,
    /// Number of visible lines in viewport.
    viewport_height: usize,
    /// Current scroll offset (0 = top).
    scroll_offset: usize,
    /// Content rows holding a match, ascending.
    markers: &'a [usize],
}

impl<'a> Scrollbar<'a> {
    pub fn new(total_lines: usize, viewport_height: usize, scroll_offset: usize) -> Self {
        Self {
            total_lines,
            viewport_height,
            scroll_offset,
            markers: &[],
        }
    }

    pub fn markers(mut self, rows: &'a [usize]) -> Self {
        self.markers = rows;
        self
    }

    /// Only shows when there's content to scroll.
    fn should_display(&self) -> bool {
        self.total_lines > self.viewport_height
    }

    /// `(thumb_start, thumb_len)` in track cells.
    fn thumb(&self, track_len: usize) -> (usize, usize) {
        let max_scroll = self.total_lines.saturating_sub(self.viewport_height);
        let viewport_len = self.viewport_height.min(track_len);

        // round(track_len * viewport_len / (total_lines - 1 + viewport_len))
        let denom = self
            .total_lines
            .saturating_sub(1)
            .saturating_add(viewport_len);
        let thumb_len = if denom > 0 {
            let numerator = track_len as u64 * viewport_len as u64;
            let rounded = (numerator + (denom as u64 / 2)) / denom as u64;
            (rounded as usize).clamp(1, track_len)
        } else {
            track_len
        };

        if max_scroll == 0 {
            return (0, thumb_len);
        }
        let available = track_len.saturating_sub(thumb_len);
        let offset = self.scroll_offset.min(max_scroll);
        let thumb_start = ((offset as u64 * available as u64) / max_scroll as u64) as usize;
        (thumb_start, thumb_len)
    }

    fn marker_cell(&self, row: usize, track_len: usize) -> usize {
        let cell = (row as u64 * track_len as u64) / self.total_lines.max(1) as u64;
        (cell as usize).min(track_len.saturating_sub(1))
    }
}

impl Widget for Scrollbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.should_display() {
            return;
        }

        let track_len = area.height as usize;
        if track_len == 0 || area.width == 0 {
            return;
        }

        let (thumb_start, thumb_len) = self.thumb(track_len);
        let x = area.x + area.width - 1;
        for (idx, y) in (area.y..area.y + area.height).enumerate() {
            let symbol = if idx >= thumb_start && idx < thumb_start + thumb_len {
                THUMB_SYMBOL
            } else {
                TRACK_SYMBOL
            };
            buf.set_string(x, y, symbol, Style::default().fg(Color::DarkGray));
        }

        let marker_style = Style::default().fg(Color::Yellow);
        for &row in self.markers {
            let idx = self.marker_cell(row, track_len);
            buf.set_string(x, area.y + idx as u16, MARKER_SYMBOL, marker_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_when_content_exceeds_viewport() {
        assert!(Scrollbar::new(100, 20, 0).should_display());
        assert!(!Scrollbar::new(10, 20, 0).should_display());
        assert!(!Scrollbar::new(20, 20, 0).should_display());
    }

    #[test]
    fn test_thumb_reaches_bottom_at_max_scroll() {
        let bar = Scrollbar::new(100, 20, 80);
        let (start, len) = bar.thumb(20);
        assert_eq!(start + len, 20);
    }

    #[test]
    fn test_markers_project_onto_track() {
        let rows = [0, 50, 99];
        let bar = Scrollbar::new(100, 10, 0).markers(&rows);
        assert_eq!(bar.marker_cell(0, 10), 0);
        assert_eq!(bar.marker_cell(50, 10), 5);
        assert_eq!(bar.marker_cell(99, 10), 9);
    }

    #[test]
    fn test_render_draws_marker_cells() {
        let rows = [50];
        let area = Rect::new(0, 0, 1, 10);
        let mut buf = Buffer::empty(area);

        Scrollbar::new(100, 10, 0).markers(&rows).render(area, &mut buf);

        assert_eq!(buf[(0, 5)].symbol(), MARKER_SYMBOL);
        assert_eq!(buf[(0, 0)].symbol(), THUMB_SYMBOL);
        assert_eq!(buf[(0, 9)].symbol(), TRACK_SYMBOL);
    }
}
