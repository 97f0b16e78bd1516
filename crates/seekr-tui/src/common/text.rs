//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns a tab expands to in the document pane.
pub const TAB_WIDTH: usize = 4;

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// How a document character is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Draw `char` occupying `width` columns.
    Char(char, usize),
    /// Draw `n` spaces.
    Spaces(usize),
    /// Draw nothing (control characters, escapes).
    Hidden,
}

/// Maps a document character to what the terminal should show.
///
/// Byte offsets are computed on the untouched text, so sanitizing happens
/// per character at draw time instead of rewriting the body.
pub fn glyph(ch: char) -> Glyph {
    match ch {
        '\t' => Glyph::Spaces(TAB_WIDTH),
        c if c.is_control() => Glyph::Hidden,
        c => Glyph::Char(c, c.width().unwrap_or(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_truncated() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
    }

    #[test]
    fn test_truncate_with_ellipsis_wide_cjk() {
        // "中文" is 4 columns
        assert_eq!(truncate_with_ellipsis("中文test", 6), "中文t…");
        assert_eq!(truncate_with_ellipsis("a中b文c", 4), "a中…");
    }

    #[test]
    fn test_glyph_mapping() {
        assert_eq!(glyph('a'), Glyph::Char('a', 1));
        assert_eq!(glyph('中'), Glyph::Char('中', 2));
        assert_eq!(glyph('\t'), Glyph::Spaces(TAB_WIDTH));
        assert_eq!(glyph('\x1b'), Glyph::Hidden);
        assert_eq!(glyph('\r'), Glyph::Hidden);
    }
}
