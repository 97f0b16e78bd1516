//! Expansion of raw matches to word-aligned display spans.

use serde::{Deserialize, Serialize};

use super::span::{DisplaySpan, RawMatch};

/// Default context kept before a match.
pub const DEFAULT_LEFT_MARGIN: usize = 10;
/// Default context kept after a match.
pub const DEFAULT_RIGHT_MARGIN: usize = 20;

/// Context margins applied around each match before word alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    #[serde(rename = "left_margin")]
    pub left: usize,
    #[serde(rename = "right_margin")]
    pub right: usize,
}

impl Margins {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT_MARGIN,
            right: DEFAULT_RIGHT_MARGIN,
        }
    }
}

/// Word characters are ASCII letters only; digits and punctuation end a word.
pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Widens `m` by the margins, then outward until neither edge splits a word.
///
/// Both edges stay inside `[0, text.len()]` and on char boundaries. A match
/// that itself runs past the end of the buffer is clamped to it.
pub fn expand_match(text: &str, m: RawMatch, margins: Margins) -> DisplaySpan {
    let len = text.len();
    let bytes = text.as_bytes();

    let position = m.position.min(len);
    let match_end = m.end().min(len);

    let mut start = floor_boundary(text, position.saturating_sub(margins.left));
    let mut end = ceil_boundary(text, match_end.saturating_add(margins.right).min(len));

    // Letters are single-byte, so stepping over them keeps us on char boundaries.
    while start > 0 && is_letter(bytes[start - 1]) {
        start -= 1;
    }
    while end < len && is_letter(bytes[end]) {
        end += 1;
    }

    DisplaySpan::new(start, end)
}

pub(super) fn floor_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

pub(super) fn ceil_boundary(text: &str, mut index: usize) -> usize {
    index = index.min(text.len());
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index
}
