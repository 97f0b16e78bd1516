//! Segment rendering over the full document text.

use super::expand::{ceil_boundary, floor_boundary};
use super::span::DisplaySpan;
use super::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Plain,
    Highlighted,
}

/// A contiguous piece of the document, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t> {
    pub kind: SegmentKind,
    pub text: &'t str,
}

impl<'t> Segment<'t> {
    pub fn new(kind: SegmentKind, text: &'t str) -> Self {
        Self { kind, text }
    }

    pub fn is_highlighted(&self) -> bool {
        self.kind == SegmentKind::Highlighted
    }
}

/// Splits `text` into plain and highlighted segments and lays them out on `surface`.
///
/// The segments cover `text` exactly once, in order. `on_placed` is called with
/// the surface offset of every highlighted segment right after it is appended.
/// A plain segment precedes each highlight and one trailing plain segment is
/// always emitted; either may be empty.
///
/// A span starting before the end of the previous highlight is clamped to it,
/// so only its remainder is highlighted. A span left empty by clamping is
/// skipped and reports no offset.
pub fn render_segments<'t, S, F>(
    text: &'t str,
    spans: &[DisplaySpan],
    surface: &mut S,
    mut on_placed: F,
) -> Vec<Segment<'t>>
where
    S: Surface + ?Sized,
    F: FnMut(usize),
{
    let len = text.len();
    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        debug_assert!(cursor <= len);
        // Never move the cursor backwards: already emitted text is not repeated.
        let start = floor_boundary(text, span.start).max(cursor);
        let end = ceil_boundary(text, span.end).max(start);
        if end == start {
            continue;
        }

        let plain = Segment::new(SegmentKind::Plain, &text[cursor..start]);
        surface.append(&plain);
        segments.push(plain);

        let highlighted = Segment::new(SegmentKind::Highlighted, &text[start..end]);
        let offset = surface.append(&highlighted);
        on_placed(offset);
        segments.push(highlighted);

        cursor = end;
    }

    let rest = Segment::new(SegmentKind::Plain, &text[cursor..]);
    surface.append(&rest);
    segments.push(rest);

    segments
}
