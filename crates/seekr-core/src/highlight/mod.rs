//! Match highlighting pipeline.
//!
//! Raw `(position, length)` matches reported by the search service flow
//! through three stages:
//!
//! ```text
//! RawMatch[] ──normalize──▶ sorted RawMatch[]
//!            ──expand────▶ DisplaySpan[]   (word-aligned, with context margin)
//!            ──render────▶ Segment[]       (plain/highlighted, appended to a Surface)
//! ```
//!
//! Offsets are byte offsets into the UTF-8 document body.

mod expand;
mod render;
mod span;
mod surface;

pub use expand::{DEFAULT_LEFT_MARGIN, DEFAULT_RIGHT_MARGIN, Margins, expand_match, is_letter};
pub use render::{Segment, SegmentKind, render_segments};
pub use span::{DisplaySpan, RawMatch, normalize_matches};
pub use surface::{LineSurface, Surface};

use crate::navigation::{NavigationState, PositionTracker};

/// Output of a full highlight pass over one document.
#[derive(Debug, Clone)]
pub struct Highlighted<'t> {
    pub segments: Vec<Segment<'t>>,
    pub navigation: NavigationState,
}

/// Runs the whole pipeline: normalize, expand, render into `surface`, track offsets.
///
/// The returned `NavigationState` is fresh for this render pass.
pub fn highlight_document<'t, S: Surface>(
    text: &'t str,
    matches: &[RawMatch],
    margins: Margins,
    surface: &mut S,
) -> Highlighted<'t> {
    let spans: Vec<DisplaySpan> = normalize_matches(matches)
        .iter()
        .map(|m| expand_match(text, *m, margins))
        .collect();

    let mut tracker = PositionTracker::new();
    let segments = render_segments(text, &spans, surface, |offset| tracker.record(offset));
    let navigation = tracker.finish();

    tracing::debug!(
        matches = matches.len(),
        segments = segments.len(),
        highlighted = navigation.total(),
        "highlighted document"
    );

    Highlighted {
        segments,
        navigation,
    }
}
