//! Next/previous match navigation.
//!
//! All operations take the surface's current scroll position (`scroll_top`)
//! because the user may have scrolled manually since the last jump. A match
//! counts as "below the fold" once its offset is more than `padding` below
//! `scroll_top`.
//!
//! `next` and `prev` are symmetric: `next` picks the first offset past
//! `scroll_top + padding`, `prev` the last offset before it. Both scroll so the
//! chosen match sits `padding` below the top of the viewport, which means
//! repeated presses walk the offsets one distinct row at a time.

use super::tracker::NavigationState;

/// Default margin between the viewport top and a match we jump to.
pub const DEFAULT_PADDING: usize = 20;

/// Result of a navigation step: the new current index and where to scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub index: usize,
    pub scroll_top: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchNavigator {
    padding: usize,
}

impl Default for MatchNavigator {
    fn default() -> Self {
        Self::new(DEFAULT_PADDING)
    }
}

impl MatchNavigator {
    pub fn new(padding: usize) -> Self {
        Self { padding }
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    /// First match past `scroll_top + padding`, or the last match.
    ///
    /// Returns `None` when there are no matches.
    pub fn locate(&self, state: &NavigationState, scroll_top: usize) -> Option<usize> {
        let offsets = state.offsets();
        let last = offsets.len().checked_sub(1)?;
        let threshold = scroll_top.saturating_add(self.padding);
        Some(
            offsets
                .iter()
                .position(|&offset| offset > threshold)
                .unwrap_or(last),
        )
    }

    /// Recomputes the current index for `scroll_top` without scrolling.
    pub fn update(&self, state: &mut NavigationState, scroll_top: usize) {
        if let Some(index) = self.locate(state, scroll_top) {
            state.set_current_index(index);
        }
    }

    /// Moves to the next match below the fold.
    pub fn next(&self, state: &mut NavigationState, scroll_top: usize) -> Option<Jump> {
        let index = self.locate(state, scroll_top)?;
        Some(self.jump_to(state, index))
    }

    /// Moves to the last match above `scroll_top + padding`.
    ///
    /// When no match lies above, the first match is chosen.
    pub fn prev(&self, state: &mut NavigationState, scroll_top: usize) -> Option<Jump> {
        if state.is_empty() {
            return None;
        }
        let threshold = scroll_top.saturating_add(self.padding);
        let index = state
            .offsets()
            .iter()
            .rposition(|&offset| offset < threshold)
            .unwrap_or(0);
        Some(self.jump_to(state, index))
    }

    fn jump_to(&self, state: &mut NavigationState, index: usize) -> Jump {
        state.set_current_index(index);
        Jump {
            index,
            scroll_top: state.offsets()[index].saturating_sub(self.padding),
        }
    }
}
