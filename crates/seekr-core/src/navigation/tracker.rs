/// Current match index plus the rendered offsets of all matches of one document.
///
/// Owned by whoever owns the rendered document; replaced wholesale on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    offsets: Vec<usize>,
    current_index: usize,
}

impl NavigationState {
    /// Offsets of the highlighted segments, in emission order.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn total(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Zero-based index of the current match.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// One-based counter for display; `0` when there are no matches.
    pub fn current(&self) -> usize {
        if self.offsets.is_empty() {
            0
        } else {
            self.current_index + 1
        }
    }

    pub(super) fn set_current_index(&mut self, index: usize) {
        debug_assert!(index < self.offsets.len());
        self.current_index = index;
    }
}

/// Collects highlight offsets for a single render pass.
#[derive(Debug, Default)]
pub struct PositionTracker {
    offsets: Vec<usize>,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the offset of the next placed highlight.
    pub fn record(&mut self, offset: usize) {
        self.offsets.push(offset);
    }

    /// Consumes the tracker, producing a fresh state positioned at the first match.
    pub fn finish(self) -> NavigationState {
        NavigationState {
            offsets: self.offsets,
            current_index: 0,
        }
    }
}
