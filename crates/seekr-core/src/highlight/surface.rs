use super::render::Segment;

/// A rendering surface that segments are laid out on, top to bottom.
///
/// `append` returns the vertical offset (row) of the segment's first
/// character, relative to the surface's own origin.
pub trait Surface {
    fn append(&mut self, segment: &Segment<'_>) -> usize;
}

/// Surface with unbounded width: rows advance only on `'\n'`.
#[derive(Debug, Clone, Default)]
pub struct LineSurface {
    row: usize,
}

impl LineSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows laid out so far (a trailing partial row counts).
    pub fn height(&self) -> usize {
        self.row + 1
    }
}

impl Surface for LineSurface {
    fn append(&mut self, segment: &Segment<'_>) -> usize {
        let offset = self.row;
        self.row += segment.text.matches('\n').count();
        offset
    }
}
