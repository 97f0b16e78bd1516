use ratatui::text::Line;
use seekr_core::api::DocumentId;
use seekr_core::highlight::{Margins, RawMatch, highlight_document};
use seekr_core::navigation::{Jump, MatchNavigator, NavigationState};

use super::surface::WrappedSurface;

/// Lines moved per mouse wheel notch.
pub const MOUSE_SCROLL_LINES: usize = 3;

/// Body of the selected document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocumentBody {
    #[default]
    Empty,
    Loading,
    Loaded(String),
    Failed(String),
}

/// Highlighted lines plus the navigation state built from the same render pass.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub lines: Vec<Line<'static>>,
    pub navigation: NavigationState,
    /// Wrap width the lines and offsets were computed for.
    pub width: usize,
}

/// Scroll position plus an optional smooth-scroll destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentScroll {
    pub top: usize,
    /// Set by match navigation; the tick handler eases `top` toward it.
    pub target: Option<usize>,
    /// Unclamped scroll position of the last jump. Near the end of the
    /// document `target` is clamped, so the next jump starts from here.
    anchor: Option<usize>,
}

#[derive(Debug, Default)]
pub struct DocumentState {
    pub id: Option<DocumentId>,
    pub url: String,
    matches: Vec<RawMatch>,
    body: DocumentBody,
    rendered: Option<RenderedDocument>,
    scroll: DocumentScroll,
    /// Text area size (excluding borders and scrollbar).
    width: usize,
    height: usize,
}

impl DocumentState {
    pub fn body(&self) -> &DocumentBody {
        &self.body
    }

    pub fn matches(&self) -> &[RawMatch] {
        &self.matches
    }

    pub fn rendered(&self) -> Option<&RenderedDocument> {
        self.rendered.as_ref()
    }

    pub fn scroll(&self) -> DocumentScroll {
        self.scroll
    }

    pub fn viewport_height(&self) -> usize {
        self.height
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.body, DocumentBody::Loading)
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.target.is_some()
    }

    /// `(current, total)` match counter; `(0, 0)` when nothing is rendered.
    pub fn counter(&self) -> (usize, usize) {
        self.rendered
            .as_ref()
            .map_or((0, 0), |r| (r.navigation.current(), r.navigation.total()))
    }

    pub fn total_lines(&self) -> usize {
        self.rendered.as_ref().map_or(0, |r| r.lines.len())
    }

    pub fn max_top(&self) -> usize {
        self.total_lines().saturating_sub(self.height)
    }

    /// Starts loading a new selection, dropping the previous document.
    pub fn begin_load(&mut self, id: DocumentId, url: String, matches: Vec<RawMatch>) {
        self.id = Some(id);
        self.url = url;
        self.matches = matches;
        self.body = DocumentBody::Loading;
        self.rendered = None;
        self.scroll = DocumentScroll::default();
    }

    pub fn finish_load(&mut self, text: String, margins: Margins) {
        self.body = DocumentBody::Loaded(text);
        self.scroll = DocumentScroll::default();
        self.rerender(margins);
    }

    pub fn fail_load(&mut self, message: String) {
        self.body = DocumentBody::Failed(message);
        self.rendered = None;
        self.scroll = DocumentScroll::default();
    }

    pub fn clear(&mut self) {
        let (width, height) = (self.width, self.height);
        *self = Self::default();
        self.width = width;
        self.height = height;
    }

    /// Updates the text area size. A width change re-wraps the document and
    /// rebuilds its offsets, then re-derives the current match from `top`.
    pub fn set_viewport(
        &mut self,
        width: usize,
        height: usize,
        margins: Margins,
        navigator: &MatchNavigator,
    ) {
        let width_changed = width != self.width;
        self.width = width;
        self.height = height;
        if width_changed && self.rendered.is_some() {
            self.rerender(margins);
            self.scroll.target = None;
            self.scroll.anchor = None;
            self.sync_navigation(navigator);
        }
        self.scroll.top = self.scroll.top.min(self.max_top());
    }

    fn rerender(&mut self, margins: Margins) {
        let DocumentBody::Loaded(text) = &self.body else {
            self.rendered = None;
            return;
        };
        let mut surface = WrappedSurface::new(self.width);
        let highlighted = highlight_document(text, &self.matches, margins, &mut surface);
        self.rendered = Some(RenderedDocument {
            lines: surface.finish(),
            navigation: highlighted.navigation,
            width: self.width,
        });
        self.scroll.top = self.scroll.top.min(self.max_top());
    }

    fn sync_navigation(&mut self, navigator: &MatchNavigator) {
        let top = self.scroll.top;
        if let Some(rendered) = self.rendered.as_mut() {
            navigator.update(&mut rendered.navigation, top);
        }
    }

    /// Scrolls by `delta` lines right away and re-derives the current match.
    pub fn scroll_by(&mut self, delta: isize, navigator: &MatchNavigator) {
        let top = self.scroll.target.unwrap_or(self.scroll.top);
        let next = top.saturating_add_signed(delta).min(self.max_top());
        self.scroll_to(next, navigator);
    }

    pub fn scroll_to(&mut self, top: usize, navigator: &MatchNavigator) {
        if self.rendered.is_none() {
            return;
        }
        self.scroll.top = top.min(self.max_top());
        self.scroll.target = None;
        self.scroll.anchor = None;
        self.sync_navigation(navigator);
    }

    pub fn page_down(&mut self, navigator: &MatchNavigator) {
        let page = self.height.saturating_sub(1).max(1);
        self.scroll_by(page as isize, navigator);
    }

    pub fn page_up(&mut self, navigator: &MatchNavigator) {
        let page = self.height.saturating_sub(1).max(1);
        self.scroll_by(-(page as isize), navigator);
    }

    /// Jumps to the next match below the fold (smoothly).
    pub fn next_match(&mut self, navigator: &MatchNavigator) -> bool {
        self.jump(navigator, MatchNavigator::next)
    }

    /// Jumps to the previous match (smoothly).
    pub fn prev_match(&mut self, navigator: &MatchNavigator) -> bool {
        self.jump(navigator, MatchNavigator::prev)
    }

    fn jump<F>(&mut self, navigator: &MatchNavigator, step: F) -> bool
    where
        F: FnOnce(&MatchNavigator, &mut NavigationState, usize) -> Option<Jump>,
    {
        let from = self.scroll.anchor.unwrap_or(self.scroll.top);
        let max_top = self.max_top();
        let Some(rendered) = self.rendered.as_mut() else {
            return false;
        };
        let Some(jump) = step(navigator, &mut rendered.navigation, from) else {
            return false;
        };
        self.scroll.anchor = Some(jump.scroll_top);
        self.scroll.target = Some(jump.scroll_top.min(max_top));
        true
    }

    /// Advances a pending smooth scroll by one step.
    ///
    /// Moves a third of the remaining distance (at least one line) so long
    /// jumps ease out. Returns whether the scroll position changed.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.scroll.target else {
            return false;
        };
        let top = self.scroll.top;
        let distance = top.abs_diff(target);
        if distance <= 1 {
            self.scroll.top = target;
            self.scroll.target = None;
            return distance > 0;
        }
        let step = distance.div_ceil(3);
        self.scroll.top = if target > top { top + step } else { top - step };
        true
    }

    /// Lines inside the viewport.
    pub fn visible_lines(&self) -> &[Line<'static>] {
        let Some(rendered) = self.rendered.as_ref() else {
            return &[];
        };
        let start = self.scroll.top.min(rendered.lines.len());
        let end = (start + self.height).min(rendered.lines.len());
        &rendered.lines[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 30 lines "line N", with a match on lines 5, 12 and 25.
    fn loaded(height: usize) -> (DocumentState, MatchNavigator) {
        let text: String = (0..30).map(|i| format!("line {i:02}\n")).collect();
        let line_len = "line 00\n".len();
        let matches = [5, 12, 25]
            .iter()
            .map(|row| RawMatch::new(row * line_len, 4))
            .collect();

        let nav = MatchNavigator::new(2);
        let mut doc = DocumentState::default();
        doc.set_viewport(40, height, Margins::new(0, 0), &nav);
        doc.begin_load(DocumentId::from("1"), "u".into(), matches);
        doc.finish_load(text, Margins::new(0, 0));
        (doc, nav)
    }

    fn settle(doc: &mut DocumentState) {
        while doc.tick() {}
    }

    #[test]
    fn test_load_builds_offsets_and_counter() {
        let (doc, _) = loaded(10);

        let rendered = doc.rendered().unwrap();
        assert_eq!(rendered.navigation.offsets(), &[5, 12, 25]);
        assert_eq!(doc.counter(), (1, 3));
        // 30 newline-terminated lines plus the empty trailing line.
        assert_eq!(doc.total_lines(), 31);
    }

    #[test]
    fn test_next_eases_to_match_minus_padding() {
        let (mut doc, nav) = loaded(10);

        assert!(doc.next_match(&nav));
        assert_eq!(doc.scroll().target, Some(3));
        settle(&mut doc);
        assert_eq!(doc.scroll().top, 3);
        assert_eq!(doc.counter(), (1, 3));

        doc.next_match(&nav);
        settle(&mut doc);
        assert_eq!(doc.scroll().top, 10);
        assert_eq!(doc.counter(), (2, 3));
    }

    #[test]
    fn test_repeated_next_continues_from_last_jump() {
        let (mut doc, nav) = loaded(10);

        doc.next_match(&nav);
        doc.next_match(&nav);

        assert_eq!(doc.scroll().target, Some(10));
        assert_eq!(doc.counter(), (2, 3));
    }

    #[test]
    fn test_target_is_clamped_to_max_scroll() {
        let (mut doc, nav) = loaded(10);
        doc.scroll_to(20, &nav);

        doc.next_match(&nav);

        assert_eq!(doc.scroll().target, Some(doc.max_top()));
        assert_eq!(doc.counter(), (3, 3));
    }

    #[test]
    fn test_next_walks_matches_on_last_screen() {
        let text: String = (0..30).map(|i| format!("line {i:02}\n")).collect();
        let line_len = "line 00\n".len();
        let matches = vec![RawMatch::new(24 * line_len, 4), RawMatch::new(27 * line_len, 4)];
        let nav = MatchNavigator::new(2);
        let mut doc = DocumentState::default();
        doc.set_viewport(40, 10, Margins::new(0, 0), &nav);
        doc.begin_load(DocumentId::from("1"), "u".into(), matches);
        doc.finish_load(text, Margins::new(0, 0));

        let mut seen = Vec::new();
        for _ in 0..3 {
            doc.next_match(&nav);
            settle(&mut doc);
            seen.push((doc.scroll().top, doc.counter()));
        }

        assert_eq!(doc.max_top(), 21);
        assert_eq!(seen, vec![(21, (1, 2)), (21, (2, 2)), (21, (2, 2))]);

        doc.prev_match(&nav);
        settle(&mut doc);
        assert_eq!(doc.counter(), (1, 2));
    }

    #[test]
    fn test_prev_walks_back() {
        let (mut doc, nav) = loaded(10);
        doc.scroll_to(21, &nav);

        doc.prev_match(&nav);
        settle(&mut doc);

        assert_eq!(doc.scroll().top, 10);
        assert_eq!(doc.counter(), (2, 3));
    }

    #[test]
    fn test_manual_scroll_updates_current_and_cancels_target() {
        let (mut doc, nav) = loaded(10);
        doc.next_match(&nav);

        doc.scroll_to(6, &nav);

        assert!(!doc.is_animating());
        assert_eq!(doc.scroll().top, 6);
        // First offset past 6 + 2 is 12.
        assert_eq!(doc.counter(), (2, 3));
    }

    #[test]
    fn test_newer_target_replaces_older_one() {
        let (mut doc, nav) = loaded(10);
        doc.scroll_to(21, &nav);
        doc.prev_match(&nav);
        doc.tick();

        doc.next_match(&nav);

        let target = doc.scroll().target.unwrap();
        settle(&mut doc);
        assert_eq!(doc.scroll().top, target);
    }

    #[test]
    fn test_width_change_rebuilds_offsets() {
        let (mut doc, nav) = loaded(10);

        // "line NN" is 7 columns; at width 4 every line wraps once.
        doc.set_viewport(4, 10, Margins::new(0, 0), &nav);

        let rendered = doc.rendered().unwrap();
        assert_eq!(rendered.width, 4);
        assert_eq!(rendered.navigation.offsets(), &[10, 24, 50]);
    }

    #[test]
    fn test_begin_load_drops_previous_navigation() {
        let (mut doc, _) = loaded(10);

        doc.begin_load(DocumentId::from("2"), "u2".into(), vec![]);

        assert!(doc.is_loading());
        assert!(doc.rendered().is_none());
        assert_eq!(doc.counter(), (0, 0));
    }

    #[test]
    fn test_zero_matches_navigation_is_noop() {
        let nav = MatchNavigator::new(2);
        let mut doc = DocumentState::default();
        doc.set_viewport(40, 10, Margins::default(), &nav);
        doc.begin_load(DocumentId::from("1"), "u".into(), vec![]);
        doc.finish_load("plain text".into(), Margins::default());

        assert!(!doc.next_match(&nav));
        assert!(!doc.prev_match(&nav));
        assert_eq!(doc.counter(), (0, 0));
    }
}
