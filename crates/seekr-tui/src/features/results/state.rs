use seekr_core::api::{ResultEntry, SearchHit, SearchResults, build_result_entries};

/// Ranked results of the last successful query plus the list selection.
#[derive(Debug, Default)]
pub struct ResultsState {
    results: SearchResults,
    entries: Vec<ResultEntry>,
    selected: usize,
    /// Whether any query has completed (successfully or not) since the last clear.
    searched: bool,
}

impl ResultsState {
    /// Replaces the result set; the selection returns to the top.
    pub fn replace(&mut self, results: SearchResults) {
        self.entries = build_result_entries(&results);
        self.results = results;
        self.selected = 0;
        self.searched = true;
    }

    /// Records a failed query. Prior results stay visible.
    pub fn mark_failed(&mut self) {
        self.searched = true;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_searched(&self) -> bool {
        self.searched
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&ResultEntry> {
        self.entries.get(self.selected)
    }

    /// The full hit (with match spans) behind the selected row.
    pub fn selected_hit(&self) -> Option<&SearchHit> {
        let entry = self.selected_entry()?;
        self.results.get(&entry.id)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select(&mut self, index: usize) {
        if index < self.entries.len() {
            self.selected = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use seekr_core::api::DocumentId;
    use seekr_core::highlight::RawMatch;

    use super::*;

    fn results(ids: &[&str]) -> SearchResults {
        SearchResults {
            hits: ids
                .iter()
                .map(|id| SearchHit {
                    id: DocumentId::from(*id),
                    url: format!("https://example.com/{id}"),
                    snippet: String::new(),
                    matches: vec![RawMatch::new(0, 1)],
                })
                .collect(),
        }
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = ResultsState::default();
        state.replace(results(&["a", "b"]));

        state.select_prev();
        assert_eq!(state.selected_index(), 0);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_index(), 1);
        assert_eq!(state.selected_hit().unwrap().id.as_str(), "b");
    }

    #[test]
    fn test_replace_resets_selection() {
        let mut state = ResultsState::default();
        state.replace(results(&["a", "b"]));
        state.select_next();

        state.replace(results(&["c"]));

        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_failed_first_query_is_searched_but_empty() {
        let mut state = ResultsState::default();
        state.mark_failed();
        assert!(state.has_searched());
        assert!(state.is_empty());
    }
}
