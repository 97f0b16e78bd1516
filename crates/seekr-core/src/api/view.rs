//! Presentation mapping for search results.

use super::types::{DocumentId, SearchResults};

const MARK_OPEN: &str = "(((";
const MARK_CLOSE: &str = ")))";

/// Piece of a snippet; `marked` pieces were wrapped in `(((...)))` by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetPart {
    pub text: String,
    pub marked: bool,
}

impl SnippetPart {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            marked: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            marked: true,
        }
    }
}

/// One row of the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub id: DocumentId,
    pub url: String,
    pub snippet: Vec<SnippetPart>,
    /// Number of match spans the service reported for the document.
    pub match_count: usize,
}

impl ResultEntry {
    /// Snippet text with markers stripped.
    pub fn snippet_text(&self) -> String {
        self.snippet.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Maps a search response to list rows, preserving score order.
pub fn build_result_entries(results: &SearchResults) -> Vec<ResultEntry> {
    results
        .hits
        .iter()
        .map(|hit| ResultEntry {
            id: hit.id.clone(),
            url: hit.url.clone(),
            snippet: parse_snippet(&hit.snippet),
            match_count: hit.matches.len(),
        })
        .collect()
}

/// Splits a snippet on `(((term)))` markers.
///
/// An opening marker without a matching close is kept as literal text.
/// Whitespace runs (including newlines) collapse to single spaces.
pub fn parse_snippet(snippet: &str) -> Vec<SnippetPart> {
    let collapsed = snippet.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut parts = Vec::new();
    let mut rest = collapsed.as_str();

    while let Some(open) = rest.find(MARK_OPEN) {
        let inner_start = open + MARK_OPEN.len();
        let Some(close) = rest[inner_start..].find(MARK_CLOSE) else {
            break;
        };
        let inner_end = inner_start + close;
        if open > 0 {
            parts.push(SnippetPart::plain(&rest[..open]));
        }
        if inner_end > inner_start {
            parts.push(SnippetPart::marked(&rest[inner_start..inner_end]));
        }
        rest = &rest[inner_end + MARK_CLOSE.len()..];
    }
    if !rest.is_empty() {
        parts.push(SnippetPart::plain(rest));
    }
    parts
}
