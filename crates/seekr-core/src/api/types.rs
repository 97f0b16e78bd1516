//! Wire types for the search service and their validated form.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{SearchError, SearchResult};
use crate::highlight::RawMatch;

/// Identifier of a document in the search index.
///
/// The service keys JSON objects by id, so ids are carried as strings even
/// when `scores` lists them as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One ranked document from a search response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: DocumentId,
    pub url: String,
    /// Server-side snippet; may contain `(((term)))` markers.
    pub snippet: String,
    /// Match spans into the full document body.
    pub matches: Vec<RawMatch>,
}

/// Validated search response, hits in score order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn get(&self, id: &DocumentId) -> Option<&SearchHit> {
        self.hits.iter().find(|hit| &hit.id == id)
    }
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    text: HashMap<String, Value>,
    #[serde(default)]
    matches: HashMap<String, Vec<RawMatch>>,
    scores: Vec<Value>,
}

/// Parses and validates a search response body.
///
/// Missing top-level fields are a `MalformedResponse`. Individual entries that
/// are scored but absent from `text` (or unreadable) are skipped.
pub fn parse_search_response(body: &str) -> SearchResult<SearchResults> {
    let wire: WireResponse = serde_json::from_str(body).map_err(|e| {
        SearchError::malformed(format!("Invalid search response: {e}"))
            .with_details(truncate(body, 512))
    })?;

    let mut hits = Vec::with_capacity(wire.scores.len());
    for score in &wire.scores {
        let Some(id) = id_from_value(score) else {
            tracing::warn!(%score, "skipping non-scalar document id");
            continue;
        };
        let Some(entry) = wire.text.get(id.as_str()) else {
            tracing::debug!(%id, "scored document missing from text map");
            continue;
        };
        let Some((url, snippet)) = entry_parts(entry) else {
            tracing::warn!(%id, "skipping unreadable text entry");
            continue;
        };
        let matches = wire.matches.get(id.as_str()).cloned().unwrap_or_default();
        hits.push(SearchHit {
            id,
            url,
            snippet,
            matches,
        });
    }

    Ok(SearchResults { hits })
}

fn id_from_value(value: &Value) -> Option<DocumentId> {
    match value {
        Value::String(s) => Some(DocumentId(s.clone())),
        Value::Number(n) => Some(DocumentId(n.to_string())),
        _ => None,
    }
}

/// `[url, snippet]` where the snippet is a string or a list of highlight strings.
fn entry_parts(entry: &Value) -> Option<(String, String)> {
    let parts = entry.as_array()?;
    let url = parts.first()?.as_str()?.to_string();
    let snippet = match parts.get(1) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" … "),
        Some(_) => return None,
    };
    Some((url, snippet))
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &s[..end])
}
