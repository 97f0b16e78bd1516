use serde::{Deserialize, Serialize};

/// A match location reported by the search service for one document.
///
/// Serialized as a two-element array `[position, length]`, which is the
/// shape the service uses in its `matches` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct RawMatch {
    /// Byte offset of the match start.
    pub position: usize,
    /// Length of the match in bytes.
    pub length: usize,
}

impl RawMatch {
    pub fn new(position: usize, length: usize) -> Self {
        Self { position, length }
    }

    /// Exclusive end offset (saturating).
    pub fn end(&self) -> usize {
        self.position.saturating_add(self.length)
    }
}

impl From<(usize, usize)> for RawMatch {
    fn from((position, length): (usize, usize)) -> Self {
        Self { position, length }
    }
}

impl From<RawMatch> for (usize, usize) {
    fn from(m: RawMatch) -> Self {
        (m.position, m.length)
    }
}

/// A raw match widened to word boundaries plus context margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplaySpan {
    pub start: usize,
    pub end: usize,
}

impl DisplaySpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Orders matches by position, then by length.
///
/// Duplicates and overlaps are kept; the renderer resolves them.
pub fn normalize_matches(matches: &[RawMatch]) -> Vec<RawMatch> {
    let mut sorted = matches.to_vec();
    sorted.sort_by_key(|m| (m.position, m.length));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sorts_by_position_then_length() {
        let input = [
            RawMatch::new(40, 3),
            RawMatch::new(5, 9),
            RawMatch::new(5, 2),
            RawMatch::new(20, 1),
        ];
        let sorted = normalize_matches(&input);
        assert_eq!(
            sorted,
            vec![
                RawMatch::new(5, 2),
                RawMatch::new(5, 9),
                RawMatch::new(20, 1),
                RawMatch::new(40, 3),
            ]
        );
    }

    #[test]
    fn test_normalize_keeps_duplicates() {
        let input = [RawMatch::new(7, 4), RawMatch::new(7, 4)];
        assert_eq!(normalize_matches(&input).len(), 2);
    }

    #[test]
    fn test_raw_match_deserializes_from_pair() {
        let parsed: Vec<RawMatch> = serde_json::from_str("[[3, 4], [10, 2]]").unwrap();
        assert_eq!(parsed, vec![RawMatch::new(3, 4), RawMatch::new(10, 2)]);
    }

    #[test]
    fn test_end_saturates() {
        assert_eq!(RawMatch::new(usize::MAX, 5).end(), usize::MAX);
    }
}
