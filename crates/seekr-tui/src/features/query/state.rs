use std::time::{Duration, Instant};

use seekr_core::api::normalize_terms;

/// Single-line query editor with debounce bookkeeping.
///
/// `cursor` is a byte offset that always sits on a char boundary.
#[derive(Debug, Default)]
pub struct QueryState {
    text: String,
    cursor: usize,
    /// Time of the last edit not yet submitted.
    edited_at: Option<Instant>,
    /// Terms of the last submitted query.
    submitted: Option<Vec<String>>,
}

impl QueryState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn terms(&self) -> Vec<String> {
        normalize_terms(&self.text)
    }

    pub fn submitted(&self) -> Option<&[String]> {
        self.submitted.as_deref()
    }

    pub fn has_pending_edit(&self) -> bool {
        self.edited_at.is_some()
    }

    pub fn insert_char(&mut self, ch: char, now: Instant) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        self.edited_at = Some(now);
    }

    /// Inserts pasted text; line breaks become spaces.
    pub fn insert_str(&mut self, s: &str, now: Instant) {
        let cleaned: String = s
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        if cleaned.is_empty() {
            return;
        }
        self.text.insert_str(self.cursor, &cleaned);
        self.cursor += cleaned.len();
        self.edited_at = Some(now);
    }

    pub fn backspace(&mut self, now: Instant) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
            self.edited_at = Some(now);
        }
    }

    pub fn delete(&mut self, now: Instant) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
            self.edited_at = Some(now);
        }
    }

    /// Deletes the word before the cursor (Ctrl+W).
    pub fn delete_word(&mut self, now: Instant) {
        let before = &self.text[..self.cursor];
        let trimmed = before.trim_end();
        let start = trimmed
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + trimmed[i..].chars().next().map_or(1, char::len_utf8));
        if start < self.cursor {
            self.text.replace_range(start..self.cursor, "");
            self.cursor = start;
            self.edited_at = Some(now);
        }
    }

    pub fn clear(&mut self, now: Instant) {
        if !self.text.is_empty() {
            self.text.clear();
            self.cursor = 0;
            self.edited_at = Some(now);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Whether the idle debounce has elapsed since the last edit.
    pub fn is_debounce_due(&self, now: Instant, debounce: Duration) -> bool {
        self.edited_at
            .is_some_and(|at| now.saturating_duration_since(at) >= debounce)
    }

    /// Consumes the pending edit and returns the terms to send.
    ///
    /// Without `force`, returns `None` when the terms equal the last submitted
    /// ones (e.g. only whitespace changed).
    pub fn take_submission(&mut self, force: bool) -> Option<Vec<String>> {
        self.edited_at = None;
        let terms = self.terms();
        if !force && self.submitted.as_ref() == Some(&terms) {
            return None;
        }
        self.submitted = Some(terms.clone());
        Some(terms)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}
