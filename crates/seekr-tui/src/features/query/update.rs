use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::QueryState;

/// What the reducer should do after a key reached the query editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryAction {
    None,
    /// Text changed; the debounce timer restarted.
    Edited,
    /// Submit now, even if the terms did not change.
    Submit,
    /// Move focus to the results list.
    FocusResults,
}

pub fn handle_query_key(query: &mut QueryState, key: KeyEvent, now: Instant) -> QueryAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => QueryAction::Submit,
        KeyCode::Down | KeyCode::Tab => QueryAction::FocusResults,
        KeyCode::Char('u') if ctrl => {
            query.clear(now);
            QueryAction::Edited
        }
        KeyCode::Char('w') if ctrl => {
            query.delete_word(now);
            QueryAction::Edited
        }
        KeyCode::Char('a') if ctrl => {
            query.move_home();
            QueryAction::None
        }
        KeyCode::Char('e') if ctrl => {
            query.move_end();
            QueryAction::None
        }
        KeyCode::Char(ch) if !ctrl => {
            query.insert_char(ch, now);
            QueryAction::Edited
        }
        KeyCode::Backspace => {
            query.backspace(now);
            QueryAction::Edited
        }
        KeyCode::Delete => {
            query.delete(now);
            QueryAction::Edited
        }
        KeyCode::Left => {
            query.move_left();
            QueryAction::None
        }
        KeyCode::Right => {
            query.move_right();
            QueryAction::None
        }
        KeyCode::Home => {
            query.move_home();
            QueryAction::None
        }
        KeyCode::End => {
            query.move_end();
            QueryAction::None
        }
        _ => QueryAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_edits_and_enter_submits() {
        let mut q = QueryState::default();
        let now = Instant::now();

        assert_eq!(
            handle_query_key(&mut q, key(KeyCode::Char('x')), now),
            QueryAction::Edited
        );
        assert_eq!(q.text(), "x");
        assert_eq!(
            handle_query_key(&mut q, key(KeyCode::Enter), now),
            QueryAction::Submit
        );
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut q = QueryState::default();
        let now = Instant::now();
        q.insert_str("quick fox", now);

        let action = handle_query_key(
            &mut q,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            now,
        );

        assert_eq!(action, QueryAction::Edited);
        assert!(q.text().is_empty());
    }
}
