//! Reducer: the single place where `AppState` changes.
//!
//! `update` takes an event, mutates state, and returns effects for the
//! runtime to execute. It performs no I/O.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use seekr_core::api::{DocumentId, SearchError, SearchErrorKind, SearchResults};
use seekr_core::highlight::RawMatch;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskKind, TaskMeta};
use crate::document::{MOUSE_SCROLL_LINES, text_area};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::query::{QueryAction, handle_query_key};
use crate::render::PaneLayout;
use crate::results::{ENTRY_HEIGHT, first_visible};
use crate::state::{AppState, Focus};
use crate::statusline::RetryRequest;

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => handle_tick(app, Instant::now()),
        UiEvent::Frame { width, height } => {
            handle_frame(app, width, height);
            vec![]
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "dropping stale task result");
                vec![]
            }
        }
        UiEvent::SearchFinished { terms, result } => handle_search_finished(app, terms, result),
        UiEvent::DocumentLoaded { id, result } => {
            handle_document_loaded(app, id, result);
            vec![]
        }
        UiEvent::Cancelled => vec![],
    }
}

/// Advances animations and fires the debounced query once the user pauses.
pub(crate) fn handle_tick(app: &mut AppState, now: Instant) -> Vec<UiEffect> {
    app.spinner_frame = app.spinner_frame.wrapping_add(1);
    app.document.tick();
    if app.query.is_debounce_due(now, app.settings.debounce) {
        return submit_query(app, false);
    }
    vec![]
}

fn handle_frame(app: &mut AppState, width: u16, height: u16) {
    app.layout = PaneLayout::compute(Rect::new(0, 0, width, height));
    let text = text_area(app.layout.document);
    app.document.set_viewport(
        text.width as usize,
        text.height as usize,
        app.settings.margins,
        &app.settings.navigator,
    );
}

// ============================================================================
// Requests
// ============================================================================

fn cancel(token: Option<CancellationToken>) -> Option<UiEffect> {
    token.map(|token| UiEffect::CancelTask { token: Some(token) })
}

/// Sends the current terms, or clears everything when the query is empty.
fn submit_query(app: &mut AppState, force: bool) -> Vec<UiEffect> {
    let Some(terms) = app.query.take_submission(force) else {
        return vec![];
    };
    if terms.is_empty() {
        let mut effects: Vec<UiEffect> = cancel(app.tasks.search.clear()).into_iter().collect();
        effects.extend(close_document(app));
        app.results.clear();
        app.status.clear_error();
        return effects;
    }
    start_search(app, terms)
}

fn start_search(app: &mut AppState, terms: Vec<String>) -> Vec<UiEffect> {
    let task = app.task_seq.next_id();
    let previous = app.tasks.search.claim(
        task,
        TaskMeta::Search {
            terms: terms.clone(),
        },
    );
    tracing::debug!(?terms, id = task.0, "submitting query");

    let mut effects: Vec<UiEffect> = cancel(previous).into_iter().collect();
    effects.push(UiEffect::Search { task, terms });
    effects
}

fn load_selected(app: &mut AppState) -> Vec<UiEffect> {
    let Some(hit) = app.results.selected_hit() else {
        return vec![];
    };
    let (id, url, matches) = (hit.id.clone(), hit.url.clone(), hit.matches.clone());
    start_document(app, id, url, matches)
}

fn start_document(
    app: &mut AppState,
    id: DocumentId,
    url: String,
    matches: Vec<RawMatch>,
) -> Vec<UiEffect> {
    let task = app.task_seq.next_id();
    let previous = app
        .tasks
        .document
        .claim(task, TaskMeta::Document { id: id.clone() });
    app.document.begin_load(id.clone(), url, matches);

    let mut effects: Vec<UiEffect> = cancel(previous).into_iter().collect();
    effects.push(UiEffect::FetchDocument { task, id });
    effects
}

/// Loads the selected result when the document pane gains focus showing something else.
fn load_if_stale(app: &mut AppState) -> Vec<UiEffect> {
    if app.focus != Focus::Document {
        return vec![];
    }
    let selected = app.results.selected_entry().map(|entry| &entry.id);
    if selected.is_none() || selected == app.document.id.as_ref() {
        return vec![];
    }
    load_selected(app)
}

fn close_document(app: &mut AppState) -> Option<UiEffect> {
    app.document.clear();
    if app.focus == Focus::Document {
        app.focus = Focus::Results;
    }
    cancel(app.tasks.document.clear())
}

fn retry(app: &mut AppState) -> Vec<UiEffect> {
    match app.status.take_retry() {
        Some(RetryRequest::Search { terms }) => start_search(app, terms),
        Some(RetryRequest::Document { id }) if app.document.id.as_ref() == Some(&id) => {
            let url = app.document.url.clone();
            let matches = app.document.matches().to_vec();
            start_document(app, id, url, matches)
        }
        _ => vec![],
    }
}

// ============================================================================
// Results
// ============================================================================

fn handle_search_finished(
    app: &mut AppState,
    terms: Vec<String>,
    result: Result<SearchResults, SearchError>,
) -> Vec<UiEffect> {
    match result {
        Ok(results) => {
            tracing::info!(?terms, hits = results.len(), "search finished");
            app.status.clear_error();
            app.results.replace(results);
            close_document(app).into_iter().collect()
        }
        Err(err) if err.kind == SearchErrorKind::MalformedResponse => {
            tracing::warn!(?terms, error = %err, details = ?err.details, "malformed search response");
            app.status
                .set_error("Search failed", &err, RetryRequest::Search { terms });
            app.results.replace(SearchResults::default());
            close_document(app).into_iter().collect()
        }
        Err(err) => {
            tracing::warn!(?terms, kind = %err.kind, error = %err, "search failed");
            app.status
                .set_error("Search failed", &err, RetryRequest::Search { terms });
            app.results.mark_failed();
            vec![]
        }
    }
}

fn handle_document_loaded(app: &mut AppState, id: DocumentId, result: Result<String, SearchError>) {
    if app.document.id.as_ref() != Some(&id) {
        return;
    }
    match result {
        Ok(text) => {
            tracing::debug!(%id, bytes = text.len(), "document loaded");
            app.status.clear_error();
            app.document.finish_load(text, app.settings.margins);
        }
        Err(err) => {
            tracing::warn!(%id, kind = %err.kind, error = %err, "document fetch failed");
            app.document
                .fail_load(format!("Failed to load document: {err}"));
            app.status
                .set_error("Document failed", &err, RetryRequest::Document { id });
        }
    }
}

// ============================================================================
// Terminal input
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            app.focus = Focus::Query;
            app.query.insert_str(&text, Instant::now());
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => return vec![UiEffect::Quit],
        KeyCode::Char('r') if ctrl => return retry(app),
        KeyCode::Char('n') if ctrl => {
            app.document.next_match(&app.settings.navigator);
            return vec![];
        }
        KeyCode::Char('p') if ctrl => {
            app.document.prev_match(&app.settings.navigator);
            return vec![];
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return load_if_stale(app);
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return vec![];
        }
        KeyCode::Esc => return handle_escape(app),
        _ => {}
    }

    match app.focus {
        Focus::Query => handle_query_focus(app, key),
        Focus::Results => handle_results_key(app, key),
        Focus::Document => {
            handle_document_key(app, key);
            vec![]
        }
    }
}

/// Esc steps back to the query, then clears it, then quits.
fn handle_escape(app: &mut AppState) -> Vec<UiEffect> {
    if app.focus != Focus::Query {
        app.focus = Focus::Query;
        vec![]
    } else if !app.query.text().is_empty() {
        app.query.clear(Instant::now());
        vec![]
    } else {
        vec![UiEffect::Quit]
    }
}

fn handle_query_focus(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match handle_query_key(&mut app.query, key, Instant::now()) {
        QueryAction::None | QueryAction::Edited => vec![],
        QueryAction::Submit => submit_query(app, true),
        QueryAction::FocusResults => {
            if !app.results.is_empty() {
                app.focus = Focus::Results;
            }
            vec![]
        }
    }
}

fn handle_results_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.results.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.results.select_next(),
        KeyCode::Home | KeyCode::Char('g') => app.results.select(0),
        KeyCode::End | KeyCode::Char('G') => {
            app.results.select(app.results.len().saturating_sub(1));
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            let effects = load_selected(app);
            if !effects.is_empty() {
                app.focus = Focus::Document;
            }
            return effects;
        }
        KeyCode::Char('/') => app.focus = Focus::Query,
        // Typing anywhere else goes back to the query.
        KeyCode::Char(ch) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            app.focus = Focus::Query;
            app.query.insert_char(ch, Instant::now());
        }
        _ => {}
    }
    vec![]
}

fn handle_document_key(app: &mut AppState, key: KeyEvent) {
    let nav = &app.settings.navigator;
    let doc = &mut app.document;
    match key.code {
        KeyCode::Char('n') => {
            doc.next_match(nav);
        }
        KeyCode::Char('N') => {
            doc.prev_match(nav);
        }
        KeyCode::Down | KeyCode::Char('j') => doc.scroll_by(1, nav),
        KeyCode::Up | KeyCode::Char('k') => doc.scroll_by(-1, nav),
        KeyCode::PageDown | KeyCode::Char(' ') => doc.page_down(nav),
        KeyCode::PageUp => doc.page_up(nav),
        KeyCode::Home | KeyCode::Char('g') => doc.scroll_to(0, nav),
        KeyCode::End | KeyCode::Char('G') => doc.scroll_to(doc.max_top(), nav),
        KeyCode::Left | KeyCode::Char('h') => app.focus = Focus::Results,
        KeyCode::Char('/') => app.focus = Focus::Query,
        _ => {}
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    let at = Position::new(mouse.column, mouse.row);
    let layout = app.layout;

    if layout.document.contains(at) {
        let nav = &app.settings.navigator;
        match mouse.kind {
            MouseEventKind::ScrollDown => app.document.scroll_by(MOUSE_SCROLL_LINES as isize, nav),
            MouseEventKind::ScrollUp => {
                app.document.scroll_by(-(MOUSE_SCROLL_LINES as isize), nav);
            }
            MouseEventKind::Down(MouseButton::Left) => app.focus = Focus::Document,
            _ => {}
        }
        return vec![];
    }

    if layout.results.contains(at) {
        match mouse.kind {
            MouseEventKind::ScrollDown => app.results.select_next(),
            MouseEventKind::ScrollUp => app.results.select_prev(),
            MouseEventKind::Down(MouseButton::Left) => {
                app.focus = Focus::Results;
                if let Some(index) = result_at(app, layout.results, at.y) {
                    app.results.select(index);
                    return load_selected(app);
                }
            }
            _ => {}
        }
        return vec![];
    }

    if layout.query.contains(at) && mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.focus = Focus::Query;
    }
    vec![]
}

/// Index of the result row under screen row `y`.
fn result_at(app: &AppState, area: Rect, y: u16) -> Option<usize> {
    let inner_top = area.y + 1;
    let inner_height = area.height.saturating_sub(2) as usize;
    if y < inner_top || (y - inner_top) as usize >= inner_height {
        return None;
    }
    let first = first_visible(app.results.selected_index(), inner_height / ENTRY_HEIGHT);
    let index = first + (y - inner_top) as usize / ENTRY_HEIGHT;
    (index < app.results.len()).then_some(index)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use seekr_core::api::SearchHit;
    use seekr_core::config::Config;

    use super::*;
    use crate::common::{TaskCompleted, TaskId};
    use crate::document::DocumentBody;

    fn app() -> AppState {
        let mut app = AppState::new(&Config::default());
        update(
            &mut app,
            UiEvent::Frame {
                width: 100,
                height: 30,
            },
        );
        app
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(ch: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            update(app, key(KeyCode::Char(ch)));
        }
    }

    fn search_task(effects: &[UiEffect]) -> Option<(TaskId, Vec<String>)> {
        effects.iter().find_map(|e| match e {
            UiEffect::Search { task, terms } => Some((*task, terms.clone())),
            _ => None,
        })
    }

    fn document_task(effects: &[UiEffect]) -> Option<(TaskId, DocumentId)> {
        effects.iter().find_map(|e| match e {
            UiEffect::FetchDocument { task, id } => Some((*task, id.clone())),
            _ => None,
        })
    }

    fn hit(id: &str, text_matches: &[(usize, usize)]) -> SearchHit {
        SearchHit {
            id: DocumentId::from(id),
            url: format!("https://example.com/{id}"),
            snippet: format!("snippet for (((doc))) {id}"),
            matches: text_matches
                .iter()
                .map(|&(p, l)| RawMatch::new(p, l))
                .collect(),
        }
    }

    fn results(ids: &[&str]) -> SearchResults {
        SearchResults {
            hits: ids.iter().map(|id| hit(id, &[(0, 3)])).collect(),
        }
    }

    fn complete_search(
        app: &mut AppState,
        task: TaskId,
        terms: Vec<String>,
        result: Result<SearchResults, SearchError>,
    ) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Search,
                completed: TaskCompleted {
                    id: task,
                    result: Box::new(UiEvent::SearchFinished { terms, result }),
                },
            },
        )
    }

    fn complete_document(
        app: &mut AppState,
        task: TaskId,
        id: DocumentId,
        result: Result<String, SearchError>,
    ) {
        update(
            app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Document,
                completed: TaskCompleted {
                    id: task,
                    result: Box::new(UiEvent::DocumentLoaded { id, result }),
                },
            },
        );
    }

    /// Types `text`, presses Enter, and answers the query with `ids`.
    fn search_with(app: &mut AppState, text: &str, ids: &[&str]) {
        type_text(app, text);
        let effects = update(app, key(KeyCode::Enter));
        let (task, terms) = search_task(&effects).unwrap();
        complete_search(app, task, terms, Ok(results(ids)));
    }

    #[test]
    fn test_typing_waits_for_debounce() {
        let mut app = app();
        type_text(&mut app, "fox");

        assert!(handle_tick(&mut app, Instant::now()).is_empty());

        let later = Instant::now() + app.settings.debounce + Duration::from_millis(1);
        let effects = handle_tick(&mut app, later);
        let (_, terms) = search_task(&effects).unwrap();
        assert_eq!(terms, vec!["fox"]);
        assert!(app.tasks.search.is_running());
    }

    #[test]
    fn test_whitespace_edit_does_not_requery() {
        let mut app = app();
        search_with(&mut app, "fox", &["1"]);

        type_text(&mut app, " ");
        let later = Instant::now() + app.settings.debounce + Duration::from_millis(1);

        assert!(handle_tick(&mut app, later).is_empty());
    }

    #[test]
    fn test_enter_resubmits_same_terms() {
        let mut app = app();
        search_with(&mut app, "fox", &["1"]);

        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(search_task(&effects).is_some());
    }

    #[test]
    fn test_empty_query_clears_without_request() {
        let mut app = app();
        search_with(&mut app, "fox", &["1", "2"]);
        assert_eq!(app.results.len(), 2);

        update(&mut app, ctrl('u'));
        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(search_task(&effects).is_none());
        assert!(app.results.is_empty());
        assert!(!app.results.has_searched());
    }

    #[test]
    fn test_superseded_search_result_is_dropped() {
        let mut app = app();
        type_text(&mut app, "a");
        let (first, _) = search_task(&update(&mut app, key(KeyCode::Enter))).unwrap();
        type_text(&mut app, "b");
        let effects = update(&mut app, key(KeyCode::Enter));
        let (second, terms) = search_task(&effects).unwrap();

        complete_search(&mut app, first, vec!["a".into()], Ok(results(&["old"])));
        assert!(!app.results.has_searched());
        assert!(app.tasks.search.is_running());

        complete_search(&mut app, second, terms, Ok(results(&["new"])));
        assert_eq!(app.results.selected_entry().unwrap().id.as_str(), "new");
        assert!(!app.tasks.search.is_running());
    }

    #[test]
    fn test_network_failure_keeps_results_and_retries() {
        let mut app = app();
        search_with(&mut app, "fox", &["1"]);

        type_text(&mut app, "es");
        let (task, terms) = search_task(&update(&mut app, key(KeyCode::Enter))).unwrap();
        let err = SearchError::new(SearchErrorKind::Network, "Connection refused");
        complete_search(&mut app, task, terms, Err(err));

        assert_eq!(app.results.len(), 1);
        assert!(app.status.error().unwrap().retry.is_some());

        let effects = update(&mut app, ctrl('r'));
        let (_, terms) = search_task(&effects).unwrap();
        assert_eq!(terms, vec!["foxes"]);
        assert!(app.status.error().is_none());
    }

    #[test]
    fn test_first_failure_shows_no_results() {
        let mut app = app();
        type_text(&mut app, "fox");
        let (task, terms) = search_task(&update(&mut app, key(KeyCode::Enter))).unwrap();
        let err = SearchError::new(SearchErrorKind::Timeout, "Request timed out");

        complete_search(&mut app, task, terms, Err(err));

        assert!(app.results.is_empty());
        assert!(app.results.has_searched());
    }

    #[test]
    fn test_malformed_response_means_zero_results() {
        let mut app = app();
        search_with(&mut app, "fox", &["1"]);

        type_text(&mut app, "es");
        let (task, terms) = search_task(&update(&mut app, key(KeyCode::Enter))).unwrap();
        complete_search(
            &mut app,
            task,
            terms,
            Err(SearchError::malformed("expected value")),
        );

        assert!(app.results.is_empty());
        assert!(app.status.error().unwrap().retry.is_none());
        assert!(update(&mut app, ctrl('r')).is_empty());
    }

    #[test]
    fn test_open_document_and_navigate_matches() {
        let mut app = app();
        type_text(&mut app, "fox");
        let (task, terms) = search_task(&update(&mut app, key(KeyCode::Enter))).unwrap();
        let body = format!("fox{}fox", "\n".repeat(80));
        complete_search(
            &mut app,
            task,
            terms,
            Ok(SearchResults {
                hits: vec![hit("7", &[(0, 3), (83, 3)])],
            }),
        );

        update(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Results);
        let effects = update(&mut app, key(KeyCode::Enter));
        let (task, id) = document_task(&effects).unwrap();
        assert_eq!(id.as_str(), "7");
        assert_eq!(app.focus, Focus::Document);
        assert!(app.document.is_loading());

        complete_document(&mut app, task, id, Ok(body));
        assert_eq!(app.document.counter(), (1, 2));

        update(&mut app, key(KeyCode::Char('n')));
        assert!(app.document.scroll().target.is_some());
        assert_eq!(app.document.counter(), (2, 2));
    }

    #[test]
    fn test_tab_into_document_loads_selection() {
        let mut app = app();
        search_with(&mut app, "fox", &["7"]);
        update(&mut app, key(KeyCode::Tab));

        let effects = update(&mut app, key(KeyCode::Tab));

        assert_eq!(app.focus, Focus::Document);
        assert_eq!(document_task(&effects).unwrap().1.as_str(), "7");
        assert!(update(&mut app, key(KeyCode::BackTab)).is_empty());
        assert!(document_task(&update(&mut app, key(KeyCode::Tab))).is_none());
    }

    #[test]
    fn test_document_failure_offers_retry() {
        let mut app = app();
        search_with(&mut app, "fox", &["7"]);
        update(&mut app, key(KeyCode::Tab));
        let (task, id) = document_task(&update(&mut app, key(KeyCode::Enter))).unwrap();

        let err = SearchError::http_status(500, "boom");
        complete_document(&mut app, task, id, Err(err));

        assert!(matches!(app.document.body(), DocumentBody::Failed(_)));
        let effects = update(&mut app, ctrl('r'));
        let (_, id) = document_task(&effects).unwrap();
        assert_eq!(id.as_str(), "7");
        assert!(app.document.is_loading());
    }

    #[test]
    fn test_new_results_discard_document() {
        let mut app = app();
        search_with(&mut app, "fox", &["7"]);
        update(&mut app, key(KeyCode::Tab));
        let (task, id) = document_task(&update(&mut app, key(KeyCode::Enter))).unwrap();
        complete_document(&mut app, task, id, Ok("fox".into()));
        assert!(app.document.rendered().is_some());

        update(&mut app, key(KeyCode::Char('/')));
        search_with(&mut app, "es", &["8"]);

        assert_eq!(app.document.body(), &DocumentBody::Empty);
        assert!(app.document.id.is_none());
    }

    #[test]
    fn test_stale_document_is_ignored() {
        let mut app = app();
        search_with(&mut app, "fox", &["1", "2"]);
        update(&mut app, key(KeyCode::Tab));
        let (first, first_id) = document_task(&update(&mut app, key(KeyCode::Enter))).unwrap();
        update(&mut app, key(KeyCode::Left));
        update(&mut app, key(KeyCode::Down));
        let (second, second_id) = document_task(&update(&mut app, key(KeyCode::Enter))).unwrap();

        complete_document(&mut app, first, first_id, Ok("old".into()));
        assert!(app.document.is_loading());

        complete_document(&mut app, second, second_id, Ok("new".into()));
        assert_eq!(app.document.body(), &DocumentBody::Loaded("new".into()));
    }

    #[test]
    fn test_mouse_wheel_scrolls_document() {
        let mut app = app();
        search_with(&mut app, "fox", &["7"]);
        update(&mut app, key(KeyCode::Tab));
        let (task, id) = document_task(&update(&mut app, key(KeyCode::Enter))).unwrap();
        complete_document(&mut app, task, id, Ok("line\n".repeat(100)));

        let doc = app.layout.document;
        update(
            &mut app,
            UiEvent::Terminal(Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: doc.x + 2,
                row: doc.y + 2,
                modifiers: KeyModifiers::NONE,
            })),
        );

        assert_eq!(app.document.scroll().top, MOUSE_SCROLL_LINES);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        update(&mut app, UiEvent::Terminal(Event::Key(release)));

        assert_eq!(app.query.text(), "");
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let mut app = app();
        type_text(&mut app, "fox");

        assert!(update(&mut app, key(KeyCode::Esc)).is_empty());
        assert_eq!(app.query.text(), "");
        assert!(matches!(
            update(&mut app, key(KeyCode::Esc)).as_slice(),
            [UiEffect::Quit]
        ));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        assert!(matches!(
            update(&mut app, ctrl('c')).as_slice(),
            [UiEffect::Quit]
        ));
    }
}
