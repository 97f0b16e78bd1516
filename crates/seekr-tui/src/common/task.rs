use seekr_core::api::DocumentId;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Search,
    Document,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskMeta {
    #[default]
    None,
    Search {
        terms: Vec<String>,
    },
    Document {
        id: DocumentId,
    },
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
    pub meta: TaskMeta,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
///
/// `active` is claimed by the reducer when it emits the effect, so a result
/// from a superseded request is rejected even if it lands before the new
/// task's `TaskStarted`.
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
    pub meta: TaskMeta,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Marks `id` as the only task whose result will be accepted.
    ///
    /// Returns the previous task's cancel token, if any.
    pub fn claim(&mut self, id: TaskId, meta: TaskMeta) -> Option<CancellationToken> {
        let previous = self.cancel.take();
        self.active = Some(id);
        self.meta = meta;
        previous
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        if self.active == Some(started.id) {
            self.cancel = started.cancel.clone();
            self.meta = started.meta.clone();
        } else if let Some(cancel) = &started.cancel {
            // Superseded before it got going.
            cancel.cancel();
        }
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    /// Forgets the active task; returns its cancel token so the caller can fire it.
    pub fn clear(&mut self) -> Option<CancellationToken> {
        self.active = None;
        self.meta = TaskMeta::None;
        self.cancel.take()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub search: TaskState,
    pub document: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::Search => &self.search,
            TaskKind::Document => &self.document,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Search => &mut self.search,
            TaskKind::Document => &mut self.document,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.search.is_running() || self.document.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_seq_is_monotonic() {
        let mut seq = TaskSeq::default();
        assert_eq!(seq.next_id(), TaskId(0));
        assert_eq!(seq.next_id(), TaskId(1));
    }

    #[test]
    fn test_stale_completion_is_rejected() {
        let mut state = TaskState::default();
        state.claim(TaskId(1), TaskMeta::None);
        state.claim(TaskId(2), TaskMeta::None);

        assert!(!state.finish_if_active(TaskId(1)));
        assert!(state.is_running());
        assert!(state.finish_if_active(TaskId(2)));
        assert!(!state.is_running());
    }

    #[test]
    fn test_claim_hands_back_previous_token() {
        let mut state = TaskState::default();
        state.claim(TaskId(1), TaskMeta::None);
        let token = CancellationToken::new();
        state.on_started(&TaskStarted {
            id: TaskId(1),
            cancel: Some(token.clone()),
            meta: TaskMeta::None,
        });

        let previous = state.claim(TaskId(2), TaskMeta::None);

        assert!(previous.is_some());
        assert!(state.cancel.is_none());
    }

    #[test]
    fn test_superseded_start_is_cancelled() {
        let mut state = TaskState::default();
        state.claim(TaskId(5), TaskMeta::None);
        let token = CancellationToken::new();

        state.on_started(&TaskStarted {
            id: TaskId(4),
            cancel: Some(token.clone()),
            meta: TaskMeta::None,
        });

        assert!(token.is_cancelled());
        assert_eq!(state.active, Some(TaskId(5)));
    }
}
