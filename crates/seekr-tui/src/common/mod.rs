//! Shared building blocks for the TUI.

pub mod scrollbar;
pub mod task;
pub mod text;

pub use scrollbar::Scrollbar;
pub use task::{TaskCompleted, TaskId, TaskKind, TaskMeta, TaskSeq, TaskStarted, TaskState, Tasks};
