//! Query console: single-line term editor with debounced submission.

mod render;
mod state;
mod update;

pub use render::render_query;
pub use state::QueryState;
pub use update::{QueryAction, handle_query_key};
