//! Ranked results list.

mod render;
mod state;

pub use render::{ENTRY_HEIGHT, first_visible, render_results};
pub use state::ResultsState;
