//! Feature slices for the TUI (state/update/render per slice).

pub mod document;
pub mod query;
pub mod results;
pub mod statusline;
