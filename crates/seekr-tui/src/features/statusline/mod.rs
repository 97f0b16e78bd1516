//! Status line feature slice.
//!
//! Shows the pending-request spinner, the last error with its retry hint, or
//! the match counter of the open document, plus key hints on the right.

mod render;
mod state;

pub use render::{StatusView, render_status_line};
pub use state::{RetryRequest, StatusError, StatusState};
