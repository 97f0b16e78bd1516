//! Document pane: highlighted full text with match navigation.
//!
//! The body is laid out through `WrappedSurface`, which reports the row of
//! each highlight as it is appended. Those rows feed the core navigator, so
//! `n`/`N` and the scrollbar markers always agree with what is on screen.

mod render;
mod state;
mod surface;

pub use render::{SCROLLBAR_WIDTH, render_document, text_area};
pub use state::{
    DocumentBody, DocumentScroll, DocumentState, MOUSE_SCROLL_LINES, RenderedDocument,
};
pub use surface::WrappedSurface;
