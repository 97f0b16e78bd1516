//! Core seekr library (highlighting, match navigation, search API, config).

pub mod api;
pub mod config;
pub mod highlight;
pub mod logging;
pub mod navigation;
