//! Match navigation over rendered highlight offsets.
//!
//! `PositionTracker` collects the surface offsets of highlighted segments during
//! one render pass and yields a fresh `NavigationState`. `MatchNavigator` then
//! answers next/previous/update queries against that state and the surface's
//! current scroll position.

mod navigator;
mod tracker;

pub use navigator::{DEFAULT_PADDING, Jump, MatchNavigator};
pub use tracker::{NavigationState, PositionTracker};
