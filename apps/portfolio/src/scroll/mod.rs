// Scroll tracking: derives the active section from the viewport offset.
// Pure threshold rule in `layout`, observable state in `store`,
// attach/detach plumbing in `events`, and the two wired together in `tracker`.
// The HTTP surface only goes through `replay`.
#![allow(dead_code)]

pub mod events;
pub mod layout;
pub mod store;
pub mod tracker;

pub use layout::{LayoutError, SectionBoundary, SectionLayout};
pub use tracker::{replay, ScrollReplay};
