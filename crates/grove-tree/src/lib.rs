//! In-memory document tree and plain-text highlight engine.
//!
//! These are the reference collaborators for `grove-search`: a
//! [`DocumentTree`] whose rendered nodes own a [`TextRegion`], and a
//! [`TextHighlighter`] that marks occurrences inside those regions, either
//! inline or through a [`TickQueue`] to model late, out-of-order completion.

pub mod document;
pub mod highlight;
pub mod region;
pub mod tick;
pub mod tree;
pub mod view;
pub mod widget;

#[cfg(test)]
mod tests;

pub use document::DocumentOutline;
pub use highlight::{Delivery, RegionMarker, TextHighlighter};
pub use region::{TextMark, TextRegion};
pub use tick::TickQueue;
pub use tree::{DocNode, DocumentTree};
pub use view::ViewTracker;
pub use widget::NodeHandle;
