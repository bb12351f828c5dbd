//! In-place text search over a rendered node tree.
//!
//! A [`SearchSession`] asks a [`HighlightEngine`] to mark every occurrence of
//! a search string in every rendered node of a [`TreeWidget`], gathers the
//! per-node marks into one ordered [`ResultTable`], and steps a wrap-around
//! cursor through them while keeping exactly one mark focal.
//!
//! Marking and unmarking complete through callbacks that may arrive late and
//! in any order. The session counts every request still in flight with one
//! [`FanIn`] latch and tags each pass with a [`Generation`]. Marks delivered
//! to a superseded pass are removed again, and no pass settles until that
//! latch opens.

pub mod cursor;
pub mod host;
pub mod latch;
pub mod session;
pub mod table;

pub use cursor::{Cursor, Direction, MatchLayout, Position, Step};
pub use host::{Completion, HighlightEngine, Mark, MarkInstance, MarkSink, TreeNode, TreeWidget};
pub use latch::{FanIn, Generation};
pub use session::{NodeResults, SearchSession, SearchStatus, SessionOptions};
pub use table::{ResultEntry, ResultTable};
