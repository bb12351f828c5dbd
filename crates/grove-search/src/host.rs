//! Contracts for the two collaborators a search session drives: the tree
//! widget that owns the nodes, and the highlight engine that marks text
//! inside a node's rendered region.
//!
//! Everything here is single-threaded and callback driven. Engines report
//! back through [`MarkSink`] and [`Completion`], both of which are consumed
//! when they finish, so a completion can be delivered at most once.

use std::fmt;

use grove_common::{MarkOptions, NodeId};

/// A hierarchical widget whose nodes may own rendered content.
pub trait TreeWidget {
    type Node: TreeNode;

    /// Visit every node in pre-order. The root is visited only when
    /// `include_root` is set.
    fn traverse(&self, include_root: bool, visitor: &mut dyn FnMut(&Self::Node));

    /// Total number of nodes in the tree, root included.
    fn node_count(&self) -> usize;
}

/// A cheap handle to one node of a [`TreeWidget`].
pub trait TreeNode: Clone + 'static {
    type Region;

    fn node_id(&self) -> NodeId;

    /// The node's rendered content, or `None` if it is not currently rendered.
    fn rendered_region(&self) -> Option<Self::Region>;

    /// Ask the widget to make this node the visually focused one. The
    /// session does not wait for this to finish.
    fn bring_into_view(&self);
}

/// Factory for engine instances, each bound to one content region.
pub trait HighlightEngine {
    type Region;
    type Mark: Mark;
    type Instance: MarkInstance<Mark = Self::Mark>;

    fn bind(&self, region: Self::Region) -> Self::Instance;
}

/// An engine bound to one region.
///
/// The session keeps instances behind an `Rc` and may drop its handle as soon
/// as a call returns, so an implementation must hand whatever a late
/// completion needs to the completion itself.
pub trait MarkInstance: 'static {
    type Mark: Mark;

    /// Find and wrap every occurrence of `needle`. Call [`MarkSink::each`]
    /// once per mark in document order, then [`MarkSink::done`], also when
    /// nothing matched.
    fn mark(&self, needle: &str, options: &MarkOptions, sink: MarkSink<Self::Mark>);

    /// Remove every mark this instance created, then call [`Completion::done`].
    fn unmark(&self, done: Completion);
}

/// Handle to one visual mark produced by an engine.
pub trait Mark: Clone + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Scroll the mark into view inside its node.
    fn reveal(&self) {}
}

/// Collects the marks of one `mark` request and reports them when done.
pub struct MarkSink<M> {
    marks: Vec<M>,
    on_done: Box<dyn FnOnce(Vec<M>)>,
}

impl<M> MarkSink<M> {
    pub fn new(on_done: impl FnOnce(Vec<M>) + 'static) -> Self {
        Self {
            marks: Vec::new(),
            on_done: Box::new(on_done),
        }
    }

    /// Record one mark.
    pub fn each(&mut self, mark: M) {
        self.marks.push(mark);
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Finish the request, handing every recorded mark to the owner.
    pub fn done(self) {
        (self.on_done)(self.marks)
    }
}

impl<M> fmt::Debug for MarkSink<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkSink")
            .field("marks", &self.marks.len())
            .finish_non_exhaustive()
    }
}

/// One-shot completion callback for `unmark`.
pub struct Completion {
    on_done: Box<dyn FnOnce()>,
}

impl Completion {
    pub fn new(on_done: impl FnOnce() + 'static) -> Self {
        Self {
            on_done: Box::new(on_done),
        }
    }

    /// A completion nobody waits for.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn done(self) {
        (self.on_done)()
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion").finish_non_exhaustive()
    }
}
