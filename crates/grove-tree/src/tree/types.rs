//! Core types for the document tree: DocNode and DocumentTree.

use grove_common::NodeId;

use crate::region::TextRegion;
use crate::view::ViewTracker;

/// One node of a document. A node without a region is not rendered
/// (collapsed or off-screen) and has nothing to search.
#[derive(Debug, Clone)]
pub struct DocNode {
    pub(super) id: NodeId,
    pub(super) title: String,
    pub(super) region: Option<TextRegion>,
    pub(super) children: Vec<DocNode>,
}

impl DocNode {
    pub(crate) fn new(id: NodeId, title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            region: content.map(TextRegion::new),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn region(&self) -> Option<&TextRegion> {
        self.region.as_ref()
    }

    pub fn children(&self) -> &[DocNode] {
        &self.children
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DocNode::node_count).sum::<usize>()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }
}

/// A document tree with a view tracker shared by every node handle.
#[derive(Debug)]
pub struct DocumentTree {
    pub(super) root: DocNode,
    pub(super) view: ViewTracker,
    /// Auto-incrementing counter for node IDs.
    pub(super) next_id: u32,
}

impl DocumentTree {
    /// Create a tree holding only a root node.
    pub fn new(title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            root: DocNode::new(NodeId(1), title, content),
            view: ViewTracker::new(),
            next_id: 2,
        }
    }

    pub fn root(&self) -> &DocNode {
        &self.root
    }

    pub fn view(&self) -> &ViewTracker {
        &self.view
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn find(&self, id: NodeId) -> Option<&DocNode> {
        self.root.find(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.root.contains(id)
    }

    /// The rendered region of `id`, if the node exists and is rendered.
    pub fn region(&self, id: NodeId) -> Option<TextRegion> {
        self.find(id)?.region.clone()
    }
}
