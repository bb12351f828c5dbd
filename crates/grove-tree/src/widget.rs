//! `DocumentTree` as a search-session tree widget.

use grove_common::NodeId;
use grove_search::{TreeNode, TreeWidget};

use crate::region::TextRegion;
use crate::tree::{DocNode, DocumentTree};
use crate::view::ViewTracker;

/// A node as seen by a search session: its identity, its region if
/// rendered, and a line back to the tree's view.
#[derive(Debug, Clone)]
pub struct NodeHandle {
    id: NodeId,
    title: String,
    region: Option<TextRegion>,
    view: ViewTracker,
}

impl NodeHandle {
    fn new(node: &DocNode, view: &ViewTracker) -> Self {
        Self {
            id: node.id(),
            title: node.title().to_string(),
            region: node.region().cloned(),
            view: view.clone(),
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
}

impl PartialEq for NodeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl TreeNode for NodeHandle {
    type Region = TextRegion;

    fn node_id(&self) -> NodeId {
        self.id
    }

    fn rendered_region(&self) -> Option<TextRegion> {
        self.region.clone()
    }

    fn bring_into_view(&self) {
        self.view.bring(self.id);
    }
}

impl DocumentTree {
    /// A handle to `id`, if present.
    pub fn handle(&self, id: NodeId) -> Option<NodeHandle> {
        self.find(id).map(|node| NodeHandle::new(node, self.view()))
    }
}

impl TreeWidget for DocumentTree {
    type Node = NodeHandle;

    fn traverse(&self, include_root: bool, visitor: &mut dyn FnMut(&NodeHandle)) {
        for node in self.pre_order(include_root) {
            visitor(&NodeHandle::new(node, self.view()));
        }
    }

    fn node_count(&self) -> usize {
        DocumentTree::node_count(self)
    }
}
