//! Pre-order traversal and lookup on the document tree.

use grove_common::NodeId;

use super::{DocNode, DocumentTree};

impl DocNode {
    /// Visit this node and its descendants in pre-order with their depth.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DocNode, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a DocNode, usize)) {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }

    pub fn find(&self, id: NodeId) -> Option<&DocNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub(crate) fn find_mut(&mut self, id: NodeId) -> Option<&mut DocNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    fn collect_ids_into(&self, out: &mut Vec<NodeId>) {
        out.push(self.id);
        for child in &self.children {
            child.collect_ids_into(out);
        }
    }
}

impl DocumentTree {
    /// Collect all node IDs in pre-order, root first.
    pub fn collect_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.root.collect_ids_into(&mut ids);
        ids
    }

    /// Nodes in pre-order; the root is skipped unless `include_root` is set.
    pub fn pre_order(&self, include_root: bool) -> Vec<&DocNode> {
        let mut nodes = Vec::new();
        self.root.walk(&mut |node, depth| {
            if depth > 0 || include_root {
                nodes.push(node);
            }
        });
        nodes
    }

    /// Depth of `id` below the root, if present.
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        let mut found = None;
        self.root.walk(&mut |node, depth| {
            if node.id == id {
                found = Some(depth);
            }
        });
        found
    }
}
