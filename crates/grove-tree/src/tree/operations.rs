//! Mutating operations on the document tree: add, remove, set content.

use grove_common::{NodeId, TreeError};

use super::{DocNode, DocumentTree};
use crate::region::TextRegion;

impl DocumentTree {
    /// Append a child under `parent`. Returns the new node's ID.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        title: impl Into<String>,
        content: Option<String>,
    ) -> Result<NodeId, TreeError> {
        let id = NodeId(self.next_id);
        let node = self
            .root
            .find_mut(parent)
            .ok_or(TreeError::UnknownNode(parent))?;
        node.children.push(DocNode::new(id, title, content));
        self.next_id += 1;
        Ok(id)
    }

    /// Detach a node and its subtree. The root cannot be removed.
    pub fn remove(&mut self, id: NodeId) -> Result<DocNode, TreeError> {
        if self.root.id == id {
            return Err(TreeError::RootRemoval);
        }
        self.root
            .remove_descendant(id)
            .ok_or(TreeError::UnknownNode(id))
    }

    /// Render (`Some`) or unrender (`None`) a node's content. Rendering
    /// replaces the region, dropping any marks it held.
    pub fn set_content(&mut self, id: NodeId, content: Option<String>) -> Result<(), TreeError> {
        let node = self.root.find_mut(id).ok_or(TreeError::UnknownNode(id))?;
        node.region = content.map(TextRegion::new);
        Ok(())
    }

    pub fn rename(&mut self, id: NodeId, title: impl Into<String>) -> Result<(), TreeError> {
        let node = self.root.find_mut(id).ok_or(TreeError::UnknownNode(id))?;
        node.title = title.into();
        Ok(())
    }
}

impl DocNode {
    fn remove_descendant(&mut self, id: NodeId) -> Option<DocNode> {
        if let Some(idx) = self.children.iter().position(|c| c.id == id) {
            return Some(self.children.remove(idx));
        }
        self.children
            .iter_mut()
            .find_map(|child| child.remove_descendant(id))
    }
}
