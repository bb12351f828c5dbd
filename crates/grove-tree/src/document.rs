//! JSON document format for building a [`DocumentTree`].
//!
//! ```json
//! {
//!   "title": "Guide",
//!   "children": [
//!     { "title": "Intro", "content": "Welcome to the guide." },
//!     { "title": "Collapsed section", "children": [] }
//!   ]
//! }
//! ```
//!
//! A node without `content` is not rendered and is skipped by searches.

use std::path::Path;

use grove_common::{GroveError, NodeId, TreeError};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::tree::DocumentTree;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutline {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocumentOutline>,
}

impl DocumentTree {
    /// Build a tree from an outline. IDs are assigned in pre-order from 1.
    pub fn from_outline(outline: &DocumentOutline) -> Self {
        let mut tree = DocumentTree::new(outline.title.clone(), outline.content.clone());
        let root = tree.root().id();
        tree.add_children(root, &outline.children);
        tree
    }

    fn add_children(&mut self, parent: NodeId, children: &[DocumentOutline]) {
        for child in children {
            // The parent was just created, so it always exists.
            if let Ok(id) = self.add_child(parent, child.title.clone(), child.content.clone()) {
                self.add_children(id, &child.children);
            }
        }
    }
}

/// Parse a JSON document.
pub fn from_json(json: &str) -> Result<DocumentTree, TreeError> {
    let outline: DocumentOutline =
        serde_json::from_str(json).map_err(|e| TreeError::ParseError(e.to_string()))?;
    Ok(DocumentTree::from_outline(&outline))
}

/// Load a JSON document from disk.
pub fn load_from_path(path: &Path) -> Result<DocumentTree, GroveError> {
    let content = std::fs::read_to_string(path)?;
    let tree = from_json(&content)?;
    info!(
        "loaded document from {} ({} nodes)",
        path.display(),
        tree.node_count()
    );
    Ok(tree)
}
