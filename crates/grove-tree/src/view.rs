//! Which node the widget is showing, and every request to change it.

use std::cell::RefCell;
use std::rc::Rc;

use grove_common::NodeId;
use tracing::trace;

#[derive(Debug, Default)]
struct ViewState {
    focused: Option<NodeId>,
    requests: Vec<NodeId>,
}

/// Shared record of "bring into view" requests. Cloning shares the record.
#[derive(Debug, Clone, Default)]
pub struct ViewTracker {
    state: Rc<RefCell<ViewState>>,
}

impl ViewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` the focused node.
    pub fn bring(&self, id: NodeId) {
        trace!(node = %id, "bring into view");
        let mut state = self.state.borrow_mut();
        state.focused = Some(id);
        state.requests.push(id);
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.state.borrow().focused
    }

    /// Every request so far, oldest first.
    pub fn requests(&self) -> Vec<NodeId> {
        self.state.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }
}
