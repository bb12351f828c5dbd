//! The search session: public API over the result table and the cursor.

mod navigation;
mod passes;


use std::cell::RefCell;
use std::rc::Rc;

use grove_common::ViewPolicy;

use crate::cursor::{Cursor, Position};
use crate::host::{HighlightEngine, MarkInstance, TreeNode, TreeWidget};
use crate::latch::{FanIn, Generation};
use crate::table::{ResultTable, SlotTable};

/// How a session presents the focused match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Class toggled on the focal mark. `None` leaves mark classes alone.
    pub focal_class: Option<String>,
    /// Whether the tree root takes part in the search.
    pub include_root: bool,
    pub view_policy: ViewPolicy,
    /// Ask the focal mark to scroll into view after every step.
    pub reveal_focal_mark: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            focal_class: Some("focal".into()),
            include_root: false,
            view_policy: ViewPolicy::OnBoundary,
            reveal_focal_mark: true,
        }
    }
}

/// Read-only copy of one result entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeResults<N, M> {
    pub node: N,
    pub marks: Vec<M>,
}

/// Snapshot of where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStatus {
    pub focal: Option<Position>,
    pub match_count: usize,
    pub result_count: usize,
    /// A clear or search pass is still waiting on the engine.
    pub pending: bool,
}

/// What the session is waiting for. A pass settles when `State::outstanding`
/// opens.
pub(crate) enum Pass<N, I: MarkInstance> {
    Idle,
    Clearing {
        then: Box<dyn FnOnce()>,
    },
    Searching {
        slots: SlotTable<N, I>,
        on_complete: Box<dyn FnOnce()>,
    },
}

pub(crate) struct State<N, I: MarkInstance> {
    generation: Generation,
    table: ResultTable<N, I>,
    cursor: Cursor,
    pass: Pass<N, I>,
    /// Engine requests of any generation whose completion has not arrived,
    /// plus one while a pass is still issuing requests.
    outstanding: FanIn,
}

pub(crate) struct Shared<T: TreeWidget, E: HighlightEngine> {
    tree: T,
    engine: E,
    options: SessionOptions,
    state: RefCell<State<T::Node, E::Instance>>,
}

/// Searches a tree, highlights the matches and walks a focus cursor
/// through them.
///
/// Cloning a session yields another handle to the same state.
pub struct SearchSession<T: TreeWidget, E: HighlightEngine> {
    shared: Rc<Shared<T, E>>,
}

impl<T: TreeWidget, E: HighlightEngine> Clone for SearchSession<T, E> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T, E> SearchSession<T, E>
where
    T: TreeWidget + 'static,
    E: HighlightEngine<Region = <T::Node as TreeNode>::Region> + 'static,
{
    pub fn new(tree: T, engine: E, options: SessionOptions) -> Self {
        Self {
            shared: Rc::new(Shared {
                tree,
                engine,
                options,
                state: RefCell::new(State {
                    generation: Generation::default(),
                    table: ResultTable::default(),
                    cursor: Cursor::Unset,
                    pass: Pass::Idle,
                    outstanding: FanIn::default(),
                }),
            }),
        }
    }

    pub fn tree(&self) -> &T {
        &self.shared.tree
    }

    pub fn engine(&self) -> &E {
        &self.shared.engine
    }

    pub fn options(&self) -> &SessionOptions {
        &self.shared.options
    }

    /// Current result entries in tree order.
    pub fn results(&self) -> Vec<NodeResults<T::Node, E::Mark>> {
        let state = self.shared.state.borrow();
        state
            .table
            .entries()
            .iter()
            .map(|entry| NodeResults {
                node: entry.node().clone(),
                marks: entry.marks().to_vec(),
            })
            .collect()
    }

    /// The focused mark, if the cursor is positioned.
    pub fn focal_mark(&self) -> Option<E::Mark> {
        let state = self.shared.state.borrow();
        let position = state.cursor.position()?;
        state.table.mark(position.entry(), position.mark()).cloned()
    }

    pub fn focal_position(&self) -> Option<Position> {
        self.shared.state.borrow().cursor.position()
    }

    pub fn match_count(&self) -> usize {
        self.shared.state.borrow().table.match_count()
    }

    /// Number of nodes with at least one match.
    pub fn result_count(&self) -> usize {
        self.shared.state.borrow().table.len()
    }

    pub fn is_pending(&self) -> bool {
        !matches!(self.shared.state.borrow().pass, Pass::Idle)
    }

    pub fn status(&self) -> SearchStatus {
        let state = self.shared.state.borrow();
        SearchStatus {
            focal: state.cursor.position(),
            match_count: state.table.match_count(),
            result_count: state.table.len(),
            pending: !matches!(state.pass, Pass::Idle),
        }
    }
}
