//! Cursor movement and the focal-mark side effects that go with it.

use grove_common::ViewPolicy;
use tracing::trace;

use super::{SearchSession, Shared};
use crate::cursor::{Direction, Position};
use crate::host::{HighlightEngine, Mark, TreeNode, TreeWidget};

struct Refocus<N, M> {
    position: Position,
    outgoing: Option<M>,
    incoming: M,
    bring_into_view: Option<N>,
}

impl<T, E> SearchSession<T, E>
where
    T: TreeWidget + 'static,
    E: HighlightEngine<Region = <T::Node as TreeNode>::Region> + 'static,
{
    /// Focus the next match, wrapping from the last match to the first.
    /// Does nothing while there are no results.
    pub fn next(&self) {
        self.shared.step(Direction::Forward);
    }

    /// Focus the previous match, wrapping from the first match to the last.
    /// Does nothing while there are no results.
    pub fn prev(&self) {
        self.shared.step(Direction::Backward);
    }
}

impl<T, E> Shared<T, E>
where
    T: TreeWidget + 'static,
    E: HighlightEngine<Region = <T::Node as TreeNode>::Region> + 'static,
{
    fn step(&self, direction: Direction) {
        if let Some(refocus) = self.move_cursor(direction) {
            self.apply(refocus);
        }
    }

    fn move_cursor(&self, direction: Direction) -> Option<Refocus<T::Node, E::Mark>> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;

        let step = state.cursor.step(&state.table, direction)?;
        let outgoing = state
            .cursor
            .position()
            .and_then(|p| state.table.mark(p.entry(), p.mark()).cloned());

        let position = step.position;
        let entry = state.table.entry(position.entry())?;
        let incoming = entry.marks().get(position.mark())?.clone();
        let bring_into_view = match self.options.view_policy {
            ViewPolicy::EveryStep => Some(entry.node().clone()),
            ViewPolicy::OnBoundary => step.crossed_boundary.then(|| entry.node().clone()),
        };
        state.cursor.place(&state.table, position);

        Some(Refocus {
            position,
            outgoing,
            incoming,
            bring_into_view,
        })
    }

    /// The outgoing mark loses the focal class and the incoming one gains it
    /// within the same call, so no caller ever observes zero or two focal marks.
    fn apply(&self, refocus: Refocus<T::Node, E::Mark>) {
        let class = self.options.focal_class.as_deref();

        if let (Some(class), Some(outgoing)) = (class, &refocus.outgoing) {
            outgoing.remove_class(class);
        }
        if let Some(node) = &refocus.bring_into_view {
            node.bring_into_view();
        }
        if let Some(class) = class {
            refocus.incoming.add_class(class);
        }
        if self.options.reveal_focal_mark {
            refocus.incoming.reveal();
        }

        trace!(
            entry = refocus.position.entry(),
            mark = refocus.position.mark(),
            global = refocus.position.global(),
            "focus moved"
        );
    }
}
