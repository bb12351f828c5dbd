//! Clear and search passes: fan out one engine request per node, fan the
//! completions back in, and drop anything that arrives for a superseded pass.
//!
//! Every engine request, whichever pass issued it, is counted in one
//! outstanding latch. A pass only settles once that latch opens, so a clear
//! never finishes (and the search queued behind it never starts) while marks
//! from an earlier pass are still being placed or removed.

use std::mem;
use std::rc::Rc;

use grove_common::MarkOptions;
use tracing::{debug, trace};

use super::{Pass, SearchSession, Shared};
use crate::host::{Completion, HighlightEngine, MarkInstance, MarkSink, TreeNode, TreeWidget};
use crate::latch::Generation;
use crate::table::{ResultEntry, SlotTable};

type Instance<E> = <E as HighlightEngine>::Instance;

impl<T, E> SearchSession<T, E>
where
    T: TreeWidget + 'static,
    E: HighlightEngine<Region = <T::Node as TreeNode>::Region> + 'static,
{
    /// Clear previous results, then mark every occurrence of `needle` in
    /// every rendered node. `on_complete` runs once every node has reported
    /// back, unless another `search` or `clear` supersedes this one first.
    pub fn search(
        &self,
        needle: impl Into<String>,
        options: &MarkOptions,
        on_complete: impl FnOnce() + 'static,
    ) {
        let needle = needle.into();
        let options = options.clone();
        let weak = Rc::downgrade(&self.shared);
        self.shared.begin_clear(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.run_search(&needle, &options, Box::new(on_complete));
            }
        }));
    }

    /// Reset the cursor and match count, then remove every mark. Runs
    /// `on_complete` synchronously when there is nothing to remove, otherwise
    /// once every entry has been unmarked.
    pub fn clear(&self, on_complete: impl FnOnce() + 'static) {
        self.shared.begin_clear(Box::new(on_complete));
    }
}

impl<T, E> Shared<T, E>
where
    T: TreeWidget + 'static,
    E: HighlightEngine<Region = <T::Node as TreeNode>::Region> + 'static,
{
    fn begin_clear(self: &Rc<Self>, then: Box<dyn FnOnce()>) {
        let entries = {
            let mut state = self.state.borrow_mut();
            state.generation = state.generation.next();
            state.cursor.reset();

            let mut entries = state.table.take_entries();
            let carried = state.outstanding.remaining();
            match mem::replace(&mut state.pass, Pass::Clearing { then }) {
                Pass::Idle => {}
                Pass::Clearing { .. } => {
                    debug!(outstanding = carried, "superseding an unfinished clear")
                }
                Pass::Searching { slots, .. } => {
                    debug!(outstanding = carried, "superseding an unfinished search");
                    entries.extend(slots.into_entries());
                }
            }
            // One unmark per entry, plus a hold until they are all issued.
            state.outstanding.expect(entries.len() + 1);
            entries
        };

        if !entries.is_empty() {
            debug!(entries = entries.len(), "clearing search results");
        }
        for entry in entries {
            self.unmark(entry.instance());
        }
        self.arrive();
    }

    /// Ask `instance` to remove its marks, counted as outstanding work.
    /// The caller must already have expected the arrival.
    fn unmark(self: &Rc<Self>, instance: &Rc<Instance<E>>) {
        let weak = Rc::downgrade(self);
        instance.unmark(Completion::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.arrive();
            }
        }));
    }

    fn run_search(
        self: &Rc<Self>,
        needle: &str,
        options: &MarkOptions,
        on_complete: Box<dyn FnOnce()>,
    ) {
        let mut nodes = Vec::new();
        self.tree
            .traverse(self.options.include_root, &mut |node| nodes.push(node.clone()));
        debug!(
            needle,
            visited = nodes.len(),
            total = self.tree.node_count(),
            "search started"
        );

        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation = state.generation.next();
            state.cursor.reset();
            state.pass = Pass::Searching {
                slots: SlotTable::new(nodes.len()),
                on_complete,
            };
            // Held until every request has been issued.
            state.outstanding.expect(1);
            state.generation
        };

        for (slot, node) in nodes.into_iter().enumerate() {
            let Some(region) = node.rendered_region() else {
                continue;
            };
            let instance = Rc::new(self.engine.bind(region));
            let bound = Rc::clone(&instance);
            let weak = Rc::downgrade(self);
            self.state.borrow_mut().outstanding.expect(1);
            instance.mark(
                needle,
                options,
                MarkSink::new(move |marks: Vec<E::Mark>| match weak.upgrade() {
                    Some(shared) => shared.on_marked(generation, slot, node, marks, bound),
                    None => {
                        if !marks.is_empty() {
                            bound.unmark(Completion::noop());
                        }
                    }
                }),
            );
        }

        self.arrive();
    }

    fn on_marked(
        self: &Rc<Self>,
        generation: Generation,
        slot: usize,
        node: T::Node,
        marks: Vec<E::Mark>,
        instance: Rc<Instance<E>>,
    ) {
        let orphaned = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            let current = state.generation == generation;
            match &mut state.pass {
                Pass::Searching { slots, .. } if current => {
                    trace!(node = %node.node_id(), marks = marks.len(), "node marked");
                    if let Some(entry) = ResultEntry::new(node, marks, instance) {
                        slots.fill(slot, entry);
                    }
                    None
                }
                _ if marks.is_empty() => None,
                _ => {
                    // The removal is part of whatever pass is now waiting.
                    state.outstanding.expect(1);
                    Some((marks.len(), instance))
                }
            }
        };

        if let Some((count, instance)) = orphaned {
            debug!(count, "removing marks from a superseded search");
            self.unmark(&instance);
        }
        self.arrive();
    }

    /// One outstanding request finished. Settles the current pass once
    /// nothing is left in flight.
    fn arrive(&self) {
        let settled = {
            let mut state = self.state.borrow_mut();
            if !state.outstanding.arrive() {
                return;
            }
            match mem::replace(&mut state.pass, Pass::Idle) {
                Pass::Idle => return,
                Pass::Clearing { then } => {
                    debug!("clear complete");
                    then
                }
                Pass::Searching { slots, on_complete } => {
                    state.table = slots.into_table();
                    debug!(
                        entries = state.table.len(),
                        matches = state.table.match_count(),
                        "search complete"
                    );
                    on_complete
                }
            }
        };
        settled();
    }
}
