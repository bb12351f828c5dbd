//! The ordered table of per-node search results.

use std::rc::Rc;

use crate::cursor::MatchLayout;
use crate::host::MarkInstance;

/// One node with at least one match, plus the engine instance that made the
/// marks and can later remove them.
pub struct ResultEntry<N, I: MarkInstance> {
    node: N,
    marks: Vec<I::Mark>,
    instance: Rc<I>,
}

impl<N, I: MarkInstance> ResultEntry<N, I> {
    /// Returns `None` when `marks` is empty; the table never holds an entry
    /// the cursor could land on without a match.
    pub fn new(node: N, marks: Vec<I::Mark>, instance: Rc<I>) -> Option<Self> {
        if marks.is_empty() {
            return None;
        }
        Some(Self {
            node,
            marks,
            instance,
        })
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn marks(&self) -> &[I::Mark] {
        &self.marks
    }

    pub fn instance(&self) -> &Rc<I> {
        &self.instance
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// Result entries in tree traversal order, with the running match total.
pub struct ResultTable<N, I: MarkInstance> {
    entries: Vec<ResultEntry<N, I>>,
    match_count: usize,
}

impl<N, I: MarkInstance> Default for ResultTable<N, I> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            match_count: 0,
        }
    }
}

impl<N, I: MarkInstance> ResultTable<N, I> {
    pub fn entries(&self) -> &[ResultEntry<N, I>] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&ResultEntry<N, I>> {
        self.entries.get(index)
    }

    pub fn mark(&self, entry: usize, mark: usize) -> Option<&I::Mark> {
        self.entries.get(entry)?.marks.get(mark)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Detach every entry, leaving an empty table with a zero match count.
    pub(crate) fn take_entries(&mut self) -> Vec<ResultEntry<N, I>> {
        self.match_count = 0;
        std::mem::take(&mut self.entries)
    }
}

impl<N, I: MarkInstance> MatchLayout for ResultTable<N, I> {
    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn entry_len(&self, entry: usize) -> usize {
        self.entries.get(entry).map_or(0, ResultEntry::len)
    }

    fn match_count(&self) -> usize {
        self.match_count
    }
}

/// One slot per visited node, filled as completions arrive in any order.
pub(crate) struct SlotTable<N, I: MarkInstance> {
    slots: Vec<Option<ResultEntry<N, I>>>,
}

impl<N, I: MarkInstance> SlotTable<N, I> {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(size).collect(),
        }
    }

    pub(crate) fn fill(&mut self, slot: usize, entry: ResultEntry<N, I>) {
        if let Some(cell) = self.slots.get_mut(slot) {
            *cell = Some(entry);
        }
    }

    /// Entries filled so far, in slot order.
    pub(crate) fn into_entries(self) -> Vec<ResultEntry<N, I>> {
        self.slots.into_iter().flatten().collect()
    }

    /// Compact into a table in traversal order, dropping empty slots.
    pub(crate) fn into_table(self) -> ResultTable<N, I> {
        let entries = self.into_entries();
        let match_count = entries.iter().map(ResultEntry::len).sum();
        ResultTable {
            entries,
            match_count,
        }
    }
}
