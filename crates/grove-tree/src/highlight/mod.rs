//! Highlight engine over [`TextRegion`]s.

pub mod matching;

use std::cell::RefCell;
use std::rc::Rc;

use grove_common::MarkOptions;
use grove_search::{Completion, HighlightEngine, MarkInstance, MarkSink};
use tracing::trace;

use crate::region::{TextMark, TextRegion};
use crate::tick::TickQueue;

/// When engine work (and its completion callback) actually runs.
#[derive(Debug, Clone, Default)]
pub enum Delivery {
    /// Inside the `mark`/`unmark` call.
    #[default]
    Immediate,
    /// On a later tick of the given queue.
    Deferred(TickQueue),
}

impl Delivery {
    fn dispatch(&self, task: impl FnOnce() + 'static) {
        match self {
            Delivery::Immediate => task(),
            Delivery::Deferred(queue) => queue.defer(task),
        }
    }
}

/// Engine factory: binds a [`RegionMarker`] to a region.
#[derive(Debug, Clone, Default)]
pub struct TextHighlighter {
    delivery: Delivery,
}

impl TextHighlighter {
    pub fn new(delivery: Delivery) -> Self {
        Self { delivery }
    }

    pub fn immediate() -> Self {
        Self::new(Delivery::Immediate)
    }

    pub fn deferred(queue: &TickQueue) -> Self {
        Self::new(Delivery::Deferred(queue.clone()))
    }

    pub fn delivery(&self) -> &Delivery {
        &self.delivery
    }
}

impl HighlightEngine for TextHighlighter {
    type Region = TextRegion;
    type Mark = TextMark;
    type Instance = RegionMarker;

    fn bind(&self, region: TextRegion) -> RegionMarker {
        RegionMarker {
            region,
            created: Rc::new(RefCell::new(Vec::new())),
            delivery: self.delivery.clone(),
        }
    }
}

/// An engine instance bound to one region. It only ever removes the marks
/// it created itself.
#[derive(Debug)]
pub struct RegionMarker {
    region: TextRegion,
    created: Rc<RefCell<Vec<TextMark>>>,
    delivery: Delivery,
}

impl RegionMarker {
    pub fn region(&self) -> &TextRegion {
        &self.region
    }

    /// Marks created by this instance that have not been removed yet.
    pub fn created(&self) -> Vec<TextMark> {
        self.created.borrow().clone()
    }
}

impl MarkInstance for RegionMarker {
    type Mark = TextMark;

    fn mark(&self, needle: &str, options: &MarkOptions, mut sink: MarkSink<TextMark>) {
        let region = self.region.clone();
        let created = Rc::clone(&self.created);
        let needle = needle.to_string();
        let options = options.clone();
        self.delivery.dispatch(move || {
            let ranges = matching::find_ranges(&region.text(), &needle, &options);
            let marks = region.insert_marks(&ranges);
            trace!(needle = %needle, found = marks.len(), "marked region");
            created.borrow_mut().extend(marks.iter().cloned());
            for mark in marks {
                sink.each(mark);
            }
            sink.done();
        });
    }

    fn unmark(&self, done: Completion) {
        let region = self.region.clone();
        let created = Rc::clone(&self.created);
        self.delivery.dispatch(move || {
            let mine: Vec<TextMark> = created.borrow_mut().drain(..).collect();
            region.remove_marks(&mine);
            trace!(removed = mine.len(), "unmarked region");
            done.done();
        });
    }
}
