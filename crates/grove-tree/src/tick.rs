//! A single-threaded queue of deferred callbacks, drained explicitly.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// Deferred work, run on the next explicit tick. Cloning shares the queue.
#[derive(Clone, Default)]
pub struct TickQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl TickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Run the oldest task. Returns `false` when the queue was empty.
    pub fn run_next(&self) -> bool {
        let task = self.tasks.borrow_mut().pop_front();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Run tasks oldest-first, including ones queued while running, until
    /// the queue is empty. Returns how many ran.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }

    /// Like [`run_until_idle`](Self::run_until_idle), but each batch of
    /// queued tasks runs newest-first.
    pub fn run_reversed(&self) -> usize {
        let mut ran = 0;
        loop {
            let batch: Vec<Task> = self.tasks.borrow_mut().drain(..).collect();
            if batch.is_empty() {
                return ran;
            }
            for task in batch.into_iter().rev() {
                task();
                ran += 1;
            }
        }
    }
}

impl fmt::Debug for TickQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickQueue")
            .field("pending", &self.len())
            .finish()
    }
}
