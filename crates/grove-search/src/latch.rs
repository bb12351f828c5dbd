//! Fan-in counting and pass generations.

/// Identifies one clear or search pass. Every new pass takes the next
/// generation; callbacks that captured an older one are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// A count-down latch that opens once every expected arrival has happened.
/// More arrivals can be expected at any time, which closes it again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FanIn {
    remaining: usize,
}

impl FanIn {
    pub fn new(expected: usize) -> Self {
        Self {
            remaining: expected,
        }
    }

    /// Expect `count` more arrivals.
    pub fn expect(&mut self, count: usize) {
        self.remaining += count;
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_open(&self) -> bool {
        self.remaining == 0
    }

    /// Record one arrival. Returns `true` only for the arrival that opens the
    /// latch; arrivals while it is open are ignored.
    pub fn arrive(&mut self) -> bool {
        match self.remaining {
            0 => false,
            1 => {
                self.remaining = 0;
                true
            }
            _ => {
                self.remaining -= 1;
                false
            }
        }
    }
}
