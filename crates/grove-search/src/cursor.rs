//! Wrap-around two-level cursor over grouped matches.
//!
//! Matches are grouped per entry (one entry per node), but navigation walks
//! them as one flat circular sequence. A [`Position`] carries the entry index,
//! the index inside that entry and the flat index together; the three are
//! only ever produced here, so they cannot drift apart.

/// Shape of the grouped matches a cursor walks over.
pub trait MatchLayout {
    fn entry_count(&self) -> usize;

    /// Number of matches in `entry`, or 0 if it does not exist.
    fn entry_len(&self, entry: usize) -> usize;

    fn match_count(&self) -> usize {
        (0..self.entry_count()).map(|e| self.entry_len(e)).sum()
    }

    /// Flat index of (`entry`, `mark`), if that match exists.
    fn global_index(&self, entry: usize, mark: usize) -> Option<usize> {
        if entry >= self.entry_count() || mark >= self.entry_len(entry) {
            return None;
        }
        Some((0..entry).map(|e| self.entry_len(e)).sum::<usize>() + mark)
    }
}

impl MatchLayout for [usize] {
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn entry_len(&self, entry: usize) -> usize {
        self.get(entry).copied().unwrap_or(0)
    }
}

/// A focused match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    entry: usize,
    mark: usize,
    global: usize,
}

impl Position {
    const FIRST: Position = Position {
        entry: 0,
        mark: 0,
        global: 0,
    };

    fn last(layout: &(impl MatchLayout + ?Sized)) -> Self {
        let entry = layout.entry_count() - 1;
        Position {
            entry,
            mark: layout.entry_len(entry) - 1,
            global: layout.match_count() - 1,
        }
    }

    /// Index of the result entry (node) holding the match.
    pub fn entry(&self) -> usize {
        self.entry
    }

    /// Index of the match inside its entry.
    pub fn mark(&self) -> usize {
        self.mark
    }

    /// Index of the match in the flattened sequence of all matches.
    pub fn global(&self) -> usize {
        self.global
    }

    /// One-based number for "match N of M" display.
    pub fn ordinal(&self) -> usize {
        self.global + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Outcome of moving the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub position: Position,
    /// The move left the end (or start) of an entry, or started from unset,
    /// so the focused node may have changed.
    pub crossed_boundary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Unset,
    Positioned(Position),
}

impl Cursor {
    pub fn position(&self) -> Option<Position> {
        match self {
            Cursor::Unset => None,
            Cursor::Positioned(p) => Some(*p),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Cursor::Unset)
    }

    /// Where the cursor would move to. `None` when there is nothing to visit.
    pub fn step(&self, layout: &(impl MatchLayout + ?Sized), direction: Direction) -> Option<Step> {
        if layout.entry_count() == 0 {
            return None;
        }

        let current = match self {
            Cursor::Positioned(p) if p.entry < layout.entry_count() => *p,
            _ => {
                let position = match direction {
                    Direction::Forward => Position::FIRST,
                    Direction::Backward => Position::last(layout),
                };
                return Some(Step {
                    position,
                    crossed_boundary: true,
                });
            }
        };

        let step = match direction {
            Direction::Forward => {
                if current.mark + 1 >= layout.entry_len(current.entry) {
                    let position = if current.entry + 1 >= layout.entry_count() {
                        Position::FIRST
                    } else {
                        Position {
                            entry: current.entry + 1,
                            mark: 0,
                            global: current.global + 1,
                        }
                    };
                    Step {
                        position,
                        crossed_boundary: true,
                    }
                } else {
                    Step {
                        position: Position {
                            mark: current.mark + 1,
                            global: current.global + 1,
                            ..current
                        },
                        crossed_boundary: false,
                    }
                }
            }
            Direction::Backward => {
                if current.mark == 0 {
                    let position = if current.entry == 0 {
                        Position::last(layout)
                    } else {
                        let entry = current.entry - 1;
                        Position {
                            entry,
                            mark: layout.entry_len(entry) - 1,
                            global: current.global - 1,
                        }
                    };
                    Step {
                        position,
                        crossed_boundary: true,
                    }
                } else {
                    Step {
                        position: Position {
                            mark: current.mark - 1,
                            global: current.global - 1,
                            ..current
                        },
                        crossed_boundary: false,
                    }
                }
            }
        };
        Some(step)
    }

    /// The only way to position the cursor.
    pub(crate) fn place(&mut self, layout: &(impl MatchLayout + ?Sized), position: Position) {
        debug_assert_eq!(
            layout.global_index(position.entry, position.mark),
            Some(position.global),
            "cursor position out of sync with the result table"
        );
        *self = Cursor::Positioned(position);
    }

    pub(crate) fn reset(&mut self) {
        *self = Cursor::Unset;
    }
}
