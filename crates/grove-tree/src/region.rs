//! Plain-text rendered regions and the marks placed inside them.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::{Rc, Weak};

use grove_search::Mark;

#[derive(Debug)]
struct RegionState {
    text: String,
    /// Sorted by start offset, never overlapping.
    marks: Vec<TextMark>,
    scroll_offset: Option<usize>,
}

/// Rendered content of one node. Cloning shares the region.
#[derive(Debug, Clone)]
pub struct TextRegion {
    state: Rc<RefCell<RegionState>>,
}

impl TextRegion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            state: Rc::new(RefCell::new(RegionState {
                text: text.into(),
                marks: Vec::new(),
                scroll_offset: None,
            })),
        }
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    /// Marks currently in the region, in document order.
    pub fn marks(&self) -> Vec<TextMark> {
        self.state.borrow().marks.clone()
    }

    pub fn mark_count(&self) -> usize {
        self.state.borrow().marks.len()
    }

    /// Byte offset the region was last scrolled to by a revealed mark.
    pub fn scroll_offset(&self) -> Option<usize> {
        self.state.borrow().scroll_offset
    }

    pub fn same_region(&self, other: &TextRegion) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Wrap each range in a mark. Ranges that overlap an existing mark or
    /// fall outside the text are skipped.
    pub(crate) fn insert_marks(&self, ranges: &[Range<usize>]) -> Vec<TextMark> {
        let mut state = self.state.borrow_mut();
        let mut created = Vec::new();
        for range in ranges {
            let Some(text) = state.text.get(range.clone()).map(str::to_string) else {
                continue;
            };
            if state.marks.iter().any(|m| overlaps(&m.state.range, range)) {
                continue;
            }
            let mark = TextMark {
                state: Rc::new(MarkState {
                    range: range.clone(),
                    text,
                    classes: RefCell::new(Vec::new()),
                    region: Rc::downgrade(&self.state),
                }),
            };
            let at = state
                .marks
                .partition_point(|m| m.state.range.start < range.start);
            state.marks.insert(at, mark.clone());
            created.push(mark);
        }
        created
    }

    pub(crate) fn remove_marks(&self, marks: &[TextMark]) {
        self.state
            .borrow_mut()
            .marks
            .retain(|m| !marks.contains(m));
    }

    /// The text with every mark wrapped in a `<mark>` tag carrying its classes.
    pub fn render(&self) -> String {
        let state = self.state.borrow();
        let mut out = String::with_capacity(state.text.len());
        let mut cursor = 0;
        for mark in &state.marks {
            let range = &mark.state.range;
            out.push_str(&state.text[cursor..range.start]);
            let classes = mark.state.classes.borrow();
            if classes.is_empty() {
                out.push_str("<mark>");
            } else {
                out.push_str(&format!("<mark class=\"{}\">", classes.join(" ")));
            }
            out.push_str(&state.text[range.clone()]);
            out.push_str("</mark>");
            cursor = range.end;
        }
        out.push_str(&state.text[cursor..]);
        out
    }
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

#[derive(Debug)]
struct MarkState {
    range: Range<usize>,
    text: String,
    classes: RefCell<Vec<String>>,
    region: Weak<RefCell<RegionState>>,
}

/// One highlighted occurrence inside a [`TextRegion`].
#[derive(Debug, Clone)]
pub struct TextMark {
    state: Rc<MarkState>,
}

impl TextMark {
    /// Byte range of the occurrence in the region text.
    pub fn range(&self) -> Range<usize> {
        self.state.range.clone()
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.classes.borrow().clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state.classes.borrow().iter().any(|c| c == class)
    }
}

impl PartialEq for TextMark {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Mark for TextMark {
    fn add_class(&self, class: &str) {
        let mut classes = self.state.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.state.classes.borrow_mut().retain(|c| c != class);
    }

    fn reveal(&self) {
        if let Some(region) = self.state.region.upgrade() {
            region.borrow_mut().scroll_offset = Some(self.state.range.start);
        }
    }
}
