//! Literal occurrence finding over plain text.

use std::ops::Range;

use grove_common::{Accuracy, MarkOptions};
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Byte ranges of every occurrence of `needle` in `text`, in document order
/// and never overlapping. When two terms overlap, the earlier (then longer)
/// occurrence wins.
pub fn find_ranges(text: &str, needle: &str, options: &MarkOptions) -> Vec<Range<usize>> {
    let terms: Vec<&str> = if options.separate_word_search {
        needle.split_whitespace().collect()
    } else if needle.is_empty() {
        Vec::new()
    } else {
        vec![needle]
    };

    let mut ranges = Vec::new();
    for term in terms {
        if let Some(re) = term_regex(term, options) {
            ranges.extend(re.find_iter(text).map(|m| m.range()));
        }
    }
    ranges.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut kept: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match kept.last() {
            Some(last) if range.start < last.end => {}
            _ => kept.push(range),
        }
    }
    kept
}

/// The term matched literally, honoring case and whole-word accuracy.
fn term_regex(term: &str, options: &MarkOptions) -> Option<Regex> {
    let escaped = regex::escape(term);
    let pattern = match options.accuracy {
        Accuracy::Partially => escaped,
        Accuracy::Exactly => format!(r"\b{escaped}\b"),
    };
    match RegexBuilder::new(&pattern)
        .case_insensitive(!options.case_sensitive)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("skipping search term {term:?}: {e}");
            None
        }
    }
}
