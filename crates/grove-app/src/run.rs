//! One search over a document, stepped a few times, collected as a report.

use std::cell::Cell;
use std::rc::Rc;

use grove_common::{Accuracy, MarkOptions};
use grove_config::GroveConfig;
use grove_search::SearchSession;
use grove_tree::{DocumentTree, TextHighlighter, TickQueue};
use tracing::{debug, warn};

use crate::cli::Args;

/// What the session found and where the cursor went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub query: String,
    pub match_count: usize,
    pub results: Vec<ResultRow>,
    pub steps: Vec<StepRow>,
    pub focal: Option<FocalView>,
}

/// One node with matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub title: String,
    pub matches: usize,
}

/// Where one cursor step landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    pub ordinal: usize,
    pub title: String,
}

/// The node holding the focal mark after the last step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocalView {
    pub title: String,
    pub rendered: String,
}

/// Config options with command-line flags layered on top.
pub fn mark_options(args: &Args, config: &GroveConfig) -> MarkOptions {
    let mut options = config.search.mark_options();
    if args.case_sensitive {
        options.case_sensitive = true;
    }
    if args.exact {
        options.accuracy = Accuracy::Exactly;
    }
    if args.separate_words {
        options.separate_word_search = true;
    }
    options
}

/// Search `tree` for the query in `args` and step the cursor.
pub fn run(args: &Args, config: &GroveConfig, tree: DocumentTree) -> Report {
    let queue = TickQueue::new();
    let engine = if args.deferred {
        TextHighlighter::deferred(&queue)
    } else {
        TextHighlighter::immediate()
    };
    let session = SearchSession::new(tree, engine, config.session_options());

    let finished = Rc::new(Cell::new(false));
    let flag = Rc::clone(&finished);
    session.search(args.query.as_str(), &mark_options(args, config), move || {
        flag.set(true)
    });
    let ticks = queue.run_reversed();
    debug!(ticks, "search settled");
    if !finished.get() {
        warn!("search did not complete");
    }

    let entries = session.results();
    let results = entries
        .iter()
        .map(|entry| ResultRow {
            title: entry.node.title().to_string(),
            matches: entry.marks.len(),
        })
        .collect();

    let mut steps = Vec::new();
    for _ in 0..args.steps {
        if args.backward {
            session.prev();
        } else {
            session.next();
        }
        let Some(position) = session.focal_position() else {
            break;
        };
        let Some(entry) = entries.get(position.entry()) else {
            warn!(entry = position.entry(), "focal entry missing from results");
            break;
        };
        steps.push(StepRow {
            ordinal: position.ordinal(),
            title: entry.node.title().to_string(),
        });
    }

    let focal = session.focal_position().and_then(|position| {
        let node = &entries.get(position.entry())?.node;
        node.region().map(|region| FocalView {
            title: node.title().to_string(),
            rendered: region.render(),
        })
    });

    Report {
        query: args.query.clone(),
        match_count: session.match_count(),
        results,
        steps,
        focal,
    }
}
