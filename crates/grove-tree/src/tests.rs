//! Search sessions over a real document tree and text highlighter.

use std::cell::Cell;
use std::rc::Rc;

use grove_common::{Accuracy, MarkOptions, NodeId, ViewPolicy};
use grove_search::{SearchSession, SessionOptions};

use crate::document::from_json;
use crate::{DocumentTree, TextHighlighter, TickQueue};

type Session = SearchSession<DocumentTree, TextHighlighter>;

const DOC: &str = r#"{
    "title": "Field notes",
    "children": [
        { "title": "Morning", "content": "A fox crossed. Then a second fox." },
        { "title": "Collapsed", "content": null, "children": [
            { "title": "Nested note", "content": "no animals here" }
        ]},
        { "title": "Evening", "content": "The Fox slept." },
        { "title": "Night", "content": "Quiet." }
    ]
}"#;

fn session(engine: TextHighlighter, options: SessionOptions) -> Session {
    let tree = from_json(DOC).unwrap();
    SearchSession::new(tree, engine, options)
}

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let hits = Rc::new(Cell::new(0));
    let inner = Rc::clone(&hits);
    (hits, move || inner.set(inner.get() + 1))
}

fn render(session: &Session, id: NodeId) -> String {
    session.tree().region(id).unwrap().render()
}

fn focal_title(session: &Session) -> Option<String> {
    let position = session.focal_position()?;
    let results = session.results();
    Some(results[position.entry()].node.title().to_string())
}

#[test]
fn search_and_step_through_document() {
    let session = session(TextHighlighter::immediate(), SessionOptions::default());
    let (done, on_done) = counter();
    session.search("fox", &MarkOptions::default(), on_done);

    assert_eq!(done.get(), 1);
    assert_eq!(session.match_count(), 3);
    let titles: Vec<_> = session
        .results()
        .iter()
        .map(|r| r.node.title().to_string())
        .collect();
    assert_eq!(titles, vec!["Morning", "Evening"]);

    session.next();
    assert_eq!(session.focal_position().unwrap().ordinal(), 1);
    assert_eq!(
        render(&session, NodeId(2)),
        "A <mark class=\"focal\">fox</mark> crossed. Then a second <mark>fox</mark>."
    );

    session.next();
    session.next();
    assert_eq!(focal_title(&session).as_deref(), Some("Evening"));
    assert_eq!(render(&session, NodeId(5)), "The <mark class=\"focal\">Fox</mark> slept.");
    assert_eq!(
        render(&session, NodeId(2)),
        "A <mark>fox</mark> crossed. Then a second <mark>fox</mark>."
    );

    session.next();
    assert_eq!(session.focal_position().unwrap().global(), 0);
    assert_eq!(focal_title(&session).as_deref(), Some("Morning"));
}

#[test]
fn view_follows_entry_boundaries() {
    let session = session(TextHighlighter::immediate(), SessionOptions::default());
    session.search("fox", &MarkOptions::default(), || {});
    for _ in 0..4 {
        session.next();
    }
    assert_eq!(
        session.tree().view().requests(),
        vec![NodeId(2), NodeId(5), NodeId(2)]
    );
}

#[test]
fn every_step_policy_brings_each_match() {
    let options = SessionOptions {
        view_policy: ViewPolicy::EveryStep,
        ..SessionOptions::default()
    };
    let session = session(TextHighlighter::immediate(), options);
    session.search("fox", &MarkOptions::default(), || {});
    session.next();
    session.next();
    session.prev();
    assert_eq!(session.tree().view().request_count(), 3);
}

#[test]
fn reveal_scrolls_region_to_focal_mark() {
    let session = session(TextHighlighter::immediate(), SessionOptions::default());
    session.search("fox", &MarkOptions::default(), || {});
    session.next();
    session.next();
    let region = session.tree().region(NodeId(2)).unwrap();
    assert_eq!(region.scroll_offset(), Some(29));
}

#[test]
fn prev_from_unset_lands_on_last_match() {
    let session = session(TextHighlighter::immediate(), SessionOptions::default());
    session.search("fox", &MarkOptions::default(), || {});
    session.prev();
    let position = session.focal_position().unwrap();
    assert_eq!(position.ordinal(), 3);
    assert_eq!(session.focal_mark().unwrap().text(), "Fox");
}

#[test]
fn unrendered_nodes_are_not_searched() {
    let mut tree = from_json(DOC).unwrap();
    tree.set_content(NodeId(2), None).unwrap();
    let session = SearchSession::new(tree, TextHighlighter::immediate(), SessionOptions::default());
    session.search("fox", &MarkOptions::default(), || {});
    let ids: Vec<_> = session.results().iter().map(|r| r.node.id()).collect();
    assert_eq!(ids, vec![NodeId(5)]);

    session.search("animals", &MarkOptions::default(), || {});
    assert_eq!(session.match_count(), 1);
    assert_eq!(session.results()[0].node.title(), "Nested note");
}

#[test]
fn empty_result_leaves_cursor_unset() {
    let session = session(TextHighlighter::immediate(), SessionOptions::default());
    session.search("zebra", &MarkOptions::default(), || {});
    assert_eq!(session.match_count(), 0);
    assert!(session.results().is_empty());

    session.next();
    assert!(session.focal_position().is_none());
    assert_eq!(session.tree().view().request_count(), 0);
}

#[test]
fn mark_options_reach_the_engine() {
    let session = session(TextHighlighter::immediate(), SessionOptions::default());
    session.search("Fox", &MarkOptions::default().case_sensitive(true), || {});
    assert_eq!(session.match_count(), 1);

    session.search("fox cross", &MarkOptions::default().separate_word_search(true), || {});
    assert_eq!(session.match_count(), 4);

    let exact = MarkOptions::default().accuracy(Accuracy::Exactly);
    session.search("cross", &exact, || {});
    assert_eq!(session.match_count(), 0);
}

#[test]
fn deferred_reversed_delivery_keeps_tree_order() {
    let queue = TickQueue::new();
    let session = session(TextHighlighter::deferred(&queue), SessionOptions::default());
    let (done, on_done) = counter();
    session.search("fox", &MarkOptions::default(), on_done);

    assert!(session.is_pending());
    assert_eq!(done.get(), 0);
    assert!(queue.run_reversed() > 0);

    assert_eq!(done.get(), 1);
    assert!(!session.is_pending());
    let ids: Vec<_> = session.results().iter().map(|r| r.node.id()).collect();
    assert_eq!(ids, vec![NodeId(2), NodeId(5)]);
    assert_eq!(session.match_count(), 3);
}

#[test]
fn deferred_research_replaces_marks() {
    let queue = TickQueue::new();
    let session = session(TextHighlighter::deferred(&queue), SessionOptions::default());
    session.search("fox", &MarkOptions::default(), || {});
    queue.run_until_idle();
    session.next();

    let (done, on_done) = counter();
    session.search("quiet", &MarkOptions::default(), on_done);
    assert!(session.results().is_empty());
    assert!(session.focal_position().is_none());
    queue.run_until_idle();

    assert_eq!(done.get(), 1);
    assert_eq!(session.match_count(), 1);
    assert_eq!(session.tree().region(NodeId(2)).unwrap().mark_count(), 0);
    assert_eq!(render(&session, NodeId(6)), "<mark>Quiet</mark>.");
}

#[test]
fn superseded_deferred_search_leaves_no_marks() {
    let queue = TickQueue::new();
    let session = session(TextHighlighter::deferred(&queue), SessionOptions::default());
    let (first, on_first) = counter();
    let (second, on_second) = counter();
    session.search("fox", &MarkOptions::default(), on_first);
    session.search("slept", &MarkOptions::default(), on_second);
    queue.run_until_idle();

    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
    assert_eq!(session.match_count(), 1);
    assert_eq!(session.tree().region(NodeId(2)).unwrap().mark_count(), 0);
    assert_eq!(render(&session, NodeId(5)), "The Fox <mark>slept</mark>.");
}

#[test]
fn clear_removes_every_mark() {
    let session = session(TextHighlighter::immediate(), SessionOptions::default());
    session.search("fox", &MarkOptions::default(), || {});
    session.next();

    let (done, on_done) = counter();
    session.clear(on_done);
    assert_eq!(done.get(), 1);
    assert_eq!(session.match_count(), 0);
    assert!(session.focal_mark().is_none());
    assert_eq!(render(&session, NodeId(2)), "A fox crossed. Then a second fox.");
    assert_eq!(render(&session, NodeId(5)), "The Fox slept.");
}

#[test]
fn research_after_deferred_clear_restores_every_mark() {
    let queue = TickQueue::new();
    let session = session(TextHighlighter::deferred(&queue), SessionOptions::default());
    session.search("fox", &MarkOptions::default(), || {});
    queue.run_until_idle();

    session.clear(|| {});
    let (done, on_done) = counter();
    session.search("fox", &MarkOptions::default(), on_done);
    queue.run_reversed();

    assert_eq!(done.get(), 1);
    assert_eq!(session.match_count(), 3);
    assert_eq!(session.tree().region(NodeId(2)).unwrap().mark_count(), 2);
    assert_eq!(render(&session, NodeId(5)), "The <mark>Fox</mark> slept.");
}

#[test]
fn repeated_deferred_search_keeps_one_set_of_marks() {
    let queue = TickQueue::new();
    let session = session(TextHighlighter::deferred(&queue), SessionOptions::default());
    let (first, on_first) = counter();
    let (second, on_second) = counter();
    session.search("fox", &MarkOptions::default(), on_first);
    session.search("fox", &MarkOptions::default(), on_second);
    queue.run_until_idle();

    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
    assert_eq!(session.match_count(), 3);
    assert_eq!(
        render(&session, NodeId(2)),
        "A <mark>fox</mark> crossed. Then a second <mark>fox</mark>."
    );
}

#[test]
fn second_clear_waits_for_pending_unmarks() {
    let queue = TickQueue::new();
    let session = session(TextHighlighter::deferred(&queue), SessionOptions::default());
    session.search("fox", &MarkOptions::default(), || {});
    queue.run_until_idle();

    let (first, on_first) = counter();
    let (second, on_second) = counter();
    session.clear(on_first);
    session.clear(on_second);
    assert_eq!(second.get(), 0);
    assert_eq!(session.tree().region(NodeId(2)).unwrap().mark_count(), 2);

    queue.run_until_idle();
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
    assert_eq!(session.tree().region(NodeId(2)).unwrap().mark_count(), 0);
    assert_eq!(session.tree().region(NodeId(5)).unwrap().mark_count(), 0);
}

#[test]
fn include_root_searches_root_content() {
    let mut tree = DocumentTree::new("root", Some("fox at the root".into()));
    tree.add_child(NodeId(1), "child", Some("fox".into())).unwrap();
    let options = SessionOptions {
        include_root: true,
        ..SessionOptions::default()
    };
    let session = SearchSession::new(tree, TextHighlighter::immediate(), options);
    session.search("fox", &MarkOptions::default(), || {});
    let ids: Vec<_> = session.results().iter().map(|r| r.node.id()).collect();
    assert_eq!(ids, vec![NodeId(1), NodeId(2)]);
}
