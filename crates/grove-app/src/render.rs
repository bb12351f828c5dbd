//! Plain-text output for a [`Report`].

use std::fmt::Write;

use crate::run::Report;

pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} matches for {:?} in {} nodes",
        report.match_count,
        report.query,
        report.results.len()
    );
    for row in &report.results {
        let _ = writeln!(out, "  {} ({})", row.title, row.matches);
    }
    for step in &report.steps {
        let _ = writeln!(
            out,
            "match {}/{} in {}",
            step.ordinal, report.match_count, step.title
        );
    }
    if let Some(focal) = &report.focal {
        let _ = writeln!(out, "\n[{}]\n{}", focal.title, focal.rendered);
    }
    out
}
