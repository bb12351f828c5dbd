use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a node in a document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// How strictly an occurrence has to line up with word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    /// Any substring occurrence matches.
    #[default]
    Partially,
    /// Only whole-word occurrences match.
    Exactly,
}

/// Options handed to the highlight engine with every search.
///
/// The search session never interprets these; they travel untouched from
/// the caller to each bound engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkOptions {
    pub case_sensitive: bool,
    pub accuracy: Accuracy,
    /// Split the search string on whitespace and mark every term on its own.
    pub separate_word_search: bool,
}

impl MarkOptions {
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    pub fn accuracy(mut self, accuracy: Accuracy) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn separate_word_search(mut self, yes: bool) -> Self {
        self.separate_word_search = yes;
        self
    }
}

/// When a cursor step asks the owning node to come into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPolicy {
    /// Only when the cursor crosses into another node (or wraps).
    #[default]
    OnBoundary,
    /// On every step, even within the same node.
    EveryStep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_display() {
        assert_eq!(NodeId(12).to_string(), "node-12");
    }

    #[test]
    fn node_id_ordering() {
        assert!(NodeId(1) < NodeId(2));
    }

    #[test]
    fn mark_options_defaults() {
        let opts = MarkOptions::default();
        assert!(!opts.case_sensitive);
        assert_eq!(opts.accuracy, Accuracy::Partially);
        assert!(!opts.separate_word_search);
    }

    #[test]
    fn mark_options_builder() {
        let opts = MarkOptions::default()
            .case_sensitive(true)
            .accuracy(Accuracy::Exactly)
            .separate_word_search(true);
        assert!(opts.case_sensitive);
        assert_eq!(opts.accuracy, Accuracy::Exactly);
        assert!(opts.separate_word_search);
    }

    #[test]
    fn accuracy_serializes_lowercase() {
        let json = serde_json::to_string(&Accuracy::Exactly).unwrap();
        assert_eq!(json, "\"exactly\"");
    }

    #[test]
    fn view_policy_serializes_snake_case() {
        let json = serde_json::to_string(&ViewPolicy::EveryStep).unwrap();
        assert_eq!(json, "\"every_step\"");
        assert_eq!(ViewPolicy::default(), ViewPolicy::OnBoundary);
    }

    #[test]
    fn mark_options_partial_toml() {
        let opts: MarkOptions = toml::from_str("accuracy = \"exactly\"").unwrap();
        assert_eq!(opts.accuracy, Accuracy::Exactly);
        assert!(!opts.case_sensitive);
    }
}
