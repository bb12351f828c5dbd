//! Search configuration types.

use grove_common::{Accuracy, MarkOptions};
use serde::{Deserialize, Serialize};

/// Search behavior and the options passed to the highlight engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Class toggled on the focused mark. Empty disables focal styling.
    pub focal_class: String,
    pub include_root: bool,
    pub case_sensitive: bool,
    pub accuracy: Accuracy,
    pub separate_word_search: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            focal_class: "focal".into(),
            include_root: false,
            case_sensitive: false,
            accuracy: Accuracy::Partially,
            separate_word_search: false,
        }
    }
}

impl SearchConfig {
    pub fn focal_class(&self) -> Option<&str> {
        if self.focal_class.is_empty() {
            None
        } else {
            Some(&self.focal_class)
        }
    }

    pub fn mark_options(&self) -> MarkOptions {
        MarkOptions::default()
            .case_sensitive(self.case_sensitive)
            .accuracy(self.accuracy)
            .separate_word_search(self.separate_word_search)
    }
}
