//! View configuration types.

use grove_common::ViewPolicy;
use serde::{Deserialize, Serialize};

/// How stepping through matches moves the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub policy: ViewPolicy,
    pub reveal_focal_mark: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            policy: ViewPolicy::OnBoundary,
            reveal_focal_mark: true,
        }
    }
}
