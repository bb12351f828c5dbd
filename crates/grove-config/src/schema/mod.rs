//! Configuration schema types for Grove.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod search;
mod view;

pub use logging::*;
pub use search::*;
pub use view::*;

use grove_search::SessionOptions;
use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Grove.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroveConfig {
    pub search: SearchConfig,
    pub view: ViewConfig,
    pub logging: LoggingConfig,
}

impl GroveConfig {
    /// Session options built from the `[search]` and `[view]` sections.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            focal_class: self.search.focal_class().map(str::to_string),
            include_root: self.search.include_root,
            view_policy: self.view.policy,
            reveal_focal_mark: self.view.reveal_focal_mark,
        }
    }
}
