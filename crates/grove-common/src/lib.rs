pub mod errors;
pub mod types;

pub use errors::{ConfigError, GroveError, TreeError};
pub use types::{Accuracy, MarkOptions, NodeId, ViewPolicy};

pub type Result<T> = std::result::Result<T, GroveError>;
