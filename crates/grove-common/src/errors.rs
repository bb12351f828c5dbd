use std::path::PathBuf;

use crate::types::NodeId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("document parse error: {0}")]
    ParseError(String),

    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("cannot remove the root node")]
    RootRemoval,
}

#[derive(Debug, thiserror::Error)]
pub enum GroveError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("search.focal_class is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: search.focal_class is empty"
        );
    }

    #[test]
    fn tree_error_display() {
        let err = TreeError::UnknownNode(NodeId(7));
        assert_eq!(err.to_string(), "unknown node: node-7");

        let err = TreeError::RootRemoval;
        assert_eq!(err.to_string(), "cannot remove the root node");

        let err = TreeError::ParseError("expected `title`".into());
        assert_eq!(err.to_string(), "document parse error: expected `title`");
    }

    #[test]
    fn grove_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: GroveError = config_err.into();
        assert!(matches!(err, GroveError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn grove_error_from_tree() {
        let err: GroveError = TreeError::UnknownNode(NodeId(3)).into();
        assert!(matches!(err, GroveError::Tree(_)));
        assert_eq!(err.to_string(), "unknown node: node-3");
    }

    #[test]
    fn grove_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GroveError = io_err.into();
        assert!(matches!(err, GroveError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn grove_error_other() {
        let err = GroveError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
