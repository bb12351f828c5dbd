//! Configuration validation.
//!
//! Each section has its own check; this orchestrator runs them all and
//! collects errors into a single `ConfigError`.

mod helpers;


use crate::schema::{GroveConfig, LOG_LEVELS};
use grove_common::ConfigError;

use helpers::{validate_css_identifier, validate_one_of};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GroveConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_search(&mut errors, config);
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_search(errors: &mut Vec<String>, config: &GroveConfig) {
    if !config.search.focal_class.is_empty() {
        validate_css_identifier(errors, "search.focal_class", &config.search.focal_class);
    }
}

fn validate_logging(errors: &mut Vec<String>, config: &GroveConfig) {
    validate_one_of(errors, "logging.level", &config.logging.level, LOG_LEVELS);
}
