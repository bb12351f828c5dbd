//! Shared checks used by the section validators.

use regex::Regex;
use std::sync::LazyLock;

/// A single CSS class name: no whitespace, no leading digit.
pub(crate) static CSS_IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[_a-zA-Z][_a-zA-Z0-9-]*$").unwrap());

/// Push an error if `value` is not a usable CSS class name.
pub(crate) fn validate_css_identifier(errors: &mut Vec<String>, name: &str, value: &str) {
    if !CSS_IDENT_RE.is_match(value) {
        errors.push(format!("{name} = {value:?} is not a valid CSS class name"));
    }
}

/// Push an error if `value` is not one of `allowed` (case-insensitive).
pub(crate) fn validate_one_of(errors: &mut Vec<String>, name: &str, value: &str, allowed: &[&str]) {
    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        errors.push(format!(
            "{name} = {value:?} must be one of {}",
            allowed.join(", ")
        ));
    }
}
