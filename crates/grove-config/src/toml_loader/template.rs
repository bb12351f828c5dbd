//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Grove Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[search]
# focal_class = "focal"          # CSS class on the focused match; "" disables it
# include_root = false           # search the root node too
# case_sensitive = false
# accuracy = "partially"         # partially, exactly
# separate_word_search = false   # mark each whitespace-separated term

[view]
# policy = "on_boundary"         # on_boundary, every_step
# reveal_focal_mark = true       # scroll the focused match into view

[logging]
# level = "info"                 # trace, debug, info, warn, error
"##
}
