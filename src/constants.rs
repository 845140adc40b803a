pub const TRUE_LABEL: &str = "true";
pub const FALSE_LABEL: &str = "false";

pub const DEFAULT_TRUE_OPTIONS: &[&str] = &[TRUE_LABEL];
pub const DEFAULT_FALSE_OPTIONS: &[&str] = &[FALSE_LABEL];

pub const NO_MATCH_MESSAGE: &str = "value does not match options";
pub const THIRD_OPTIONS_MISSING_MESSAGE: &str = "third option is nil";
pub const EMPTY_LABEL_MESSAGE: &str = "options has empty values";
