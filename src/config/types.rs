// Configuration types module
// Defines the handler configuration and its defaults

use serde::{Deserialize, Serialize};

/// Static file handler configuration
///
/// Fixed when the handler is built and never changed afterwards.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Directory requests are resolved against (absolute or relative)
    pub root: String,
    /// Answer requests resolving outside `root` with 404 instead of reading them
    #[serde(default = "default_true")]
    pub confine_to_root: bool,
    /// Include the I/O error code in 500 response bodies
    #[serde(default = "default_true")]
    pub expose_error_codes: bool,
    /// Write one access log line per request
    #[serde(default)]
    pub access_log: bool,
    /// Access log format: `common`, `combined`, `json` or a `$variable` template
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_true() -> bool {
    true
}

fn default_access_log_format() -> String {
    "common".to_string()
}

impl HandlerConfig {
    /// Configuration with defaults for everything but the root directory
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            confine_to_root: default_true(),
            expose_error_codes: default_true(),
            access_log: false,
            access_log_format: default_access_log_format(),
        }
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
