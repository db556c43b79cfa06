//! Configuration struct definitions.

use crate::fmt::ColorMode;
use crate::output::Target;
use serde::Deserialize;

/// Settings that apply regardless of where lines are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Threshold name, resolved with the same lossy rules as `set_log_level`.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// `stdout` or `stderr`.
    pub target: Target,
    /// `auto`, `always` or `never`.
    pub colors: ColorMode,
}
