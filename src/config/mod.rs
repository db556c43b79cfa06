//! Logger settings deserialized from a TOML string.
//!
//! There is no config file: termlog reads no files and no environment variables. The caller
//! passes the TOML text to [`Config::from_toml_str`], typically a table embedded in its own
//! settings, and applies the result with [`Logger::from_config`](crate::Logger::from_config)
//! or [`init_from_config`](crate::init_from_config).
//!
//! ```toml
//! [general]
//! level = "warn"
//!
//! [terminal]
//! target = "stderr"
//! colors = "never"
//! ```

mod structs;

pub use structs::{GeneralConfig, TerminalConfig};

use crate::level::Level;
use serde::Deserialize;

/// Every section is optional; an empty document yields the defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
}

impl Config {
    /// Parses a TOML document.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on syntax errors or unknown enum values.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Unknown names fall back to Error, matching `set_log_level`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        Level::from_name(&self.general.level)
    }
}
