//! Logger construction from a parsed [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;

impl Logger {
    /// Threshold from `[general] level`, terminal stream and colors from `[terminal]`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::builder_from_config(config).build()
    }

    /// Like [`from_config`](Self::from_config) but leaves the builder open, e.g. to add an exit hook.
    #[must_use]
    pub fn builder_from_config(config: &Config) -> LoggerBuilder {
        LoggerBuilder::new()
            .level(config.parse_level())
            .terminal()
            .target(config.terminal.target)
            .colors(config.terminal.colors)
            .done()
    }

    /// Applies the threshold of `config` to an existing logger without touching its output.
    pub fn apply_level(&self, config: &Config) {
        self.set_level(config.parse_level());
    }
}
