//! `termlog` - minimal leveled, colorized console logger.
//!
//! One process-wide logger holds a severity threshold and an output. The level macros
//! check the threshold, build the message from their arguments, and write a single line:
//!
//! ```text
//! 2024/01/31 14:05:09 main.rs:12: [INFO] Processed 42 items
//! ```
//!
//! The bracketed label and message are colored per level when the output is a terminal.
//!
//! # Example
//!
//! ```
//! use termlog::{Level, debug, info, warning};
//!
//! termlog::set_level(Level::Info);
//! debug!("filtered out");
//! info!("Processed %d items", 42);
//! warning!("disk at %.1f%%", 93.25);
//!
//! let err = std::io::Error::other("connection reset");
//! termlog::error!(err);
//! ```
//!
//! Message rules:
//! - no arguments: empty message
//! - one argument: errors print their description, strings print verbatim, other values print
//!   their natural rendering
//! - a leading string with more arguments: printf-style template (`%d`, `%s`, `%v`, `%x`, ...)
//! - anything else: the whole argument list, space separated in brackets
//!
//! # Features
//!
//! - `cli` (default): the `termlog` command-line binary

pub mod config;
pub mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

pub use config::Config;
pub use error::Error;
pub use fmt::{Arg, ToArg};
pub use global::{
    debug, enabled, error, error_f, flush, info, init, init_from_config, init_with, level, logger,
    set_exit_hook, set_level, set_log_level, set_output, warning,
};
pub use level::Level;
pub use logger::{ExitHook, FATAL_EXIT_CODE, Logger, LoggerBuilder};
pub use output::{LogRecord, Output, SharedBuffer, Target, TerminalOutput, WriterOutput};

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
