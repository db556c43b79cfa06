//! CLI module for termlog.
//!
//! This module provides the command-line interface using Clap.

mod value;

pub use value::CliValue;

use crate::fmt::{Arg, ColorMode, ToArg};
use crate::level::Level;
use crate::logger::Logger;
use crate::output::Target;
use clap::Parser;
use std::process::ExitCode;

/// Which entry point the message goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    /// Error, then exit with status 1.
    Fatal,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error | LogLevel::Fatal => Self::Error,
        }
    }
}

/// Color choice for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorArg {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// termlog - Print one leveled log line.
#[derive(Debug, Parser)]
#[command(name = "termlog", version, about = "Print one leveled log line")]
pub struct Cli {
    /// Threshold: debug|d, info|i, warning|warn|w; any other value means error
    #[arg(long, value_name = "NAME", default_value = "debug")]
    pub log_level: String,
    /// When to emit ANSI colors
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,
    /// Write to stderr instead of stdout
    #[arg(long)]
    pub stderr: bool,
    /// Level of the line
    #[arg(value_enum)]
    pub level: LogLevel,
    /// Message, or a %-template followed by its arguments
    pub args: Vec<String>,
}

impl Cli {
    /// The first argument stays text so it can act as a template; the rest are typed.
    #[must_use]
    pub fn values(&self) -> Vec<CliValue> {
        self.args
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                if i == 0 {
                    CliValue::Str(raw.clone())
                } else {
                    CliValue::parse(raw)
                }
            })
            .collect()
    }

    #[must_use]
    pub fn build_logger(&self) -> Logger {
        let target = if self.stderr {
            Target::Stderr
        } else {
            Target::Stdout
        };
        let logger = Logger::builder()
            .terminal()
            .target(target)
            .colors(self.color.into())
            .done()
            .build();
        logger.set_level_from_name(&self.log_level);
        logger
    }
}

/// Installs the logger described by `cli` globally and emits the line.
///
/// Returns failure only for `fatal`, and only if the exit hook let the call return.
#[track_caller]
pub fn run(cli: &Cli) -> ExitCode {
    // A fresh process has no global logger yet; if it does, keep it and only apply the level.
    if crate::init_with(cli.build_logger()).is_err() {
        crate::set_log_level(&cli.log_level);
    }

    let values = cli.values();
    let args: Vec<Arg<'_>> = values.iter().map(ToArg::to_arg).collect();

    match cli.level {
        LogLevel::Fatal => {
            crate::error_f(&args);
            ExitCode::FAILURE
        }
        level => {
            crate::logger().log(level.into(), &args);
            crate::flush();
            ExitCode::SUCCESS
        }
    }
}
