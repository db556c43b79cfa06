//! Stdout/stderr output, the default.

use super::{LogRecord, Output, Target, write_line};
use crate::fmt::ColorMode;
use std::io::{self, IsTerminal, Write};

/// Writes to stdout or stderr, coloring the label when the stream is a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutput {
    target: Target,
    color_mode: ColorMode,
}

impl TerminalOutput {
    /// Stdout with automatic color detection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: Target::Stdout,
            color_mode: ColorMode::Auto,
        }
    }

    #[must_use]
    pub const fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }
}

impl Output for TerminalOutput {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        match self.target {
            Target::Stdout => {
                let stdout = io::stdout();
                let colors = self.color_mode.resolve(stdout.is_terminal());
                write_line(&mut stdout.lock(), record, colors)
            }
            Target::Stderr => {
                let stderr = io::stderr();
                let colors = self.color_mode.resolve(stderr.is_terminal());
                write_line(&mut stderr.lock(), record, colors)
            }
        }
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        match self.target {
            Target::Stdout => io::stdout().flush()?,
            Target::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
