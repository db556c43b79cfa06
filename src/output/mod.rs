//! Destinations for rendered log lines.
//!
//! The logger owns exactly one output at a time and holds a lock around every write, so
//! implementations never see two records at once.

mod terminal;
mod writer;

pub use terminal::TerminalOutput;
pub use writer::{SharedBuffer, WriterOutput};

use crate::fmt::{Color, level_color};
use crate::level::Level;
use chrono::{DateTime, Local};
use serde::Deserialize;
use std::io::Write;
use std::panic::Location;

/// `strftime` pattern for the line prefix: `2024/01/31 14:05:09`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Everything an output needs to render one line.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: Level,
    pub timestamp: DateTime<Local>,
    /// Where the public logging function was invoked.
    pub location: &'a Location<'a>,
    pub message: &'a str,
}

impl LogRecord<'_> {
    /// Final path component of the call site, so lines stay short regardless of workspace layout.
    #[must_use]
    pub fn short_file(&self) -> &str {
        let file = self.location.file();
        file.rsplit(['/', '\\']).next().unwrap_or(file)
    }

    /// `YYYY/MM/DD HH:MM:SS file:line: [LEVEL] message`, with the bracketed part colored on request.
    #[must_use]
    pub fn render(&self, colors: bool) -> String {
        let timestamp = self.timestamp.format(TIMESTAMP_FORMAT);
        let file = self.short_file();
        let line = self.location.line();
        let label = self.level.label();
        let message = self.message;

        if colors {
            let color = level_color(self.level).fg_ansi();
            let reset = Color::RESET;
            format!("{timestamp} {file}:{line}: {color}[{label}] {message}{reset}")
        } else {
            format!("{timestamp} {file}:{line}: [{label}] {message}")
        }
    }
}

/// Writes the rendered record and its newline in one call so a line is never split.
pub(crate) fn write_line(
    writer: &mut dyn Write,
    record: &LogRecord<'_>,
    colors: bool,
) -> Result<(), crate::Error> {
    let mut line = record.render(colors);
    line.push('\n');
    writer.write_all(line.as_bytes())?;
    Ok(())
}

/// Standard stream used by [`TerminalOutput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
}

/// A sink for rendered records.
pub trait Output: Send {
    /// Renders and writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying sink. The logger discards them.
    fn write(&mut self, record: &LogRecord<'_>) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&mut self) -> Result<(), crate::Error>;
}

impl<O: Output + ?Sized> Output for Box<O> {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        (**self).write(record)
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}
