//! Output over any `io::Write`: log files, sockets, in-memory buffers.

use super::{LogRecord, Output, write_line};
use crate::fmt::ColorMode;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Wraps a writer. Colors default to off since an arbitrary writer is not a terminal.
#[derive(Debug)]
pub struct WriterOutput<W> {
    writer: W,
    color_mode: ColorMode,
}

impl<W: Write + Send> WriterOutput<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            color_mode: ColorMode::Never,
        }
    }

    /// `Auto` behaves like `Never` here; use `Always` to keep escape codes in the stream.
    #[must_use]
    pub const fn colors(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Output for WriterOutput<W> {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        let colors = self.color_mode.resolve(false);
        write_line(&mut self.writer, record, colors)
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Cloneable in-memory writer; every clone appends to the same bytes.
///
/// Hand one clone to a [`WriterOutput`] and keep another to read back what was logged.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Returns the contents and empties the buffer.
    pub fn take(&self) -> String {
        let mut bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        let taken = std::mem::take(&mut *bytes);
        String::from_utf8_lossy(&taken).into_owned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
