//! The logger: a severity threshold, one output, and the hook used by fatal calls.
//!
//! All methods take `&self`, so one instance can be shared between threads (the global one
//! lives in a `static`). The threshold is atomic; the output sits behind a mutex that is held
//! for the whole write of a line.

mod builder;
mod from_config;

pub use builder::{LoggerBuilder, TerminalBuilder};

use crate::fmt::{Arg, build_message};
use crate::level::Level;
use crate::output::{LogRecord, Output};
use chrono::Local;
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Called by [`Logger::error_f`] after the line is written. The default exits the process.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// Status passed to the exit hook by fatal calls.
pub const FATAL_EXIT_CODE: i32 = 1;

pub(crate) fn exit_process(code: i32) {
    std::process::exit(code);
}

pub struct Logger {
    threshold: AtomicU8,
    output: Mutex<Box<dyn Output>>,
    exit_hook: RwLock<ExitHook>,
}

impl Default for Logger {
    /// Debug threshold, colored stdout, real process exit.
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::Acquire))
    }

    /// Calls issued after this returns observe the new threshold, from any thread.
    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Release);
    }

    /// Lossy name lookup, see [`Level::from_name`]. Unknown names select Error.
    pub fn set_level_from_name(&self, name: &str) {
        self.set_level(Level::from_name(name));
    }

    /// Whether a call at `level` would produce a line.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Replaces the output. The previous one is flushed and dropped.
    pub fn set_output(&self, output: impl Output + 'static) {
        let mut current = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = current.flush();
        *current = Box::new(output);
    }

    /// Replaces what [`error_f`](Self::error_f) does after logging.
    pub fn set_exit_hook(&self, hook: impl Fn(i32) + Send + Sync + 'static) {
        *self
            .exit_hook
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(hook);
    }

    /// Logs at `level`, attributing the line to the caller.
    ///
    /// Below the threshold this returns before rendering anything or reading the clock.
    #[track_caller]
    pub fn log(&self, level: Level, args: &[Arg<'_>]) {
        if self.enabled(level) {
            self.emit(level, Location::caller(), args);
        }
    }

    /// Same as [`log`](Self::log) with an explicit call site, for wrappers that capture their own.
    pub fn log_at(&self, level: Level, location: &Location<'_>, args: &[Arg<'_>]) {
        if self.enabled(level) {
            self.emit(level, location, args);
        }
    }

    #[track_caller]
    pub fn debug(&self, args: &[Arg<'_>]) {
        self.log(Level::Debug, args);
    }

    #[track_caller]
    pub fn info(&self, args: &[Arg<'_>]) {
        self.log(Level::Info, args);
    }

    #[track_caller]
    pub fn warning(&self, args: &[Arg<'_>]) {
        self.log(Level::Warning, args);
    }

    #[track_caller]
    pub fn error(&self, args: &[Arg<'_>]) {
        self.log(Level::Error, args);
    }

    /// Logs at Error, flushes, then calls the exit hook with [`FATAL_EXIT_CODE`].
    ///
    /// The line is written even if the threshold check would reject it; in practice it never
    /// does, since Error is the highest level. With the default hook this does not return.
    #[track_caller]
    pub fn error_f(&self, args: &[Arg<'_>]) {
        self.emit(Level::Error, Location::caller(), args);
        self.flush();

        // Clone out of the lock so a hook that logs or swaps hooks cannot deadlock.
        let hook: ExitHook = self
            .exit_hook
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        hook(FATAL_EXIT_CODE);
    }

    /// Flushes the output, ignoring errors.
    pub fn flush(&self) {
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = output.flush();
    }

    fn emit(&self, level: Level, location: &Location<'_>, args: &[Arg<'_>]) {
        let message = build_message(args);
        let record = LogRecord {
            level,
            timestamp: Local::now(),
            location,
            message: &message,
        };

        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = output.write(&record);
    }
}
