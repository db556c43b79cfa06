//! Stepwise construction of a [`Logger`], mostly for tests and embedders that do not want
//! the process-wide instance.

use super::{ExitHook, Logger, exit_process};
use crate::fmt::ColorMode;
use crate::level::Level;
use crate::output::{Output, Target, TerminalOutput};
use std::sync::atomic::AtomicU8;
use std::sync::{Arc, Mutex, RwLock};

pub struct LoggerBuilder {
    pub(super) level: Level,
    pub(super) output: Option<Box<dyn Output>>,
    pub(super) exit_hook: Option<ExitHook>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Debug threshold: everything passes until the application says otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            output: None,
            exit_hook: None,
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Terminal output has its own knobs (stream, colors), configured on a sub-builder.
    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            output: TerminalOutput::new(),
        }
    }

    /// Any other sink, e.g. a [`WriterOutput`](crate::output::WriterOutput) over a file.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    /// Tests swap in a recording closure so fatal calls do not end the test binary.
    #[must_use]
    pub fn exit_hook(mut self, hook: impl Fn(i32) + Send + Sync + 'static) -> Self {
        self.exit_hook = Some(Arc::new(hook));
        self
    }

    /// Without an explicit output the logger writes to stdout.
    #[must_use]
    pub fn build(self) -> Logger {
        let output: Box<dyn Output> = match self.output {
            Some(output) => output,
            None => Box::new(TerminalOutput::new()),
        };
        let exit_hook: ExitHook = match self.exit_hook {
            Some(hook) => hook,
            None => Arc::new(exit_process),
        };

        Logger {
            threshold: AtomicU8::new(self.level as u8),
            output: Mutex::new(output),
            exit_hook: RwLock::new(exit_hook),
        }
    }
}

pub struct TerminalBuilder {
    parent: LoggerBuilder,
    output: TerminalOutput,
}

impl TerminalBuilder {
    #[must_use]
    pub const fn target(mut self, target: Target) -> Self {
        self.output = self.output.target(target);
        self
    }

    /// Piped output and color-incapable terminals break on ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, mode: ColorMode) -> Self {
        self.output = self.output.colors(mode);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to the logger builder.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.output = Some(Box::new(self.output));
        self.parent
    }
}
