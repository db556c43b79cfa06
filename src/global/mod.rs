//! The process-wide logger behind the free functions and macros.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several entry points
//! race to log first. It is never torn down.

use crate::config::Config;
use crate::fmt::Arg;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::Output;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// The global logger, created with defaults on first use.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::new)
}

/// Forces creation of the default global logger. Later calls are no-ops.
pub fn init() {
    let _ = logger();
}

/// Installs `logger` as the global instance.
///
/// # Errors
/// Hands `logger` back if the global instance already exists (someone logged or initialized first).
pub fn init_with(logger: Logger) -> Result<(), Logger> {
    LOGGER.set(logger)
}

/// Installs a logger built from `config`; returns whether it took effect.
///
/// If the global logger already exists only the threshold is applied.
pub fn init_from_config(config: &Config) -> bool {
    let installed = init_with(Logger::from_config(config)).is_ok();
    if !installed {
        logger().apply_level(config);
    }
    installed
}

pub fn set_level(level: Level) {
    logger().set_level(level);
}

/// Sets the threshold by name; unrecognized names (including `"error"`) select Error.
pub fn set_log_level(name: &str) {
    logger().set_level_from_name(name);
}

#[must_use]
pub fn level() -> Level {
    logger().level()
}

#[must_use]
pub fn enabled(level: Level) -> bool {
    logger().enabled(level)
}

pub fn set_output(output: impl Output + 'static) {
    logger().set_output(output);
}

pub fn set_exit_hook(hook: impl Fn(i32) + Send + Sync + 'static) {
    logger().set_exit_hook(hook);
}

#[track_caller]
pub fn debug(args: &[Arg<'_>]) {
    logger().debug(args);
}

#[track_caller]
pub fn info(args: &[Arg<'_>]) {
    logger().info(args);
}

#[track_caller]
pub fn warning(args: &[Arg<'_>]) {
    logger().warning(args);
}

#[track_caller]
pub fn error(args: &[Arg<'_>]) {
    logger().error(args);
}

/// Logs at Error and then terminates the process through the exit hook.
#[track_caller]
pub fn error_f(args: &[Arg<'_>]) {
    logger().error_f(args);
}

pub fn flush() {
    logger().flush();
}
