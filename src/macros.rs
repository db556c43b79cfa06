//! Variadic entry points on the global logger.
//!
//! Each argument may be any [`ToArg`](crate::fmt::ToArg) value; a leading string followed by
//! more arguments is a `%` template. Arguments are only converted once the level has passed
//! the threshold, and the line is attributed to the macro call site.

/// Logs at an explicit level.
///
/// ```
/// termlog::log!(termlog::Level::Info, "listening on port %d", 8080);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr $(, $arg:expr)* $(,)?) => {{
        let level: $crate::Level = $level;
        let logger = $crate::global::logger();
        if logger.enabled(level) {
            logger.log(level, &[$($crate::fmt::ToArg::to_arg(&$arg)),*]);
        }
    }};
}

/// ```
/// termlog::debug!("cache miss for %q", "users/42");
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::log!($crate::Level::Debug $(, $arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::log!($crate::Level::Info $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:expr),* $(,)?) => {
        $crate::log!($crate::Level::Warning $(, $arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {
        $crate::log!($crate::Level::Error $(, $arg)*)
    };
}

/// Logs at Error, then runs the exit hook (by default `std::process::exit(1)`).
#[macro_export]
macro_rules! error_f {
    ($($arg:expr),* $(,)?) => {
        $crate::global::logger().error_f(&[$($crate::fmt::ToArg::to_arg(&$arg)),*])
    };
}
