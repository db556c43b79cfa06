//! Turns the argument list of one log call into the message text.

use super::arg::Arg;
use super::printf::sprintf;
use std::fmt::Write;

/// Builds the message body from a variadic argument list.
///
/// - no arguments: empty message
/// - one argument: errors render as their description, strings verbatim, everything else
///   through its generic rendering
/// - more arguments with a leading string: the string is a `%` template for the rest
/// - more arguments without a leading string: the whole list, e.g. `[1 true x]`
#[must_use]
pub fn build_message(args: &[Arg<'_>]) -> String {
    match args {
        [] => String::new(),
        [single] => single.to_string(),
        [Arg::Str(template), rest @ ..] => sprintf(template, rest),
        list => render_list(list),
    }
}

fn render_list(args: &[Arg<'_>]) -> String {
    let mut out = String::from("[");
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{arg}");
    }
    out.push(']');
    out
}
