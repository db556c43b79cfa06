//! Message rendering: argument views, `%` templates, and the level color table.

mod arg;
mod color;
mod message;
mod printf;

pub use arg::{Arg, ToArg};
pub use color::{Color, ColorMode, LEVEL_COLORS, ParseColorModeError, colorize, level_color};
pub use message::build_message;
pub use printf::sprintf;
