//! Borrowed views of log call arguments.
//!
//! The macros convert every argument into an [`Arg`] before the call, so the conversion
//! must stay free: only references and scalars are copied, all rendering happens later
//! and only when the level passes the threshold.

use super::printf::shortest_float;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};

/// One argument of a variadic log call.
#[derive(Clone, Copy)]
pub enum Arg<'a> {
    Str(&'a str),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    /// Error-like values render as their description.
    Error(&'a (dyn StdError + 'a)),
    /// Values without a dedicated variant that still implement `Display`.
    Display(&'a (dyn Display + 'a)),
    /// Struct-like values rendered through their `Debug` field dump.
    Debug(&'a (dyn Debug + 'a)),
}

impl<'a> Arg<'a> {
    /// Marks a value as error-like so a lone argument renders as its description.
    #[must_use]
    pub fn error(err: &'a (dyn StdError + 'a)) -> Self {
        Self::Error(err)
    }

    #[must_use]
    pub fn display(value: &'a (dyn Display + 'a)) -> Self {
        Self::Display(value)
    }

    /// Routes a value through its `Debug` impl, e.g. `User { name: "Alice" }`.
    #[must_use]
    pub fn debug(value: &'a (dyn Debug + 'a)) -> Self {
        Self::Debug(value)
    }

    /// Type name used inside `%!verb(type=value)` error markers.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float64",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::Error(_) => "error",
            Self::Display(_) | Self::Debug(_) => "value",
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(*s),
            _ => None,
        }
    }
}

/// Natural rendering, the same text `%v` produces.
impl Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => f.write_str(&shortest_float(*v)),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Error(e) => write!(f, "{e}"),
            Self::Display(v) => write!(f, "{v}"),
            Self::Debug(v) => write!(f, "{v:?}"),
        }
    }
}

impl Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", self.type_name())
    }
}

/// Converts a value into an [`Arg`] borrowing from it.
///
/// The logging macros call this on a reference to every argument expression. Implement it
/// for your own types to pass them without wrapping in [`Arg::debug`] or [`Arg::error`].
pub trait ToArg {
    fn to_arg(&self) -> Arg<'_>;
}

impl ToArg for Arg<'_> {
    fn to_arg(&self) -> Arg<'_> {
        *self
    }
}

impl<T: ToArg + ?Sized> ToArg for &T {
    fn to_arg(&self) -> Arg<'_> {
        (**self).to_arg()
    }
}

impl ToArg for str {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

impl ToArg for String {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

impl ToArg for std::borrow::Cow<'_, str> {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Str(self)
    }
}

impl ToArg for bool {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Bool(*self)
    }
}

impl ToArg for char {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Char(*self)
    }
}

macro_rules! signed_to_arg {
    ($($t:ty),*) => {$(
        impl ToArg for $t {
            fn to_arg(&self) -> Arg<'_> {
                Arg::Int(i64::from(*self))
            }
        }
    )*};
}

macro_rules! unsigned_to_arg {
    ($($t:ty),*) => {$(
        impl ToArg for $t {
            fn to_arg(&self) -> Arg<'_> {
                Arg::Uint(u64::from(*self))
            }
        }
    )*};
}

signed_to_arg!(i8, i16, i32, i64);
unsigned_to_arg!(u8, u16, u32, u64);

impl ToArg for isize {
    fn to_arg(&self) -> Arg<'_> {
        i64::try_from(*self).map_or(Arg::Display(self), Arg::Int)
    }
}

impl ToArg for usize {
    fn to_arg(&self) -> Arg<'_> {
        u64::try_from(*self).map_or(Arg::Display(self), Arg::Uint)
    }
}

impl ToArg for f32 {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Float(f64::from(*self))
    }
}

impl ToArg for f64 {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Float(*self)
    }
}

macro_rules! error_to_arg {
    ($($t:ty),*) => {$(
        impl ToArg for $t {
            fn to_arg(&self) -> Arg<'_> {
                Arg::Error(self)
            }
        }
    )*};
}

error_to_arg!(
    std::io::Error,
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    crate::Error,
    crate::level::ParseLevelError
);

impl ToArg for dyn StdError + '_ {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Error(self)
    }
}

impl ToArg for dyn StdError + Send + Sync + '_ {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Error(self)
    }
}

impl ToArg for Box<dyn StdError + '_> {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Error(self.as_ref())
    }
}

impl ToArg for Box<dyn StdError + Send + Sync + '_> {
    fn to_arg(&self) -> Arg<'_> {
        Arg::Error(self.as_ref())
    }
}
