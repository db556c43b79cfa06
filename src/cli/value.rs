//! Shell arguments are always strings; templates like `count=%d` need real numbers.

use crate::fmt::{Arg, ToArg};

/// An owned CLI argument, typed by what it looks like.
#[derive(Debug, Clone, PartialEq)]
pub enum CliValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl CliValue {
    /// `42` → Int, `4.2` → Float, `true`/`false` → Bool, anything else → Str.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Ok(v) = raw.parse::<i64>() {
            return Self::Int(v);
        }
        if let Ok(v) = raw.parse::<f64>()
            && v.is_finite()
        {
            return Self::Float(v);
        }
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Str(raw.to_string()),
        }
    }
}

impl ToArg for CliValue {
    fn to_arg(&self) -> Arg<'_> {
        match self {
            Self::Int(v) => Arg::Int(*v),
            Self::Float(v) => Arg::Float(*v),
            Self::Bool(v) => Arg::Bool(*v),
            Self::Str(s) => Arg::Str(s),
        }
    }
}
