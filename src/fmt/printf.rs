//! `%`-directive substitution for log templates such as `"Processed %d items"`.
//!
//! Rendering never fails. Problems with the directives or the arguments are written into
//! the output as markers so the line still reaches the sink:
//!
//! - `%!d(MISSING)` when a directive has no argument left,
//! - `%!d(string=abc)` when the argument type does not fit the verb (or the verb is unknown),
//! - `%!(NOVERB)` when the template ends right after `%`,
//! - `%!(EXTRA int=1, string=x)` appended when arguments are left over.

use super::arg::Arg;
use std::fmt::Write;

/// Widths and precisions are clamped; `core::fmt` rejects precisions beyond `u16::MAX`.
const MAX_WIDTH: usize = 10_000;

/// Exponent from which shortest `%g` switches to exponent form.
const SHORTEST_EXP_LIMIT: i32 = 6;

/// Flags, width and precision parsed from one directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Directive {
    /// `-`: pad on the right.
    minus: bool,
    /// `+`: always print a sign for numbers.
    plus: bool,
    /// ` `: leave a space where the `+` sign would go.
    space: bool,
    /// `0`: pad numbers with leading zeros after the sign.
    zero: bool,
    /// `#`: alternate form (`0x` prefixes, multi-line `Debug`).
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Substitutes `args` into `template`.
#[must_use]
pub fn sprintf(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut next = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => directive.minus = true,
                '+' => directive.plus = true,
                ' ' => directive.space = true,
                '0' => directive.zero = true,
                '#' => directive.sharp = true,
                _ => break,
            }
            chars.next();
        }
        directive.width = read_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            directive.precision = Some(read_number(&mut chars).unwrap_or(0));
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        let Some(arg) = args.get(next) else {
            let _ = write!(out, "%!{verb}(MISSING)");
            continue;
        };
        next += 1;

        match format_arg(verb, &directive, arg) {
            Some(text) => pad_into(&mut out, &text, &directive, arg),
            None => {
                let _ = write!(out, "%!{verb}({}={arg})", arg.type_name());
            }
        }
    }

    if next < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={arg}", arg.type_name());
        }
        out.push(')');
    }

    out
}

fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize)
                .min(MAX_WIDTH),
        );
    }
    value
}

/// Renders one argument for `verb`, or `None` when the pair is invalid.
///
/// Width is applied by the caller; zero padding of numbers happens here because
/// it has to go between the sign and the digits.
fn format_arg(verb: char, directive: &Directive, arg: &Arg<'_>) -> Option<String> {
    match verb {
        'v' => {
            // `+` and `#` select value syntax for `v`; numbers never see them.
            let plain = Directive {
                plus: false,
                sharp: false,
                ..*directive
            };
            Some(match arg {
                Arg::Debug(value) if directive.sharp => format!("{value:#?}"),
                Arg::Int(_) | Arg::Uint(_) => format_integer(arg, 10, false, &plain)?,
                Arg::Float(v) => format_float(*v, 'g', &plain),
                _ => arg.to_string(),
            })
        }
        's' => match arg {
            Arg::Int(_) | Arg::Uint(_) | Arg::Float(_) | Arg::Bool(_) => None,
            _ => Some(truncate(&arg.to_string(), directive.precision)),
        },
        'q' => match arg {
            Arg::Char(_) | Arg::Int(_) | Arg::Uint(_) => {
                code_point(arg).map(|c| format!("{c:?}"))
            }
            Arg::Str(_) | Arg::Error(_) | Arg::Display(_) => Some(format!("{:?}", arg.to_string())),
            _ => None,
        },
        'd' => format_integer(arg, 10, false, directive),
        'x' => match arg {
            Arg::Str(s) => Some(hex_bytes(s, false)),
            _ => format_integer(arg, 16, false, directive),
        },
        'X' => match arg {
            Arg::Str(s) => Some(hex_bytes(s, true)),
            _ => format_integer(arg, 16, true, directive),
        },
        'o' => format_integer(arg, 8, false, directive),
        'b' => format_integer(arg, 2, false, directive),
        'c' => code_point(arg).map(String::from),
        't' => match arg {
            Arg::Bool(b) => Some(b.to_string()),
            _ => None,
        },
        'f' | 'F' | 'e' | 'E' | 'g' | 'G' => match arg {
            Arg::Float(v) => Some(format_float(*v, verb, directive)),
            _ => None,
        },
        _ => None,
    }
}

/// The character an argument names for `%c` and `%q`. Invalid code points become U+FFFD.
fn code_point(arg: &Arg<'_>) -> Option<char> {
    let code = match arg {
        Arg::Char(c) => return Some(*c),
        Arg::Int(v) => u32::try_from(*v).ok(),
        Arg::Uint(v) => u32::try_from(*v).ok(),
        _ => return None,
    };
    Some(code.and_then(char::from_u32).unwrap_or(char::REPLACEMENT_CHARACTER))
}

fn truncate(text: &str, precision: Option<usize>) -> String {
    match precision {
        Some(max) => text.chars().take(max).collect(),
        None => text.to_string(),
    }
}

fn hex_bytes(text: &str, upper: bool) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for byte in text.bytes() {
        let _ = if upper {
            write!(out, "{byte:02X}")
        } else {
            write!(out, "{byte:02x}")
        };
    }
    out
}

fn format_integer(
    arg: &Arg<'_>,
    radix: u32,
    upper: bool,
    directive: &Directive,
) -> Option<String> {
    let (negative, magnitude) = match arg {
        Arg::Int(v) => (*v < 0, v.unsigned_abs()),
        Arg::Uint(v) => (false, *v),
        Arg::Char(c) if radix == 10 => (false, u64::from(u32::from(*c))),
        _ => return None,
    };

    let mut digits = match (radix, upper) {
        (16, true) => format!("{magnitude:X}"),
        (16, false) => format!("{magnitude:x}"),
        (8, _) => format!("{magnitude:o}"),
        (2, _) => format!("{magnitude:b}"),
        _ => magnitude.to_string(),
    };
    if let Some(precision) = directive.precision
        && digits.len() < precision
    {
        digits.insert_str(0, &"0".repeat(precision - digits.len()));
    }

    let prefix = if directive.sharp {
        match (radix, upper) {
            (16, true) => "0X",
            (16, false) => "0x",
            (8, _) => "0",
            (2, _) => "0b",
            _ => "",
        }
    } else {
        ""
    };

    // Precision already fixes the digit count, so `0` only applies without it.
    let zero_fill = directive.zero && !directive.minus && directive.precision.is_none();
    Some(signed(negative, prefix, &digits, directive, zero_fill))
}

/// How `%v` and the message builder render a float: shortest `%g`.
pub(crate) fn shortest_float(value: f64) -> String {
    format_float(value, 'g', &Directive::default())
}

fn format_float(value: f64, verb: char, directive: &Directive) -> String {
    if value.is_nan() {
        let sign = if directive.plus {
            "+"
        } else if directive.space {
            " "
        } else {
            ""
        };
        return format!("{sign}NaN");
    }
    let negative = value.is_sign_negative();
    let magnitude = value.abs();
    if magnitude.is_infinite() {
        let sign = if negative {
            "-"
        } else if directive.space && !directive.plus {
            " "
        } else {
            "+"
        };
        return format!("{sign}Inf");
    }

    let upper = verb.is_ascii_uppercase();
    let body = match verb.to_ascii_lowercase() {
        'f' => {
            let precision = directive.precision.unwrap_or(6);
            format!("{magnitude:.precision$}")
        }
        'e' => exponent_form(magnitude, directive.precision.unwrap_or(6), upper),
        _ => general_form(magnitude, directive.precision, upper),
    };

    let zero_fill = directive.zero && !directive.minus;
    signed(negative, "", &body, directive, zero_fill)
}

/// `1.500000e+00` style: sign on the exponent and at least two exponent digits.
fn exponent_form(magnitude: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{magnitude:.precision$e}");
    fix_exponent(&raw, upper)
}

fn fix_exponent(raw: &str, upper: bool) -> String {
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw.to_string();
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    let e = if upper { 'E' } else { 'e' };
    format!("{mantissa}{e}{sign}{:02}", exp.unsigned_abs())
}

/// `%g`: shortest of fixed or exponent notation.
///
/// Without a precision the shortest round-tripping digits are used and exponent form kicks in
/// below `1e-4` or from `1e+06` up. With a precision the limit is the precision itself.
fn general_form(magnitude: f64, precision: Option<usize>, upper: bool) -> String {
    if magnitude == 0.0 {
        return "0".to_string();
    }

    match precision {
        None => {
            let shortest = format!("{magnitude:e}");
            let (_, exp) = split_exponent(&shortest);
            if !(-4..SHORTEST_EXP_LIMIT).contains(&exp) {
                fix_exponent(&shortest, upper)
            } else {
                magnitude.to_string()
            }
        }
        Some(precision) => {
            let precision = precision.max(1);
            let decimals = precision - 1;
            let scientific = format!("{magnitude:.decimals$e}");
            let (_, exp) = split_exponent(&scientific);
            let limit = i32::try_from(precision).unwrap_or(i32::MAX);
            if exp < -4 || exp >= limit {
                let fixed = fix_exponent(&scientific, upper);
                match fixed.find(['e', 'E']) {
                    Some(at) => {
                        let (mantissa, tail) = fixed.split_at(at);
                        format!("{}{tail}", trim_fraction(mantissa))
                    }
                    None => fixed,
                }
            } else {
                let decimals = usize::try_from(limit - 1 - exp).unwrap_or(0);
                trim_fraction(&format!("{magnitude:.decimals$}")).to_string()
            }
        }
    }
}

fn split_exponent(raw: &str) -> (&str, i32) {
    raw.split_once('e')
        .map_or((raw, 0), |(mantissa, exp)| (mantissa, exp.parse().unwrap_or(0)))
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Joins sign, radix prefix and digits, zero-filling up to the width when asked.
fn signed(
    negative: bool,
    prefix: &str,
    digits: &str,
    directive: &Directive,
    zero_fill: bool,
) -> String {
    let sign = if negative {
        "-"
    } else if directive.plus {
        "+"
    } else if directive.space {
        " "
    } else {
        ""
    };

    let mut out = String::with_capacity(sign.len() + prefix.len() + digits.len());
    out.push_str(sign);
    out.push_str(prefix);
    if zero_fill && let Some(width) = directive.width {
        let used = sign.len() + prefix.len() + digits.chars().count();
        if used < width {
            out.push_str(&"0".repeat(width - used));
        }
    }
    out.push_str(digits);
    out
}

/// Pads to the width. Numbers did their own zero fill, so only other values get `0` here.
fn pad_into(out: &mut String, text: &str, directive: &Directive, arg: &Arg<'_>) {
    let len = text.chars().count();
    let padding = directive.width.map_or(0, |width| width.saturating_sub(len));
    let numeric = matches!(arg, Arg::Int(_) | Arg::Uint(_) | Arg::Float(_));
    let fill = if directive.zero && !numeric { '0' } else { ' ' };
    if padding == 0 {
        out.push_str(text);
    } else if directive.minus {
        out.push_str(text);
        out.extend(std::iter::repeat_n(' ', padding));
    } else {
        out.extend(std::iter::repeat_n(fill, padding));
        out.push_str(text);
    }
}
