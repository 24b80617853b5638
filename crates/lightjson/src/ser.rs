//! Serializer: renders a [`Value`] as compact JSON text.
//!
//! Output is canonical: no insignificant whitespace, object members in map
//! order, strings escaped minimally, numbers in their shortest round-trip
//! form laid out like C's `%.17g`.
use core::fmt::{self, Write};

use crate::value::Value;

/// Serializes `value` to a compact JSON string.
///
/// # Examples
///
/// ```
/// use lightjson::{parse, stringify};
///
/// let v = parse(r#" [ null , 1.5e3 , "a\u0001" ] "#).unwrap();
/// assert_eq!(stringify(&v), r#"[null,1500,"a\u0001"]"#);
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    to_writer(value, &mut out).expect("writing to a String never fails");
    out
}

/// Serializes `value` into any [`fmt::Write`] sink.
///
/// # Errors
///
/// Only errors reported by the writer itself are returned; every `Value` can
/// be serialized.
pub fn to_writer<W: Write>(value: &Value, f: &mut W) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(*n, f),
        Value::String(s) => write_escaped_string(s, f),
        Value::Array(arr) => {
            f.write_char('[')?;
            let mut first = true;
            for v in arr {
                if !first {
                    f.write_char(',')?;
                }
                first = false;
                to_writer(v, f)?;
            }
            f.write_char(']')
        }
        Value::Object(map) => {
            f.write_char('{')?;
            let mut first = true;
            for (k, v) in map {
                if !first {
                    f.write_char(',')?;
                }
                first = false;
                write_escaped_string(k, f)?;
                f.write_char(':')?;
                to_writer(v, f)?;
            }
            f.write_char('}')
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        to_writer(self, f)
    }
}

/// Writes `src` as a quoted JSON string literal.
///
/// Quotes, backslashes and the control characters with a short form are
/// written as two-character escapes; every other byte below `0x20` becomes
/// `\u00XX`. Everything else, including non-ASCII text, is copied verbatim.
pub(crate) fn write_escaped_string<W: Write>(src: &str, f: &mut W) -> fmt::Result {
    const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    f.write_char('"')?;
    let mut run_start = 0;
    for (i, b) in src.bytes().enumerate() {
        let escape = match b {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            0x08 => "\\b",
            0x0C => "\\f",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            0x00..=0x1F => {
                f.write_str(&src[run_start..i])?;
                f.write_str("\\u00")?;
                f.write_char(char::from(HEX_DIGITS[usize::from(b >> 4)]))?;
                f.write_char(char::from(HEX_DIGITS[usize::from(b & 0x0F)]))?;
                run_start = i + 1;
                continue;
            }
            _ => continue,
        };
        f.write_str(&src[run_start..i])?;
        f.write_str(escape)?;
        run_start = i + 1;
    }
    f.write_str(&src[run_start..])?;
    f.write_char('"')
}

/// Writes a number using the shortest digits that round-trip, in `%.17g`
/// layout: fixed notation for decimal exponents in `-4..17`, otherwise
/// `d.ddde±XX`.
///
/// JSON has no spelling for NaN or the infinities; they are written as
/// `null`. The parser never produces them.
pub(crate) fn write_number<W: Write>(n: f64, f: &mut W) -> fmt::Result {
    if !n.is_finite() {
        return f.write_str("null");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.2345e3`.
    let sci = format!("{n:e}");
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return f.write_str(&sci);
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return f.write_str(&sci);
    };

    let mantissa = match mantissa.strip_prefix('-') {
        Some(rest) => {
            f.write_char('-')?;
            rest
        }
        None => mantissa,
    };
    let (lead, rest) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if (-4..17).contains(&exponent) {
        write_fixed(lead, rest, exponent, f)
    } else {
        f.write_str(lead)?;
        if !rest.is_empty() {
            f.write_char('.')?;
            f.write_str(rest)?;
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Lays out the digits `lead.rest × 10^exponent` without an exponent.
fn write_fixed<W: Write>(lead: &str, rest: &str, exponent: i32, f: &mut W) -> fmt::Result {
    let shift = exponent.unsigned_abs() as usize;
    if exponent >= 0 {
        f.write_str(lead)?;
        if rest.len() <= shift {
            f.write_str(rest)?;
            for _ in rest.len()..shift {
                f.write_char('0')?;
            }
        } else {
            f.write_str(&rest[..shift])?;
            f.write_char('.')?;
            f.write_str(&rest[shift..])?;
        }
    } else {
        f.write_str("0.")?;
        for _ in 1..shift {
            f.write_char('0')?;
        }
        f.write_str(lead)?;
        f.write_str(rest)?;
    }
    Ok(())
}
