//! Number lexing and conversion.
//!
//! The lexer only accepts `-?(0|[1-9]\d*)(\.\d+)?([eE][+-]?\d+)?`; the
//! matched slice is then handed to the standard `f64` parser.

use crate::ParseError;

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

/// Returns the end offset of the number starting at `start`, or `None` when the
/// bytes there do not form a JSON number.
///
/// Bytes after the number are left alone: `1x` lexes as `1`.
pub(crate) fn lex_number(bytes: &[u8], start: usize) -> Option<usize> {
    let mut pos = start;

    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
    }

    match bytes.get(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => pos = skip_digits(bytes, pos + 1),
        _ => return None,
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            return None;
        }
        pos = skip_digits(bytes, pos);
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            return None;
        }
        pos = skip_digits(bytes, pos);
    }

    Some(pos)
}

/// Converts a lexed number to `f64`.
///
/// Literals that overflow fail with [`ParseError::NumberTooBig`]; literals that
/// underflow become `0.0`.
pub(crate) fn to_f64(lexeme: &str) -> Result<f64, ParseError> {
    let value: f64 = lexeme.parse().map_err(|_| ParseError::InvalidValue)?;
    if value.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(value)
}
