//! Scanner: byte cursor over the input text.
//!
//! What it does
//! - Walks the UTF-8 bytes of a `&str` with `peek()`/`bump()`/`eat()`.
//! - Lexes the leaf productions of the grammar: whitespace, the keyword
//!   literals, numbers, and quoted strings (including escape decoding).
//!
//! Scope
//! - The scanner does not know about arrays or objects; the parser decides
//!   which production to run next and maps results into `Value`s.
//!
//! Invariants
//! - `pos` only ever stops on a char boundary when a production succeeds:
//!   every byte the scanner stops on (quotes, backslashes, delimiters) is
//!   ASCII, so slicing `text[a..pos]` is always valid.
//! - On error the position is unspecified; callers abort the parse.


use super::{
    escape::{self, HIGH_SURROGATES, LOW_SURROGATES},
    literal::Literal,
    numbers,
};
use crate::ParseError;

#[derive(Debug, Clone)]
pub(crate) struct Scanner<'src> {
    text: &'src str,
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(text: &'src str) -> Self {
        Self { text, pos: 0 }
    }

    #[inline]
    fn bytes(&self) -> &'src [u8] {
        self.text.as_bytes()
    }

    /// Byte offset of the cursor.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Advances past the current byte. Only call after `peek()` returned an
    /// ASCII byte.
    #[inline]
    pub(crate) fn bump(&mut self) {
        debug_assert!(self.peek().is_some_and(|b| b.is_ascii()));
        self.pos += 1;
    }

    /// Consumes `expected` if it is the next byte.
    #[inline]
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes space, tab, line feed and carriage return.
    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Consumes the whole keyword of `literal`, which must start at the cursor.
    ///
    /// A prefix such as `nul` or a misspelling such as `tru3` is
    /// [`ParseError::InvalidValue`].
    pub(crate) fn expect_literal(&mut self, literal: Literal) -> Result<(), ParseError> {
        let keyword = literal.keyword();
        if self.bytes()[self.pos..].starts_with(keyword) {
            self.pos += keyword.len();
            Ok(())
        } else {
            Err(ParseError::InvalidValue)
        }
    }

    /// Lexes a number at the cursor and converts it to `f64`.
    pub(crate) fn scan_number(&mut self) -> Result<f64, ParseError> {
        let start = self.pos;
        let end = numbers::lex_number(self.bytes(), start).ok_or(ParseError::InvalidValue)?;
        let value = numbers::to_f64(&self.text[start..end])?;
        self.pos = end;
        Ok(value)
    }

    /// Decodes the quoted string at the cursor into `out`.
    ///
    /// `out` is cleared first. Runs of plain characters are copied as slices;
    /// escapes are decoded one at a time.
    pub(crate) fn scan_string_raw(&mut self, out: &mut String) -> Result<(), ParseError> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.pos += 1;
        out.clear();

        let mut run_start = self.pos;
        loop {
            let Some(b) = self.peek() else {
                return Err(ParseError::MissingQuotationMark);
            };
            match b {
                b'"' => {
                    out.push_str(&self.text[run_start..self.pos]);
                    self.pos += 1;
                    return Ok(());
                }
                b'\\' => {
                    out.push_str(&self.text[run_start..self.pos]);
                    self.pos += 1;
                    self.scan_escape(out)?;
                    run_start = self.pos;
                }
                0x00..=0x1F => return Err(ParseError::InvalidStringChar),
                _ => self.pos += 1,
            }
        }
    }

    /// Decodes one escape; the cursor is just past the backslash.
    fn scan_escape(&mut self, out: &mut String) -> Result<(), ParseError> {
        let Some(b) = self.peek() else {
            return Err(ParseError::InvalidStringEscape);
        };
        self.pos += 1;
        let ch = match b {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{0008}',
            b'f' => '\u{000C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => return self.scan_unicode_escape(out),
            _ => return Err(ParseError::InvalidStringEscape),
        };
        out.push(ch);
        Ok(())
    }

    /// Decodes `XXXX` (and a trailing `\uXXXX` low half for surrogate pairs);
    /// the cursor is just past the `u`.
    fn scan_unicode_escape(&mut self, out: &mut String) -> Result<(), ParseError> {
        let unit = self.scan_hex4().ok_or(ParseError::InvalidUnicodeHex)?;

        let code_point = if HIGH_SURROGATES.contains(&unit) {
            if !(self.eat(b'\\') && self.eat(b'u')) {
                return Err(ParseError::InvalidUnicodeSurrogate);
            }
            let low = self
                .scan_hex4()
                .filter(|low| LOW_SURROGATES.contains(low))
                .ok_or(ParseError::InvalidUnicodeSurrogate)?;
            escape::combine_surrogates(unit, low)
        } else if LOW_SURROGATES.contains(&unit) {
            return Err(ParseError::InvalidUnicodeSurrogate);
        } else {
            u32::from(unit)
        };

        if escape::push_code_point(out, code_point) {
            Ok(())
        } else {
            Err(ParseError::InvalidUnicodeSurrogate)
        }
    }

    fn scan_hex4(&mut self) -> Option<u16> {
        let unit = escape::decode_hex4(&self.bytes()[self.pos..])?;
        self.pos += 4;
        Some(unit)
    }
}
