//! Recursive-descent JSON parser.
//!
//! Overview
//! - One method per grammar production, dispatched on the first
//!   non-whitespace byte: `n`/`t`/`f` literals, `"` strings, `[` arrays,
//!   `{` objects, end of input → [`ParseError::ExpectValue`], anything else is
//!   tried as a number.
//! - Values are built bottom-up: leaves first, then the container that owns
//!   them. A container under construction lives in a local `Vec`/`Map`; when
//!   an error propagates with `?` that buffer is dropped together with every
//!   element already parsed, so a failed parse never leaks or leaves a
//!   half-built tree behind.
//! - Nesting depth is bounded by [`ParserOptions::max_depth`] so adversarial
//!   input cannot exhaust the stack.

mod escape;
mod literal;
mod numbers;
mod scanner;


use literal::Literal;
use scanner::Scanner;

use crate::{
    ParseError, ParserOptions,
    value::{Array, Map, Value},
};

pub(crate) struct Parser<'src, 'opt> {
    scanner: Scanner<'src>,
    options: &'opt ParserOptions,
    depth: usize,
    /// Decode buffer reused by every string and key.
    scratch: String,
}

impl<'src, 'opt> Parser<'src, 'opt> {
    pub(crate) fn new(text: &'src str, options: &'opt ParserOptions) -> Self {
        Self {
            scanner: Scanner::new(text),
            options,
            depth: 0,
            scratch: String::new(),
        }
    }

    /// Parses exactly one value surrounded by optional whitespace.
    pub(crate) fn parse_root(&mut self) -> Result<Value, ParseError> {
        self.scanner.skip_whitespace();
        let value = self.parse_value()?;
        self.scanner.skip_whitespace();
        if !self.scanner.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.scanner.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(first) => match Literal::from_first_byte(first) {
                Some(literal) => self.parse_literal(literal),
                None => self.parse_number(),
            },
        }
    }

    fn parse_literal(&mut self, literal: Literal) -> Result<Value, ParseError> {
        self.scanner.expect_literal(literal)?;
        Ok(literal.value())
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        self.scanner.scan_number().map(Value::Number)
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.scanner.scan_string_raw(&mut self.scratch)?;
        Ok(self.scratch.as_str().to_owned())
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        self.scanner.skip_whitespace();

        let mut elements = Array::new();
        if self.scanner.eat(b']') {
            self.depth -= 1;
            return Ok(Value::Array(elements));
        }

        loop {
            elements.push(self.parse_value()?);
            self.scanner.skip_whitespace();
            match self.scanner.peek() {
                Some(b',') => {
                    self.scanner.bump();
                    self.scanner.skip_whitespace();
                }
                Some(b']') => {
                    self.scanner.bump();
                    break;
                }
                _ => return Err(ParseError::MissingCommaOrSquareBracket),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(elements))
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        self.scanner.skip_whitespace();

        let mut members = Map::new();
        if self.scanner.eat(b'}') {
            self.depth -= 1;
            return Ok(Value::Object(members));
        }

        loop {
            if self.scanner.peek() != Some(b'"') {
                return Err(ParseError::MissingKey);
            }
            let key = self.parse_string()?;

            self.scanner.skip_whitespace();
            if !self.scanner.eat(b':') {
                return Err(ParseError::MissingColon);
            }
            self.scanner.skip_whitespace();

            let value = self.parse_value()?;
            // Later duplicates overwrite earlier ones in place.
            members.insert(key, value);

            self.scanner.skip_whitespace();
            match self.scanner.peek() {
                Some(b',') => {
                    self.scanner.bump();
                    self.scanner.skip_whitespace();
                }
                Some(b'}') => {
                    self.scanner.bump();
                    break;
                }
                _ => return Err(ParseError::MissingCommaOrCurlyBracket),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(members))
    }

    /// Consumes the opening bracket and accounts for one more nesting level.
    fn enter_container(&mut self) -> Result<(), ParseError> {
        self.scanner.bump();
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::RecursionLimitExceeded);
        }
        Ok(())
    }

    /// Final bookkeeping for a failed parse: logs where it stopped.
    pub(crate) fn report(&self, err: ParseError) -> ParseError {
        let offset = self.scanner.position();
        log::debug!("JSON parse failed at byte {offset}: {err}");
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err} at byte {offset}");
        err
    }
}

/// Parses a complete JSON document with the default [`ParserOptions`].
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; nothing built before the
/// failure survives it.
///
/// # Examples
///
/// ```
/// use lightjson::{ParseError, Value, parse};
///
/// let v = parse(r#"{"a": [1, 2.5, "x"]}"#).unwrap();
/// assert_eq!(v.get_object_element("a").get_array_size(), 3);
///
/// assert_eq!(parse("null x"), Err(ParseError::RootNotSingular));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_options(text, &ParserOptions::default())
}

/// Parses a complete JSON document with explicit options.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered, including
/// [`ParseError::RecursionLimitExceeded`] when the document nests deeper than
/// [`ParserOptions::max_depth`].
pub fn parse_with_options(text: &str, options: &ParserOptions) -> Result<Value, ParseError> {
    log::trace!("parsing {} bytes of JSON", text.len());
    let mut parser = Parser::new(text, options);
    match parser.parse_root() {
        Ok(value) => Ok(value),
        Err(err) => Err(parser.report(err)),
    }
}

impl core::str::FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Value {
    /// Parses `text` into this value, replacing what it held before.
    ///
    /// The previous payload is released first. On failure the value is left
    /// as `Null`.
    ///
    /// # Errors
    ///
    /// Same as [`parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lightjson::{ParseError, Value};
    ///
    /// let mut v = Value::from("previous");
    /// assert_eq!(v.parse_in_place("false !"), Err(ParseError::RootNotSingular));
    /// assert!(v.is_null());
    ///
    /// v.parse_in_place("[1]").unwrap();
    /// assert_eq!(v.get_array_size(), 1);
    /// ```
    pub fn parse_in_place(&mut self, text: &str) -> Result<(), ParseError> {
        self.set_null();
        *self = parse(text)?;
        Ok(())
    }
}
