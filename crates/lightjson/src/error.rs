use thiserror::Error;

/// Why a document was rejected by the parser.
///
/// The classification carries no position; the first error encountered aborts
/// the parse and every partially built container is released.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The input (after whitespace) ended where a value was required.
    #[error("expected a value")]
    ExpectValue,
    /// A literal or number did not match the grammar.
    #[error("invalid value")]
    InvalidValue,
    /// Non-whitespace content follows the root value.
    #[error("the root value is followed by more content")]
    RootNotSingular,
    /// A number literal overflows an `f64`.
    #[error("number is too big")]
    NumberTooBig,
    /// A string is missing its closing quotation mark.
    #[error("missing closing quotation mark")]
    MissingQuotationMark,
    /// A backslash is followed by an unknown escape character.
    #[error("invalid string escape")]
    InvalidStringEscape,
    /// A string contains an unescaped control character.
    #[error("invalid character in string")]
    InvalidStringChar,
    /// A `\u` escape is not followed by four hexadecimal digits.
    #[error("invalid unicode hex escape")]
    InvalidUnicodeHex,
    /// A surrogate half is not part of a valid `\uD8xx\uDCxx` pair.
    #[error("invalid unicode surrogate")]
    InvalidUnicodeSurrogate,
    /// An array element is followed by something other than `,` or `]`.
    #[error("missing comma or square bracket")]
    MissingCommaOrSquareBracket,
    /// An object member does not start with a string key.
    #[error("missing object key")]
    MissingKey,
    /// An object key is not followed by `:`.
    #[error("missing colon")]
    MissingColon,
    /// An object member is followed by something other than `,` or `}`.
    #[error("missing comma or curly bracket")]
    MissingCommaOrCurlyBracket,
    /// Arrays and objects are nested deeper than
    /// [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}
