/// Configuration options for the JSON parser.
///
/// # Examples
///
/// ```rust
/// use lightjson::{ParseError, ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     max_depth: 2,
///     ..Default::default()
/// };
/// assert!(parse_with_options("[[1]]", &options).is_ok());
/// assert_eq!(
///     parse_with_options("[[[1]]]", &options),
///     Err(ParseError::RecursionLimitExceeded)
/// );
/// ```
///
/// # Default
///
/// `max_depth` defaults to [`ParserOptions::DEFAULT_MAX_DEPTH`].
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Maximum number of nested arrays and objects.
    ///
    /// The parser recurses once per nesting level, so this bounds its stack
    /// usage on adversarial input. A scalar root has depth 0, `[]` has depth 1.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces on parse
    /// failures.
    pub panic_on_error: bool,
}

impl ParserOptions {
    /// Nesting limit used by [`ParserOptions::default`].
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
