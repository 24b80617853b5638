//! A small JSON library: an owned value tree, a recursive-descent parser and a
//! canonical serializer.
//!
//! ```rust
//! use lightjson::{parse, stringify};
//!
//! let mut doc = parse(r#"{ "i": 123, "a": [1, 2, 3], "o": { "1": 1 } }"#).unwrap();
//!
//! let i = doc["i"].get_number();
//! doc["i"].set_number(i + 1.0);
//!
//! // Assignments between values are deep copies; `o` keeps its own tree.
//! let a = doc["a"].clone();
//! doc["o"].set_object_element("1", &a);
//! doc["a"][0].set_bool(true);
//!
//! assert_eq!(
//!     stringify(&doc),
//!     r#"{"i":124,"a":[true,2,3],"o":{"1":[1,2,3]}}"#
//! );
//! ```
//!
//! Object members keep their insertion order; parsing a duplicate key
//! overwrites the earlier value in place.

mod access;
mod error;
mod options;
mod parser;
mod ser;
#[cfg(feature = "serde")]
mod serde_impl;
mod value;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use options::ParserOptions;
pub use parser::{parse, parse_with_options};
pub use ser::{stringify, to_writer};
pub use value::{Array, Map, Value, ValueType};
