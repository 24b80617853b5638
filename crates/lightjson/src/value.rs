//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value, together with its [`ValueType`] tag. A `Value` exclusively owns its
//! children: assigning over a value or dropping it releases the whole subtree,
//! and [`Clone`] always produces an independent deep copy.
use core::fmt;

use indexmap::IndexMap;

/// Insertion-ordered mapping used for JSON objects.
///
/// Keys are unique. Inserting an existing key replaces its value and keeps the
/// position of the first insertion, which is the order used by the serializer.
pub type Map = IndexMap<String, Value>;

/// Ordered sequence used for JSON arrays.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number
/// - String
/// - Array
/// - Object
///
/// # Examples
///
/// ```
/// use lightjson::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The `null` literal.
    #[default]
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// Any JSON number, stored as an IEEE 754 double.
    Number(f64),
    /// A decoded string.
    String(String),
    /// An ordered list of values.
    Array(Array),
    /// A mapping from unique string keys to values.
    Object(Map),
}

/// The discriminator of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// [`Value::Null`]
    Null,
    /// [`Value::Boolean`]
    Boolean,
    /// [`Value::Number`]
    Number,
    /// [`Value::String`]
    String,
    /// [`Value::Array`]
    Array,
    /// [`Value::Object`]
    Object,
}

impl ValueType {
    /// Lowercase JSON name of the type, as used in contract-violation panics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Value {
    /// Creates a `Null` value.
    #[must_use]
    pub const fn new() -> Self {
        Self::Null
    }

    /// Returns the tag of the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightjson::{Value, ValueType};
    ///
    /// assert_eq!(Value::Number(1.0).get_type(), ValueType::Number);
    /// assert_eq!(Value::Null.get_type(), ValueType::Null);
    /// ```
    #[must_use]
    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    /// Replaces the value with `Null`, releasing any owned payload.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    /// Moves the value out, leaving `Null` behind.
    #[must_use]
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use lightjson::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    ///
    /// # Examples
    ///
    /// ```
    /// use lightjson::{Map, Value};
    ///
    /// assert!(Value::Object(Map::new()).is_object());
    /// assert!(!Value::Null.is_object());
    /// ```
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert_eq!(Value::default(), Value::Null);
        assert_eq!(Value::new().get_type(), ValueType::Null);
    }

    #[test]
    fn reassignment_changes_tag() {
        let mut v = Value::from("text");
        assert_eq!(v.get_type(), ValueType::String);
        v = Value::from(vec![Value::Null, Value::from(true)]);
        assert_eq!(v.get_type(), ValueType::Array);
        v.set_null();
        assert!(v.is_null());
    }

    #[test]
    fn take_leaves_null() {
        let mut v = Value::from(2.5);
        let taken = v.take();
        assert_eq!(taken, Value::Number(2.5));
        assert!(v.is_null());
    }

    #[test]
    fn object_equality_ignores_key_order() {
        let a: Value = [("x", Value::from(1)), ("y", Value::from(2))]
            .into_iter()
            .collect();
        let b: Value = [("y", Value::from(2)), ("x", Value::from(1))]
            .into_iter()
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn clone_is_deep() {
        let mut a: Value = [Value::from(vec![Value::from(1), Value::from(2)])]
            .into_iter()
            .collect();
        let b = a.clone();
        if let Value::Array(outer) = &mut a {
            if let Value::Array(inner) = &mut outer[0] {
                inner[0] = Value::from("changed");
            }
        }
        assert_eq!(b.to_string(), "[[1,2]]");
        assert_eq!(a.to_string(), r#"[["changed",2]]"#);
    }
}
