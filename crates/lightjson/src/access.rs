//! Typed accessors on [`Value`].
//!
//! Every `get_*`/`set_*_element` accessor has a precondition on the value's
//! type, and the element accessors additionally on the index or key. Breaking
//! a precondition is a programmer error and panics; check
//! [`Value::get_type`] (or use the `as_*` probes) when the shape of a document
//! is not known in advance.
//!
//! Values never share children. `set_array`, `set_object` and the
//! `set_*_element` accessors deep-copy their argument; `adopt_array` and
//! `adopt_object` move an owned container in without copying.
use core::ops::{Index, IndexMut};

use crate::value::{Array, Map, Value, ValueType};

#[cold]
#[track_caller]
fn type_mismatch(expected: ValueType, found: ValueType) -> ! {
    panic!("expected a JSON {expected}, found {found}")
}

#[cold]
#[track_caller]
fn index_out_of_range(index: usize, len: usize) -> ! {
    panic!("index {index} out of range for JSON array of length {len}")
}

#[cold]
#[track_caller]
fn missing_key(key: &str) -> ! {
    panic!("JSON object has no member {key:?}")
}

#[cold]
#[track_caller]
fn member_out_of_range(index: usize, len: usize) -> ! {
    panic!("member index {index} out of range for JSON object of size {len}")
}

impl Value {
    /// Replaces the value with a number.
    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// # Panics
    ///
    /// Panics if the value is not a number.
    #[must_use]
    #[track_caller]
    pub fn get_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => type_mismatch(ValueType::Number, other.get_type()),
        }
    }

    /// Replaces the value with a boolean.
    pub fn set_bool(&mut self, b: bool) {
        *self = Value::Boolean(b);
    }

    /// # Panics
    ///
    /// Panics if the value is not a boolean.
    #[must_use]
    #[track_caller]
    pub fn get_bool(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            other => type_mismatch(ValueType::Boolean, other.get_type()),
        }
    }

    /// Replaces the value with a copy of `s`.
    pub fn set_string(&mut self, s: impl Into<String>) {
        *self = Value::String(s.into());
    }

    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[must_use]
    #[track_caller]
    pub fn get_string(&self) -> &str {
        match self {
            Value::String(s) => s,
            other => type_mismatch(ValueType::String, other.get_type()),
        }
    }

    /// Length of the string payload in UTF-8 bytes.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[must_use]
    #[track_caller]
    pub fn get_string_length(&self) -> usize {
        self.get_string().len()
    }

    /// Replaces the value with an array holding deep copies of `elements`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightjson::Value;
    ///
    /// let source = vec![Value::from(vec![Value::from(1)])];
    /// let mut v = Value::Null;
    /// v.set_array(&source);
    /// v.get_array_element_mut(0).set_number(2.0);
    ///
    /// // `source` is untouched.
    /// assert_eq!(source[0].get_array_element(0).get_number(), 1.0);
    /// ```
    pub fn set_array(&mut self, elements: &[Value]) {
        *self = Value::Array(elements.to_vec());
    }

    /// Replaces the value with an array that takes ownership of `elements`.
    pub fn adopt_array(&mut self, elements: Array) {
        *self = Value::Array(elements);
    }

    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[must_use]
    #[track_caller]
    pub fn get_array(&self) -> &Array {
        match self {
            Value::Array(arr) => arr,
            other => type_mismatch(ValueType::Array, other.get_type()),
        }
    }

    /// Mutable handle to the array payload, borrowed from `self`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[must_use]
    #[track_caller]
    pub fn get_array_mut(&mut self) -> &mut Array {
        match self {
            Value::Array(arr) => arr,
            other => type_mismatch(ValueType::Array, other.get_type()),
        }
    }

    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[must_use]
    #[track_caller]
    pub fn get_array_size(&self) -> usize {
        self.get_array().len()
    }

    /// # Panics
    ///
    /// Panics if the value is not an array or `index` is out of range.
    #[must_use]
    #[track_caller]
    pub fn get_array_element(&self, index: usize) -> &Value {
        let arr = self.get_array();
        match arr.get(index) {
            Some(v) => v,
            None => index_out_of_range(index, arr.len()),
        }
    }

    /// # Panics
    ///
    /// Panics if the value is not an array or `index` is out of range.
    #[must_use]
    #[track_caller]
    pub fn get_array_element_mut(&mut self, index: usize) -> &mut Value {
        let arr = self.get_array_mut();
        let len = arr.len();
        match arr.get_mut(index) {
            Some(v) => v,
            None => index_out_of_range(index, len),
        }
    }

    /// Overwrites element `index` with a deep copy of `content`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array or `index` is out of range.
    #[track_caller]
    pub fn set_array_element(&mut self, index: usize, content: &Value) {
        *self.get_array_element_mut(index) = content.clone();
    }

    /// Replaces the value with an object holding deep copies of `members`.
    pub fn set_object(&mut self, members: &Map) {
        *self = Value::Object(members.clone());
    }

    /// Replaces the value with an object that takes ownership of `members`.
    pub fn adopt_object(&mut self, members: Map) {
        *self = Value::Object(members);
    }

    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    #[track_caller]
    pub fn get_object(&self) -> &Map {
        match self {
            Value::Object(map) => map,
            other => type_mismatch(ValueType::Object, other.get_type()),
        }
    }

    /// Mutable handle to the object payload, borrowed from `self`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    #[track_caller]
    pub fn get_object_mut(&mut self) -> &mut Map {
        match self {
            Value::Object(map) => map,
            other => type_mismatch(ValueType::Object, other.get_type()),
        }
    }

    /// Number of members.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    #[track_caller]
    pub fn get_object_size(&self) -> usize {
        self.get_object().len()
    }

    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    #[track_caller]
    pub fn has_key(&self, key: &str) -> bool {
        self.get_object().contains_key(key)
    }

    /// # Panics
    ///
    /// Panics if the value is not an object or has no member `key`.
    #[must_use]
    #[track_caller]
    pub fn get_object_element(&self, key: &str) -> &Value {
        match self.get_object().get(key) {
            Some(v) => v,
            None => missing_key(key),
        }
    }

    /// # Panics
    ///
    /// Panics if the value is not an object or has no member `key`.
    #[must_use]
    #[track_caller]
    pub fn get_object_element_mut(&mut self, key: &str) -> &mut Value {
        match self.get_object_mut().get_mut(key) {
            Some(v) => v,
            None => missing_key(key),
        }
    }

    /// Overwrites the existing member `key` with a deep copy of `content`.
    ///
    /// New members are added through [`Value::get_object_mut`].
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or has no member `key`.
    #[track_caller]
    pub fn set_object_element(&mut self, key: &str, content: &Value) {
        *self.get_object_element_mut(key) = content.clone();
    }

    /// Key of the member at position `index`, in serialization order.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `index` is out of range.
    #[must_use]
    #[track_caller]
    pub fn get_object_key(&self, index: usize) -> &str {
        self.member(index).0
    }

    /// Length in UTF-8 bytes of the key at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `index` is out of range.
    #[must_use]
    #[track_caller]
    pub fn get_object_key_length(&self, index: usize) -> usize {
        self.member(index).0.len()
    }

    /// Value of the member at position `index`, in serialization order.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object or `index` is out of range.
    #[must_use]
    #[track_caller]
    pub fn get_object_value(&self, index: usize) -> &Value {
        self.member(index).1
    }

    #[track_caller]
    fn member(&self, index: usize) -> (&str, &Value) {
        let map = self.get_object();
        match map.get_index(index) {
            Some((k, v)) => (k.as_str(), v),
            None => member_out_of_range(index, map.len()),
        }
    }

    /// Returns the boolean payload, or `None` for any other type.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number payload, or `None` for any other type.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string payload, or `None` for any other type.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array payload, or `None` for any other type.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Returns the object payload, or `None` for any other type.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

/// Array element access; panics like [`Value::get_array_element`].
impl Index<usize> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, index: usize) -> &Value {
        self.get_array_element(index)
    }
}

impl IndexMut<usize> for Value {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Value {
        self.get_array_element_mut(index)
    }
}

/// Object member access; panics like [`Value::get_object_element`].
impl Index<&str> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, key: &str) -> &Value {
        self.get_object_element(key)
    }
}

impl IndexMut<&str> for Value {
    #[track_caller]
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.get_object_element_mut(key)
    }
}
