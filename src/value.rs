//! Configuration value tree produced by every reader.

use crate::map::CaseInsensitiveMap;

/// A parsed configuration value.
///
/// Mirrors the shapes the backing parsers produce. Scalars keep the native
/// type reported by the parser; formats without a type system (INI) yield
/// strings. Every mapping level is a [`CaseInsensitiveMap`], so nested
/// lookups stay case-insensitive all the way down.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
    /// A sequence of values.
    Array(Vec<Value>),
    /// A nested section.
    Map(CaseInsensitiveMap),
}

impl Value {
    /// The string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer if this is an integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The float if this is a float value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The slice of elements if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The nested map if this is a section.
    pub fn as_map(&self) -> Option<&CaseInsensitiveMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Whether this is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Case-insensitive lookup on a section value.
    ///
    /// Returns `None` for non-map values, so lookups chain without
    /// intermediate matching.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.get(key)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<CaseInsensitiveMap> for Value {
    fn from(map: CaseInsensitiveMap) -> Self {
        Value::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_accessors() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(7i64).as_i64(), Some(7));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
        assert!(Value::Null.is_null());
        assert_eq!(Value::from("x").as_i64(), None);
    }

    #[test]
    fn test_get_chains_through_sections() {
        let inner: CaseInsensitiveMap = [("Host", Value::from("localhost"))].into_iter().collect();
        let value = Value::from(inner);

        assert_eq!(value.get("host").and_then(Value::as_str), Some("localhost"));
        assert!(value.get("missing").is_none());
        assert!(Value::from("scalar").get("host").is_none());
    }
}
