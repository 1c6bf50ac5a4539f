//! Dynamic attribute values and path lookup
//!
//! Templates address record fields by name at runtime, so records expose
//! their data as [`Value`]s. Lookup is total: a path either leads to a value
//! or yields `None`, it never fails.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A single attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Look up a named child of a map value
    ///
    /// Anything other than a map has no children.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// The elements of a list value
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Number as an integer when it has no fractional part
    fn as_integer(n: f64) -> Option<i64> {
        // 2^53: beyond this f64 no longer represents every integer
        if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
            Some(n as i64)
        } else {
            None
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => match Value::as_integer(*n) {
                Some(i) => write!(f, "{}", i),
                None if n.is_nan() => f.write_str("NaN"),
                None if n.is_infinite() => {
                    f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
                }
                None => write!(f, "{}", n),
            },
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) => match Value::as_integer(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut ser = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    ser.serialize_entry(key, value)?;
                }
                ser.end()
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

/// Ordered top-level attributes of a record
pub type Attributes = Vec<(String, Value)>;

/// Serializes an ordered attribute list as a map, keeping field order
pub(crate) struct OrderedAttributes<'a>(pub &'a [(String, Value)]);

impl Serialize for OrderedAttributes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Anything templates can read named attributes from
pub trait AttributeBag {
    /// The top-level attribute with this name, if present
    fn attribute(&self, name: &str) -> Option<Value>;
}

impl AttributeBag for Value {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl AttributeBag for BTreeMap<String, Value> {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl AttributeBag for [(String, Value)] {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}

/// Walk `path` from the root of `bag`, one attribute per segment
pub fn lookup<B: AttributeBag + ?Sized>(bag: &B, path: &[&str]) -> Option<Value> {
    let (first, rest) = path.split_first()?;
    let root = bag.attribute(first)?;
    rest.iter()
        .try_fold(&root, |value, segment| value.get(segment))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> Value {
        let mut inner = BTreeMap::new();
        inner.insert("c".to_string(), Value::from("deep"));
        let mut middle = BTreeMap::new();
        middle.insert("b".to_string(), Value::Map(inner));
        let mut root = BTreeMap::new();
        root.insert("a".to_string(), Value::Map(middle));
        root.insert("name".to_string(), Value::from("root"));
        Value::Map(root)
    }

    #[test]
    fn test_lookup_depths() {
        let bag = nested();
        assert_eq!(lookup(&bag, &["name"]), Some(Value::from("root")));
        assert_eq!(lookup(&bag, &["a", "b", "c"]), Some(Value::from("deep")));
        assert!(matches!(lookup(&bag, &["a", "b"]), Some(Value::Map(_))));
    }

    #[test]
    fn test_lookup_missing_segment() {
        let bag = nested();
        assert_eq!(lookup(&bag, &["a", "x", "c"]), None);
        assert_eq!(lookup(&bag, &["missing"]), None);
    }

    #[test]
    fn test_lookup_does_not_descend_into_scalars() {
        let bag = nested();
        assert_eq!(lookup(&bag, &["name", "length"]), None);
    }

    #[test]
    fn test_lookup_empty_bag() {
        let bag = Value::Map(BTreeMap::new());
        assert_eq!(lookup(&bag, &["title"]), None);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
        assert_eq!(Value::Number(8.5).to_string(), "8.5");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_list_and_map_display() {
        assert_eq!(Value::from(vec!["Rock", "Pop"]).to_string(), "Rock,Pop");
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), Value::from(1_i64));
        map.insert("b".to_string(), Value::from("x"));
        assert_eq!(Value::Map(map).to_string(), "{a: 1, b: x}");
    }

    #[test]
    fn test_ordered_attributes_lookup() {
        let attrs: Attributes = vec![
            ("title".to_string(), Value::from("Blue")),
            ("year".to_string(), Value::from("1971")),
        ];
        assert_eq!(
            lookup(attrs.as_slice(), &["year"]),
            Some(Value::from("1971"))
        );
    }
}
