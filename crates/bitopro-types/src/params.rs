//! Ordered request parameters
//!
//! The signed payload covers the JSON form of these parameters, so the byte
//! output must be reproducible: keys serialize in insertion order and every
//! value has exactly one textual form.

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A single parameter value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    /// Serialized as a JSON string
    Str(String),
    /// Serialized as a JSON integer
    Int(i64),
    /// Serialized as a JSON boolean, `true`/`false` in query strings
    Bool(bool),
}

impl ParamValue {
    /// Get the string value, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value, if this is an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Query-string form
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Decimals travel as strings so the caller's precision survives untouched
impl From<Decimal> for ParamValue {
    fn from(d: Decimal) -> Self {
        Self::Str(d.to_string())
    }
}

/// Ordered mapping of parameter names to values
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterSet {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value
    ///
    /// An existing key keeps its position and has its value replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Pairs rendered for query-string encoding
    pub fn to_query_pairs(&self) -> Vec<(&str, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.to_string()))
            .collect()
    }
}

/// Equality ignores insertion order
impl PartialEq for ParameterSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for ParameterSet {}

impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_json_preserves_insertion_order() {
        let params = ParameterSet::new()
            .with("identity", "user@example.com")
            .with("nonce", 1_700_000_000_000i64);

        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"identity":"user@example.com","nonce":1700000000000}"#
        );

        let reversed = ParameterSet::new()
            .with("nonce", 1_700_000_000_000i64)
            .with("identity", "user@example.com");

        assert_eq!(
            serde_json::to_string(&reversed).unwrap(),
            r#"{"nonce":1700000000000,"identity":"user@example.com"}"#
        );
        assert_eq!(params, reversed);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = ParameterSet::new().with("page", 1u32).with("active", true);
        params.insert("page", 3u32);

        assert_eq!(params.len(), 2);
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["page", "active"]);
        assert_eq!(params.get("page").and_then(ParamValue::as_i64), Some(3));
    }

    #[test]
    fn test_query_forms() {
        let params = ParameterSet::new()
            .with("limit", 10u32)
            .with("active", false)
            .with("pair", "bito_twd");

        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("limit", "10".to_string()),
                ("active", "false".to_string()),
                ("pair", "bito_twd".to_string()),
            ]
        );
    }

    #[test]
    fn test_decimal_keeps_caller_precision() {
        assert_eq!(ParamValue::from(dec!(600)), ParamValue::Str("600".to_string()));
        assert_eq!(ParamValue::from(dec!(600.50)), ParamValue::Str("600.50".to_string()));
        assert_eq!(ParamValue::from(dec!(0.00012)).as_str(), Some("0.00012"));
    }

    #[test]
    fn test_value_json_forms() {
        assert_eq!(serde_json::to_string(&ParamValue::from(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&ParamValue::from(-5i32)).unwrap(), "-5");
        assert_eq!(serde_json::to_string(&ParamValue::from("x")).unwrap(), "\"x\"");
    }

    #[test]
    fn test_collect_from_pairs() {
        let params: ParameterSet = vec![("a", 1i64), ("b", 2i64)].into_iter().collect();
        assert!(params.contains_key("a"));
        assert!(!params.is_empty());
        assert_eq!(ParameterSet::new().len(), 0);
    }
}
