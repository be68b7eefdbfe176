//! Script-declared card properties.
//!
//! A card's behavior script declares the names of its editable properties
//! (see `scripts::scanner`). Their values live here, keyed by name, in the
//! order they were first declared.
//!
//! ## PropertyValue Types
//!
//! - `Integer`: whole numbers (`"42"`)
//! - `Boolean`: `true` / `false`, case-insensitive
//! - `String`: everything else
//!
//! Raw text typed by a user is coerced with `PropertyValue::coerce`, which
//! tries those types in exactly that order.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value of a card property.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Integer value (damage, level bonus).
    Integer(i64),
    /// Boolean flag.
    Boolean(bool),
    /// Free text.
    String(String),
}

impl PropertyValue {
    /// Coerce raw editor text into a typed value.
    ///
    /// Integer parse first, then case-insensitive `true`/`false`, then text.
    /// Never fails.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        if let Ok(v) = raw.parse::<i64>() {
            return PropertyValue::Integer(v);
        }
        if raw.eq_ignore_ascii_case("true") {
            return PropertyValue::Boolean(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return PropertyValue::Boolean(false);
        }
        PropertyValue::String(raw.to_string())
    }

    /// Get as integer if this is an Integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The text an editor field shows for this value.
    ///
    /// Feeding it back through `coerce` yields the same value, except for a
    /// String whose text happens to parse as an integer or boolean.
    #[must_use]
    pub fn to_raw_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Integer(v) => write!(f, "{v}"),
            PropertyValue::Boolean(v) => write!(f, "{v}"),
            PropertyValue::String(s) => f.write_str(s),
        }
    }
}

impl Default for PropertyValue {
    fn default() -> Self {
        PropertyValue::String(String::new())
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Integer(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Integer(i64::from(v))
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Boolean(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::String(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_string())
    }
}

/// Insertion-ordered map of property name to value.
///
/// Entries are never removed implicitly: a name a script stops declaring
/// keeps its stored value.
#[derive(Clone, Debug, Default)]
pub struct PropertyStore {
    entries: Vec<(String, PropertyValue)>,
    index: FxHashMap<String, usize>,
}

impl PropertyStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a property exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get a property value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    /// Insert or replace a value. New names are appended; replacing keeps position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Declare a property: add it with an empty string if absent.
    ///
    /// Returns `true` if the name was new. An existing value and its type
    /// are left untouched.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.insert(name, PropertyValue::default());
        true
    }

    /// Store raw editor text under `name` with typed coercion.
    pub fn set_raw(&mut self, name: &str, raw: &str) {
        self.insert(name, PropertyValue::coerce(raw));
    }

    /// Property names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PartialEq for PropertyStore {
    /// Stores are equal when they hold the same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for PropertyStore {}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = PropertyStore::new();
        for (k, v) in iter {
            store.insert(k, v);
        }
        store
    }
}

impl Serialize for PropertyStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PropertyStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StoreVisitor)
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = PropertyStore;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of property names to strings, integers or booleans")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut store = PropertyStore::new();
        while let Some((name, value)) = access.next_entry::<String, serde_json::Value>()? {
            store.insert(name, from_json(&value));
        }
        Ok(store)
    }
}

fn from_json(value: &serde_json::Value) -> PropertyValue {
    use serde_json::Value;

    match value {
        Value::String(s) => PropertyValue::String(s.clone()),
        Value::Bool(b) => PropertyValue::Boolean(*b),
        Value::Number(n) if n.is_i64() => PropertyValue::Integer(n.as_i64().unwrap_or_default()),
        other => {
            tracing::warn!(value = %other, "unsupported property value kind, keeping its JSON text");
            PropertyValue::String(other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_order() {
        assert_eq!(PropertyValue::coerce("42"), PropertyValue::Integer(42));
        assert_eq!(PropertyValue::coerce("-7"), PropertyValue::Integer(-7));
        assert_eq!(PropertyValue::coerce("true"), PropertyValue::Boolean(true));
        assert_eq!(PropertyValue::coerce("FALSE"), PropertyValue::Boolean(false));
        assert_eq!(PropertyValue::coerce("hi"), PropertyValue::String("hi".into()));
        assert_eq!(PropertyValue::coerce(""), PropertyValue::String(String::new()));
        assert_eq!(PropertyValue::coerce("1.5"), PropertyValue::String("1.5".into()));
    }

    #[test]
    fn test_set_raw_changes_type() {
        let mut store = PropertyStore::new();
        store.set_raw("n", "hi");
        assert_eq!(store.get("n").and_then(|v| v.as_text()), Some("hi"));

        store.set_raw("n", "3");
        assert_eq!(store.get("n").and_then(|v| v.as_int()), Some(3));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_declare_keeps_existing() {
        let mut store = PropertyStore::new();
        store.insert("Level", 3i64);

        assert!(!store.declare("Level"));
        assert!(store.declare("Treasure"));

        assert_eq!(store.get("Level"), Some(&PropertyValue::Integer(3)));
        assert_eq!(store.get("Treasure"), Some(&PropertyValue::String(String::new())));
    }

    #[test]
    fn test_insertion_order() {
        let store: PropertyStore = [("b", 1i64), ("a", 2), ("c", 3)].into_iter().collect();
        let names: Vec<_> = store.names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut store = PropertyStore::new();
        store.insert("x", 1i64);
        store.insert("y", 2i64);
        store.insert("x", "changed");

        let entries: Vec<_> = store.iter().collect();
        assert_eq!(entries[0], ("x", &PropertyValue::String("changed".into())));
        assert_eq!(entries[1], ("y", &PropertyValue::Integer(2)));
    }

    #[test]
    fn test_json_preserves_order_and_types() {
        let json = r#"{"zeta": 5, "alpha": true, "mid": "text"}"#;
        let store: PropertyStore = serde_json::from_str(json).unwrap();

        let entries: Vec<_> = store.iter().collect();
        assert_eq!(entries[0], ("zeta", &PropertyValue::Integer(5)));
        assert_eq!(entries[1], ("alpha", &PropertyValue::Boolean(true)));
        assert_eq!(entries[2], ("mid", &PropertyValue::String("text".into())));

        let out = serde_json::to_string(&store).unwrap();
        assert_eq!(out, r#"{"zeta":5,"alpha":true,"mid":"text"}"#);
    }

    #[test]
    fn test_json_unsupported_kinds_become_text() {
        let store: PropertyStore = serde_json::from_str(r#"{"f": 1.5, "n": null}"#).unwrap();
        assert_eq!(store.get("f"), Some(&PropertyValue::String("1.5".into())));
        assert_eq!(store.get("n"), Some(&PropertyValue::String("null".into())));
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["12", "true", "false", "Orc"] {
            let v = PropertyValue::coerce(raw);
            assert_eq!(PropertyValue::coerce(&v.to_raw_text()), v);
        }
    }
}
