//! Ordered map type for JSON objects.
//!
//! This module provides [`JsonMap`], a wrapper around [`IndexMap`] that keeps
//! object members in insertion order. JSON itself does not mandate member
//! order or key uniqueness; this crate preserves the order members appeared in
//! the input so that round-tripped documents stay recognizable, and resolves
//! duplicate keys by letting later members replace earlier ones.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` ensures:
//!
//! - **Deterministic output**: Members serialize in a consistent order
//! - **Iteration order**: Members are iterated in insertion order
//! - **Compatibility**: Easier testing and debugging with predictable output
//!
//! ## Examples
//!
//! ```rust
//! use serde_rawjson::{JsonMap, Value};
//!
//! let mut map = JsonMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to JSON values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order,
/// which keeps serialization deterministic.
///
/// # Examples
///
/// ```rust
/// use serde_rawjson::{JsonMap, Value};
///
/// let mut map = JsonMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonMap(IndexMap<String, crate::Value>);

impl JsonMap {
    /// Creates an empty `JsonMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rawjson::JsonMap;
    ///
    /// let map = JsonMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        JsonMap(IndexMap::new())
    }

    /// Creates an empty `JsonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the member keeps its original position. This is how the parser resolves
    /// duplicate keys in the input: the last occurrence wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rawjson::{JsonMap, Value};
    ///
    /// let mut map = JsonMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rawjson::{JsonMap, Value};
    ///
    /// let mut map = JsonMap::new();
    /// map.insert("key".to_string(), Value::from(42));
    /// assert_eq!(map.get("key").and_then(|v| v.as_i64()), Some(42));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rawjson::{JsonMap, Value};
    ///
    /// let mut map = JsonMap::new();
    /// map.insert("count".to_string(), Value::from(1));
    /// if let Some(Value::Number(n)) = map.get_mut("count") {
    ///     *n = 2.into();
    /// }
    /// assert_eq!(map.get("count").and_then(|v| v.as_i64()), Some(2));
    /// ```
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Removes a member from the map, returning its value if it was present.
    ///
    /// The remaining members keep their relative order, so a document edited
    /// this way still serializes in the order its members appeared.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of members in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for JsonMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        JsonMap(map.into_iter().collect())
    }
}

impl From<JsonMap> for HashMap<String, crate::Value> {
    fn from(map: JsonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for JsonMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::Value)> for JsonMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        JsonMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn insert_replaces_and_keeps_position() {
        let mut map = JsonMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from(2));
        let old = map.insert("a".to_string(), Value::from(3));

        assert_eq!(old, Some(Value::from(1)));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a").and_then(|v| v.as_i64()), Some(3));
    }

    #[test]
    fn remove_preserves_order_of_remaining_members() {
        let mut map = JsonMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from(2));
        map.insert("c".to_string(), Value::from(3));

        assert_eq!(map.remove("b"), Some(Value::from(2)));
        assert_eq!(map.remove("b"), None);
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut map = JsonMap::new();
        map.insert("n".to_string(), Value::from(1));
        *map.get_mut("n").unwrap() = Value::RawNumber("99999999999999999999".to_string());
        assert_eq!(
            map.get("n").and_then(|v| v.as_raw_number()),
            Some("99999999999999999999")
        );
    }
}
