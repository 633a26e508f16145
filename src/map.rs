//! Ordered maps for parameters and dictionaries.
//!
//! [`KeyedMap`] wraps [`IndexMap`] so that members keep the order in which
//! they first appeared on the wire. Re-inserting an existing key replaces the
//! value in place, which is what a repeated key in a field value does.
//!
//! ## Examples
//!
//! ```rust
//! use sfv_codec::{BareItem, Parameters};
//!
//! let mut params = Parameters::new();
//! params.insert("a".to_string(), BareItem::from(1));
//! params.insert("b".to_string(), BareItem::from(true));
//! params.insert("a".to_string(), BareItem::from(2));
//!
//! let keys: Vec<_> = params.keys().cloned().collect();
//! assert_eq!(keys, vec!["a", "b"]);
//! assert_eq!(params.get("a").and_then(|v| v.as_integer()), Some(2));
//! ```

use crate::value::{BareItem, DictMember};
use indexmap::IndexMap;

/// An insertion-ordered map from keys to `V`.
///
/// Two maps are equal only if they hold the same members in the same order.
#[derive(Debug, Clone)]
pub struct KeyedMap<V>(IndexMap<String, V>);

/// Parameters attached to an item or inner list.
pub type Parameters = KeyedMap<BareItem>;

/// A top-level dictionary.
pub type Dictionary = KeyedMap<DictMember>;

impl<V> KeyedMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        KeyedMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KeyedMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a member, returning the value it replaced.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, V> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, V> {
        self.0.values()
    }

    /// Returns an iterator over the members, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.0.iter()
    }
}

impl<V: PartialEq> PartialEq for KeyedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<V> Default for KeyedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntoIterator for KeyedMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a KeyedMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<V> FromIterator<(String, V)> for KeyedMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        KeyedMap(IndexMap::from_iter(iter))
    }
}
