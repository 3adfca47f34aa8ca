//! Ordered mapping with case-insensitive string keys.

use std::fmt;

use indexmap::map::Entry as IndexEntry;
use indexmap::IndexMap;

use crate::value::Value;

/// Case-folded form used as the identity of a key.
fn fold(key: &str) -> String {
    key.to_lowercase()
}

#[derive(Debug, Clone)]
struct Slot {
    /// Original casing of the most recent insert, kept for iteration.
    key: String,
    value: Value,
}

/// An ordered associative container whose string keys match without regard
/// to case.
///
/// Two keys that differ only in case denote the same entry: inserting under
/// one casing overwrites a value stored under another. The original casing
/// of the most recent insert is preserved for iteration and display, and
/// entries keep the insertion order of their first-seen key.
///
/// Every reader in this crate produces one of these, with nested sections
/// themselves stored as [`CaseInsensitiveMap`] values, so dotted lookups
/// like [`get_path`](Self::get_path) stay case-insensitive at every level.
///
/// # Example
///
/// ```
/// use quince::{CaseInsensitiveMap, Value};
///
/// let mut map = CaseInsensitiveMap::new();
/// map.insert("Host", "localhost");
/// assert_eq!(map.get("HOST").and_then(Value::as_str), Some("localhost"));
/// ```
#[derive(Clone, Default)]
pub struct CaseInsensitiveMap {
    slots: IndexMap<String, Slot>,
}

impl CaseInsensitiveMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Insert a value, overwriting any entry whose key matches under any
    /// casing. Returns the previous value if one was replaced.
    ///
    /// An overwrite keeps the entry's position but adopts the new key's
    /// casing for display.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.slots.entry(fold(&key)) {
            IndexEntry::Occupied(mut slot) => {
                let previous = std::mem::replace(slot.get_mut(), Slot { key, value });
                Some(previous.value)
            }
            IndexEntry::Vacant(slot) => {
                slot.insert(Slot { key, value });
                None
            }
        }
    }

    /// Look up a value under any casing of `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.slots.get(&fold(key)).map(|slot| &slot.value)
    }

    /// Mutable lookup under any casing of `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.slots.get_mut(&fold(key)).map(|slot| &mut slot.value)
    }

    /// Whether an entry exists under any casing of `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(&fold(key))
    }

    /// Remove and return the entry matching `key` under any casing,
    /// preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.slots.shift_remove(&fold(key)).map(|slot| slot.value)
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Iterate over `(key, value)` pairs in insertion order, yielding each
    /// key's preserved original casing.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.slots
            .values()
            .map(|slot| (slot.key.as_str(), &slot.value))
    }

    /// Iterate over keys (original casing) in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.values().map(|slot| slot.key.as_str())
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.slots.values().map(|slot| &slot.value)
    }

    /// Case-insensitive nested lookup along a dotted path.
    ///
    /// `map.get_path("database.host")` is equivalent to
    /// `map.get("database")` followed by a `get("host")` on the nested
    /// section. Returns `None` as soon as a segment is missing or the
    /// current value is not a section.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }
}

/// Content equality: case-insensitive on keys, order-independent, recursive
/// through nested sections. A map parsed from any format compares equal to
/// a literal built in a test, whatever casing either side used.
impl PartialEq for CaseInsensitiveMap {
    fn eq(&self, other: &Self) -> bool {
        self.slots.len() == other.slots.len()
            && self.slots.iter().all(|(folded, slot)| {
                other
                    .slots
                    .get(folded)
                    .is_some_and(|o| o.value == slot.value)
            })
    }
}

impl fmt::Debug for CaseInsensitiveMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for CaseInsensitiveMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for CaseInsensitiveMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
