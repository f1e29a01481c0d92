//! Insertion-ordered key/value bag attached to an [`Error`](crate::Error).

use core::fmt;

use serde_json::Value;

use crate::types::ExtensionVec;

/// Ordered mapping from extension keys to arbitrary JSON-compatible values.
///
/// Keys keep the order of their first insertion; inserting an existing key
/// replaces the value in place. Most errors carry zero or one extension, so the
/// entries live inline in a small vector and lookups are linear.
///
/// # Examples
///
/// ```
/// use outcome_rail::Extensions;
///
/// let ext = Extensions::new()
///     .with("tenant", "acme")
///     .with("attempt", 3)
///     .with("tenant", "globex");
///
/// assert_eq!(ext.len(), 2);
/// assert_eq!(ext.get("tenant").and_then(|v| v.as_str()), Some("globex"));
/// assert_eq!(ext.keys().collect::<Vec<_>>(), ["tenant", "attempt"]);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Extensions {
    entries: ExtensionVec<(String, Value)>,
}

impl Extensions {
    /// Creates an empty bag.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the bag with `key` set to `value`.
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert(key.into(), value.into());
        self
    }

    pub(crate) fn insert(&mut self, key: String, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Looks up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Extensions
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ext = Self::new();
        ext.extend(iter);
        ext
    }
}

impl<K, V> Extend<(K, V)> for Extensions
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.into(), value.into());
        }
    }
}

impl IntoIterator for Extensions {
    type Item = (String, Value);
    type IntoIter = smallvec::IntoIter<[(String, Value); 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
