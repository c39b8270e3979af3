//! Insertion-ordered style property maps.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::style_value::StyleValue;

/// A mapping from property name to [`StyleValue`].
///
/// Keys keep the order in which they were first inserted. Overwriting an
/// existing key replaces its value in place, so merging fragments behaves
/// like `Object.assign` on a plain JavaScript object.
///
/// Entries live in a vector and lookups scan it, so `get` and `insert` are
/// linear in the number of properties and merging two fragments is
/// `O(n * m)`. Component styles hold a few dozen properties at most.
///
/// # Example
///
/// ```rust
/// use stylebridge::StyleFragment;
///
/// let style = StyleFragment::new()
///     .with("width", 100)
///     .with("marginHorizontal", 8)
///     .with("width", 120);
///
/// let keys: Vec<&str> = style.keys().collect();
/// assert_eq!(keys, vec!["width", "marginHorizontal"]);
/// assert_eq!(style.get("width"), Some(&120.into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleFragment {
    entries: Vec<(String, StyleValue)>,
}

impl StyleFragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets a property, returning the updated fragment for chaining.
    pub fn with<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a property, returning the previous value if there was one.
    pub fn insert<V: Into<StyleValue>>(&mut self, name: &str, value: V) -> Option<StyleValue> {
        let value = value.into();
        match self.position(name) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((name.to_string(), value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.position(name).map(|idx| &self.entries[idx].1)
    }

    /// Returns `true` if the property is present, even when its value is falsy.
    pub fn contains_key(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns `true` if the property is present and truthy.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(StyleValue::is_truthy)
    }

    pub fn remove(&mut self, name: &str) -> Option<StyleValue> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    /// Shallow-merges `other` into this fragment. Later keys overwrite earlier ones.
    pub fn merge(&mut self, other: &StyleFragment) {
        for (name, value) in &other.entries {
            self.insert(name, value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = (&str, &mut StyleValue)> {
        self.entries
            .iter_mut()
            .map(|(name, value)| (name.as_str(), value))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }
}

impl FromIterator<(String, StyleValue)> for StyleFragment {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        let mut fragment = StyleFragment::new();
        for (name, value) in iter {
            fragment.insert(&name, value);
        }
        fragment
    }
}

impl IntoIterator for StyleFragment {
    type Item = (String, StyleValue);
    type IntoIter = std::vec::IntoIter<(String, StyleValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for StyleFragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleFragment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StyleValue::deserialize(deserializer)? {
            StyleValue::Map(map) => Ok(map),
            other => Err(serde::de::Error::custom(format!(
                "expected a style object, found {:?}",
                other
            ))),
        }
    }
}
