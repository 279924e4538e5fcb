use std::fmt::{Formatter, Result as FmtResult};
use std::slice::Iter;
use std::vec::IntoIter;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Value;

/// An insertion-ordered set of placeholder replacements.
///
/// Placeholders are substituted in the order their names were first
/// inserted. Inserting a name that is already present overwrites its value
/// but keeps its original position.
///
/// # Example
///
/// ```
/// use keytext::{Replacements, Value};
///
/// let mut replace = Replacements::new();
/// replace.insert("name", "John");
/// replace.insert("count", 3);
/// replace.insert("name", "Jane");
///
/// let names: Vec<&str> = replace.names().collect();
/// assert_eq!(names, ["name", "count"]);
/// assert_eq!(replace.get("name"), Some(&Value::from("Jane")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replacements {
    /// A `Vec` keeps substitution order; sets are a handful of entries, so
    /// the linear scan in `insert` stays cheap.
    entries: Vec<(String, Value)>,
}

impl Replacements {
    /// Create an empty replacement set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default set for a plural lookup: `{count: n, value: n}`.
    pub fn for_count(count: impl Into<Value>) -> Self {
        let count = count.into();
        let mut replace = Self::new();
        replace.insert("count", count.clone());
        replace.insert("value", count);
        replace
    }

    /// Insert or overwrite a replacement.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a replacement by placeholder name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Number of replacements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no replacements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Placeholder names in substitution order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(name, value)` pairs in substitution order.
    pub fn iter(&self) -> Iter<'_, (String, Value)> {
        self.entries.iter()
    }

    /// Returns `defaults` overlaid with `self`.
    ///
    /// Names already present in `defaults` keep their position but take the
    /// value from `self`; new names are appended.
    pub fn merged_over(self, defaults: Replacements) -> Replacements {
        let mut merged = defaults;
        merged.extend(self);
        merged
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Replacements {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut replace = Replacements::new();
        replace.extend(iter);
        replace
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Replacements {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for Replacements {
    type Item = (String, Value);
    type IntoIter = IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Replacements {
    type Item = &'a (String, Value);
    type IntoIter = Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Replacements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, value)| (name, value)))
    }
}

impl<'de> Deserialize<'de> for Replacements {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ReplacementsVisitor)
    }
}

/// Keeps document order, which a `HashMap` round-trip would lose.
struct ReplacementsVisitor;

impl<'de> Visitor<'de> for ReplacementsVisitor {
    type Value = Replacements;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("a map of placeholder names to strings or numbers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut replace = Replacements::new();
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            replace.insert(name, value);
        }
        Ok(replace)
    }
}
