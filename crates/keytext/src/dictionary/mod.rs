//! Nested translation dictionaries and dot-path lookup.
//!
//! A dictionary maps path segments to either text leaves or nested groups.
//! Keys like `"greetings.hello"` walk the groups one segment at a time.
//! Lookups never fail loudly: an unknown path, a path that runs through a
//! text leaf, or a path that ends on a group all resolve to
//! [`Lookup::Missing`].

mod entry;
mod error;
mod source;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

pub use entry::Entry;
pub use error::DictionaryError;
pub use source::DictionarySource;

/// A nested mapping of translation strings.
///
/// # Example
///
/// ```
/// use keytext::Dictionary;
///
/// let mut greetings = Dictionary::new();
/// greetings.insert("hello", "Hello :name");
///
/// let mut dictionary = Dictionary::new();
/// dictionary.insert("yes", "Yes");
/// dictionary.insert("greetings", greetings);
///
/// assert_eq!(dictionary.lookup("greetings.hello").found(), Some("Hello :name"));
/// assert_eq!(dictionary.lookup("greetings.bye").found(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, Entry>,
}

/// Result of a dictionary path lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The path resolved to a non-empty text leaf.
    Found(&'a str),

    /// The path did not resolve to a usable leaf.
    Missing,

    /// No key was given.
    EmptyKey,
}

impl<'a> Lookup<'a> {
    /// The leaf text, if one was found.
    pub fn found(self) -> Option<&'a str> {
        match self {
            Lookup::Found(text) => Some(text),
            Lookup::Missing | Lookup::EmptyKey => None,
        }
    }

    /// Whether the lookup produced a translation.
    pub fn is_found(self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a text leaf or a nested group under a single segment.
    pub fn insert(&mut self, segment: impl Into<String>, entry: impl Into<Entry>) {
        self.entries.insert(segment.into(), entry.into());
    }

    /// Get the entry stored directly under `segment`.
    pub fn get(&self, segment: &str) -> Option<&Entry> {
        self.entries.get(segment)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the top-level segments in sorted order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Resolve a dot-separated key to its text leaf.
    ///
    /// Empty-string leaves are treated as missing.
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        if key.is_empty() {
            return Lookup::EmptyKey;
        }

        let mut group = self;
        let mut segments = key.split('.').peekable();
        while let Some(segment) = segments.next() {
            let Some(entry) = group.get(segment) else {
                return Lookup::Missing;
            };
            match (entry, segments.peek().is_some()) {
                (Entry::Group(next), true) => group = next,
                (Entry::Text(text), false) if !text.is_empty() => return Lookup::Found(text),
                (Entry::Text(_) | Entry::Group(_), _) => return Lookup::Missing,
            }
        }
        Lookup::Missing
    }
}

impl<K: Into<String>, E: Into<Entry>> FromIterator<(K, E)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        Dictionary {
            entries: iter
                .into_iter()
                .map(|(segment, entry)| (segment.into(), entry.into()))
                .collect(),
        }
    }
}

impl TryFrom<JsonValue> for Dictionary {
    type Error = DictionaryError;

    /// Converts an already-parsed JSON document.
    ///
    /// Numbers and booleans become text leaves, arrays become groups keyed
    /// by index and `null` members are skipped.
    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        let found = match value {
            JsonValue::Object(map) => {
                return Ok(map
                    .into_iter()
                    .filter_map(|(name, item)| Entry::from_json(item).map(|e| (name, e)))
                    .collect());
            }
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "a boolean",
            JsonValue::Number(_) => "a number",
            JsonValue::String(_) => "a string",
            JsonValue::Array(_) => "an array",
        };
        Err(DictionaryError::NotAnObject { found })
    }
}
