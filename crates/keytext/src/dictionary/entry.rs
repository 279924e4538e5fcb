use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::Dictionary;

/// A dictionary node: a text leaf or a nested group.
///
/// Text leaves may hold several plural forms separated by `|`, for example
/// `"Company|Companies"` or `"{0} none|[1-*] :count items"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A translated string.
    Text(String),

    /// A nested mapping of further segments.
    Group(Dictionary),
}

impl Entry {
    /// Get this entry as text, if it is a leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Entry::Text(text) => Some(text),
            Entry::Group(_) => None,
        }
    }

    /// Get this entry as a group, if it is one.
    pub fn as_group(&self) -> Option<&Dictionary> {
        match self {
            Entry::Group(group) => Some(group),
            Entry::Text(_) => None,
        }
    }

    /// Converts a JSON node. `null` has no entry form.
    pub(crate) fn from_json(value: JsonValue) -> Option<Entry> {
        match value {
            JsonValue::Null => None,
            JsonValue::String(s) => Some(Entry::Text(s)),
            JsonValue::Bool(b) => Some(Entry::Text(b.to_string())),
            JsonValue::Number(n) => Some(Entry::Text(n.to_string())),
            JsonValue::Array(items) => Some(Entry::Group(
                items
                    .into_iter()
                    .enumerate()
                    .filter_map(|(i, item)| Entry::from_json(item).map(|e| (i.to_string(), e)))
                    .collect(),
            )),
            JsonValue::Object(map) => Some(Entry::Group(
                map.into_iter()
                    .filter_map(|(name, item)| Entry::from_json(item).map(|e| (name, e)))
                    .collect(),
            )),
        }
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Entry::Text(text.to_string())
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Entry::Text(text)
    }
}

impl From<Dictionary> for Entry {
    fn from(group: Dictionary) -> Self {
        Entry::Group(group)
    }
}
