use std::borrow::Cow;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use super::Dictionary;

/// Where a translator reads its dictionary from.
///
/// A supplier is called on every access and its result is never cached, so
/// it can serve a dictionary that changes while the translator is alive.
///
/// # Example
///
/// ```
/// use keytext::{Dictionary, DictionarySource};
///
/// let source = DictionarySource::supplier(|| {
///     let mut dictionary = Dictionary::new();
///     dictionary.insert("yes", "Yes");
///     dictionary
/// });
/// assert_eq!(source.get().lookup("yes").found(), Some("Yes"));
/// ```
#[derive(Clone)]
pub enum DictionarySource {
    /// A dictionary fixed at construction.
    Static(Dictionary),

    /// A zero-argument function producing the dictionary.
    Supplier(Arc<dyn Fn() -> Dictionary + Send + Sync>),
}

impl DictionarySource {
    /// Wrap a supplier function.
    pub fn supplier(f: impl Fn() -> Dictionary + Send + Sync + 'static) -> Self {
        DictionarySource::Supplier(Arc::new(f))
    }

    /// Get the current dictionary, invoking the supplier if there is one.
    pub fn get(&self) -> Cow<'_, Dictionary> {
        match self {
            DictionarySource::Static(dictionary) => Cow::Borrowed(dictionary),
            DictionarySource::Supplier(f) => Cow::Owned(f()),
        }
    }
}

impl Default for DictionarySource {
    fn default() -> Self {
        DictionarySource::Static(Dictionary::default())
    }
}

impl Debug for DictionarySource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DictionarySource::Static(dictionary) => {
                f.debug_tuple("Static").field(dictionary).finish()
            }
            DictionarySource::Supplier(_) => f.write_str("Supplier(..)"),
        }
    }
}

impl From<Dictionary> for DictionarySource {
    fn from(dictionary: Dictionary) -> Self {
        DictionarySource::Static(dictionary)
    }
}
