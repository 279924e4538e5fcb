//! The user-facing translator.

use std::borrow::Cow;

use bon::Builder;
use tracing::debug;

use crate::dictionary::{Dictionary, DictionarySource};
use crate::parser::ComposedKey;
use crate::resolver::{select_form, substitute};
use crate::types::{Replace, Replacements};

/// Resolves translation keys against a dictionary.
///
/// Resolution never fails: an unknown key comes back unchanged, a malformed
/// composed key is treated as a literal key, and placeholders without a
/// replacement are left in place.
///
/// Pass `()` as the replacement argument when there is nothing to substitute.
///
/// # Example
///
/// ```
/// use keytext::{Dictionary, Translator, replace};
///
/// let dictionary = Dictionary::try_from(serde_json::json!({
///     "greetings": { "hello": "Hello :name" },
///     "companies": {
///         "title": "{0}No company available|{1} One company available|[2-10] :count companies available|[11-*] A lot of companies available",
///     },
/// }))
/// .unwrap();
///
/// let translator = Translator::builder().dictionary(dictionary).build();
///
/// assert_eq!(translator.translate("greetings.hello", replace! { "name" => "John" }), "Hello John");
/// assert_eq!(translator.translate("unknown.key", ()), "unknown.key");
/// assert_eq!(translator.translate_plural("companies.title", 0, ()), "No company available");
/// assert_eq!(translator.translate("companies.title[3]", ()), "3 companies available");
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct Translator {
    /// The dictionary, or a supplier evaluated on every lookup.
    #[builder(default, into)]
    dictionary: DictionarySource,
}

impl Translator {
    /// Create a translator over a fixed dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        Translator::builder().dictionary(dictionary).build()
    }

    /// Create a translator whose dictionary is produced by `f` on each call.
    pub fn with_supplier(f: impl Fn() -> Dictionary + Send + Sync + 'static) -> Self {
        Translator::builder()
            .dictionary(DictionarySource::supplier(f))
            .build()
    }

    // =========================================================================
    // Dictionary Access
    // =========================================================================

    /// Get the current dictionary, invoking the supplier if one is set.
    ///
    /// Nothing is cached: callers that need a stable view across several
    /// lookups should hold on to the returned value.
    pub fn dictionary(&self) -> Cow<'_, Dictionary> {
        self.dictionary.get()
    }

    /// Replace the dictionary or supplier.
    pub fn set_dictionary(&mut self, dictionary: impl Into<DictionarySource>) {
        self.dictionary = dictionary.into();
    }

    /// Replace the dictionary with a supplier function.
    pub fn set_supplier(&mut self, f: impl Fn() -> Dictionary + Send + Sync + 'static) {
        self.dictionary = DictionarySource::supplier(f);
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate `key`, substituting `replace` into the result.
    ///
    /// Resolution order:
    /// 1. A dictionary hit, or any supplied replacement, substitutes into the
    ///    translation (or into `key` itself when there is no translation).
    /// 2. A key without `[` or `{` is returned unchanged.
    /// 3. A composed key with a count resolves as
    ///    [`translate_plural`](Self::translate_plural).
    /// 4. A composed key with only replacements resolves its base key with
    ///    them.
    /// 5. Otherwise the base key is returned.
    pub fn translate(&self, key: &str, replace: impl Into<Replace>) -> String {
        let dictionary = self.dictionary();
        translate_in(&dictionary, key, &replace.into())
    }

    /// [`translate`](Self::translate) for an optional key; `None` stays `None`.
    pub fn translate_opt(&self, key: Option<&str>, replace: impl Into<Replace>) -> Option<String> {
        key.map(|key| self.translate(key, replace))
    }

    /// Translate the plural form of `key` selected by `count`.
    ///
    /// `:count` and `:value` default to `count`; explicit replacements win.
    /// An empty key, an unknown key or a leaf with no forms returns `key`.
    pub fn translate_plural(&self, key: &str, count: i64, replace: impl Into<Replace>) -> String {
        let dictionary = self.dictionary();
        translate_plural_in(&dictionary, key, count, &replace.into())
    }

    /// [`translate_plural`](Self::translate_plural) for an optional key.
    pub fn translate_plural_opt(
        &self,
        key: Option<&str>,
        count: i64,
        replace: impl Into<Replace>,
    ) -> Option<String> {
        key.map(|key| self.translate_plural(key, count, replace))
    }
}

fn translate_in(dictionary: &Dictionary, key: &str, replace: &Replace) -> String {
    let translation = dictionary.lookup(key).found();
    if translation.is_some() || replace.is_supplied() {
        return substitute(translation.unwrap_or(key), replace.normalize().as_ref());
    }

    if !ComposedKey::is_composed(key) {
        if !key.is_empty() {
            debug!(key, "no translation found");
        }
        return key.to_string();
    }

    let composed = ComposedKey::parse(key);
    match (composed.count, composed.replace) {
        (Some(count), replace) => {
            translate_plural_in(dictionary, &composed.key, count, &replace.into())
        }
        (None, Some(replace)) => translate_in(dictionary, &composed.key, &Replace::Map(replace)),
        (None, None) => composed.key,
    }
}

fn translate_plural_in(dictionary: &Dictionary, key: &str, count: i64, replace: &Replace) -> String {
    let Some(translation) = dictionary.lookup(key).found() else {
        if !key.is_empty() {
            debug!(key, count, "no plural translation found");
        }
        return key.to_string();
    };

    let forms: Vec<&str> = translation.split('|').collect();
    let Some(form) = select_form(count, &forms) else {
        debug!(key, count, "translation has no plural forms");
        return key.to_string();
    };

    let defaults = Replacements::for_count(count);
    let replace = match replace.normalize() {
        Some(explicit) => explicit.merged_over(defaults),
        None => defaults,
    };
    substitute(form, Some(&replace))
}
