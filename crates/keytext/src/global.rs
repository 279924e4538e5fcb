//! Process-wide translator for the `global-translator` feature.
//!
//! Lets an application install one translator at startup and call the
//! [`txt`] and [`txts`] shortcuts from anywhere, without threading a
//! `&Translator` through every layer.

use std::sync::{LazyLock, PoisonError, RwLock};

use crate::{DictionarySource, Replace, Translator};

static GLOBAL_TRANSLATOR: LazyLock<RwLock<Translator>> =
    LazyLock::new(|| RwLock::new(Translator::default()));

/// Provides read access to the global translator.
pub fn with_translator<T>(f: impl FnOnce(&Translator) -> T) -> T {
    let guard = GLOBAL_TRANSLATOR
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Provides write access to the global translator.
pub fn with_translator_mut<T>(f: impl FnOnce(&mut Translator) -> T) -> T {
    let mut guard = GLOBAL_TRANSLATOR
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Replaces the global translator.
pub fn install(translator: Translator) {
    with_translator_mut(|global| *global = translator);
}

/// Replaces the global translator's dictionary or supplier.
pub fn set_dictionary(dictionary: impl Into<DictionarySource>) {
    with_translator_mut(|global| global.set_dictionary(dictionary));
}

/// Shortcut for [`Translator::translate`] on the global translator.
pub fn txt(key: &str, replace: impl Into<Replace>) -> String {
    with_translator(|translator| translator.translate(key, replace))
}

/// Shortcut for [`Translator::translate_plural`] on the global translator.
pub fn txts(key: &str, count: i64, replace: impl Into<Replace>) -> String {
    with_translator(|translator| translator.translate_plural(key, count, replace))
}
