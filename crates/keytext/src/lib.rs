//! Key-based translation resolver.
//!
//! Looks up dot-separated keys in a nested [`Dictionary`], picks plural forms
//! by count and substitutes `:name` placeholders. Keys may carry their
//! arguments inline: `"companies.title[3]"` or `"greetings.hello{name:John}"`.

pub mod dictionary;
#[cfg(feature = "global-translator")]
pub mod global;
pub mod parser;
pub mod resolver;
pub mod types;

pub use dictionary::{Dictionary, DictionaryError, DictionarySource, Entry, Lookup};
pub use parser::{ComposedKey, ParseError};
pub use resolver::{Translator, select_form, substitute};
pub use types::{Replace, Replacements, Value};

/// Creates a [`Replacements`] set from name-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats and strings
/// can be mixed freely. Pairs keep their written order.
///
/// # Example
///
/// ```
/// use keytext::{Value, replace};
///
/// let r = replace! { "count" => 3, "name" => "Alice" };
/// assert_eq!(r.len(), 2);
/// assert_eq!(r.get("count"), Some(&Value::Number(3)));
/// assert_eq!(r.get("name").and_then(Value::as_string), Some("Alice"));
/// ```
#[macro_export]
macro_rules! replace {
    {} => {
        $crate::Replacements::new()
    };
    { $($name:expr => $value:expr),+ $(,)? } => {
        {
            let mut replace = $crate::Replacements::new();
            $(
                replace.insert($name, ::std::convert::Into::<$crate::Value>::into($value));
            )+
            replace
        }
    };
}
