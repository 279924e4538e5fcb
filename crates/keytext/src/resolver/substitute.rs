//! Placeholder substitution.

use crate::types::Replacements;

/// Replace every `:name` in `template` with its value.
///
/// Names are applied in insertion order and each replacement is global.
/// Text inserted by one replacement is visible to later ones, so
/// overlapping names such as `:name` and `:names` depend on that order.
///
/// # Example
///
/// ```
/// use keytext::{Replacements, substitute};
///
/// let replace: Replacements = [("name", "John")].into_iter().collect();
/// assert_eq!(substitute("Hello :name, :name!", Some(&replace)), "Hello John, John!");
/// assert_eq!(substitute("Hello :name", None), "Hello :name");
/// ```
pub fn substitute(template: &str, replace: Option<&Replacements>) -> String {
    let Some(replace) = replace else {
        return template.to_string();
    };
    replace
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!(":{name}"), &value.to_string())
        })
}
