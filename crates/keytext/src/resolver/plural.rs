//! Plural-form selection.

use crate::parser::{exact_marker, range_marker};

/// Pick the plural form for `count` from a leaf already split on `|`.
///
/// Supported shapes:
///
/// - `one|other`: index 0 when `count == 1`, index 1 otherwise
/// - `{0} none|{1} one|[2-10] few|[11-*] many`: explicit selectors
///
/// Forms are scanned in order; for each form an exact `{N}` marker is tried
/// before a range marker. The first match returns the text after its marker.
/// Without a match the positional form is returned as written, markers
/// included. A single form is returned for every count.
///
/// # Example
///
/// ```
/// use keytext::select_form;
///
/// let forms = ["{0} none", "{1} one", "[2-*] :count"];
/// assert_eq!(select_form(0, &forms), Some("none"));
/// assert_eq!(select_form(7, &forms), Some(":count"));
///
/// assert_eq!(select_form(1, &["Company", "Companies"]), Some("Company"));
/// assert_eq!(select_form(5, &["Company", "Companies"]), Some("Companies"));
/// assert_eq!(select_form(5, &[]), None);
/// ```
pub fn select_form<'a>(count: i64, forms: &[&'a str]) -> Option<&'a str> {
    let (&first, rest) = forms.split_first()?;
    let Some(&second) = rest.first() else {
        return Some(first);
    };
    let positional = if count == 1 { first } else { second };

    for &form in forms {
        if let Some(marker) = exact_marker(form).filter(|m| m.matches(count)) {
            return Some(marker.text);
        }
        if let Some(marker) = range_marker(form).filter(|m| m.contains(count)) {
            return Some(marker.text);
        }
    }

    Some(positional)
}
