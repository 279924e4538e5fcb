//! Parsers for composed keys and plural-form markers.
//!
//! Both grammars are tiny and line-oriented, so they are written as winnow
//! combinators over `&str` rather than compiled patterns.

mod composed_key;
pub mod error;
mod plural_form;

pub use composed_key::ComposedKey;
pub use error::ParseError;
pub use plural_form::{ExactMarker, RangeEnd, RangeMarker, exact_marker, range_marker};

/// Whether `c` ends a line for marker and key matching purposes.
pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
