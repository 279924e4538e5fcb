//! Plural-form markers.
//!
//! A plural form may carry one of two selectors:
//!
//! - `{N}` matches exactly `N`
//! - `[N-M]`, `[N,M]`, `[N-*]`, `[N,*]` match the inclusive range `N..=M`,
//!   where `*` leaves the range open
//!
//! Markers are searched for anywhere in the form; the leftmost well-formed
//! marker wins. The text after a marker runs to the end of the line.

use winnow::ascii::{digit0, digit1};
use winnow::combinator::opt;
use winnow::prelude::*;
use winnow::token::{one_of, take_till, take_while};

use super::is_line_terminator;

/// An exact-count marker and the text it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactMarker<'a> {
    /// The marker's number, `None` if it does not fit an `i64`.
    pub count: Option<i64>,

    /// The text following the marker.
    pub text: &'a str,
}

impl ExactMarker<'_> {
    /// Whether this marker selects `count`.
    pub fn matches(&self, count: i64) -> bool {
        self.count == Some(count)
    }
}

/// Upper end of a range marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    /// An inclusive upper bound.
    Bounded(i64),

    /// `*`, or a bound too large to represent.
    Unbounded,

    /// No digits and no `*`; the range matches nothing.
    Invalid,
}

/// A range marker and the text it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeMarker<'a> {
    /// The inclusive lower bound, `None` if it does not fit an `i64`.
    pub from: Option<i64>,

    /// The upper bound.
    pub to: RangeEnd,

    /// The text following the marker.
    pub text: &'a str,
}

impl RangeMarker<'_> {
    /// Whether `count` falls inside this range.
    pub fn contains(&self, count: i64) -> bool {
        let Some(from) = self.from else {
            return false;
        };
        match self.to {
            RangeEnd::Bounded(to) => (from..=to).contains(&count),
            RangeEnd::Unbounded => count >= from,
            RangeEnd::Invalid => false,
        }
    }
}

/// Find the leftmost `{N}` marker in `form`.
///
/// ```
/// use keytext::parser::exact_marker;
///
/// let marker = exact_marker("{1} One company").unwrap();
/// assert_eq!(marker.count, Some(1));
/// assert_eq!(marker.text, "One company");
/// assert!(exact_marker("Companies").is_none());
/// ```
pub fn exact_marker(form: &str) -> Option<ExactMarker<'_>> {
    form.match_indices('{').find_map(|(start, _)| {
        let mut remaining = &form[start..];
        exact(&mut remaining).ok()
    })
}

/// Find the leftmost `[N-M]` style marker in `form`.
///
/// ```
/// use keytext::parser::{RangeEnd, range_marker};
///
/// let marker = range_marker("[2 - 10] :count companies").unwrap();
/// assert_eq!(marker.from, Some(2));
/// assert_eq!(marker.to, RangeEnd::Bounded(10));
/// assert_eq!(marker.text, ":count companies");
///
/// let marker = range_marker("[11,*] A lot").unwrap();
/// assert_eq!(marker.to, RangeEnd::Unbounded);
/// ```
pub fn range_marker(form: &str) -> Option<RangeMarker<'_>> {
    form.match_indices('[').find_map(|(start, _)| {
        let mut remaining = &form[start..];
        range(&mut remaining).ok()
    })
}

/// Parse `{digits}` plus the selected text.
fn exact<'i>(input: &mut &'i str) -> ModalResult<ExactMarker<'i>> {
    '{'.parse_next(input)?;
    let digits = digit1.parse_next(input)?;
    '}'.parse_next(input)?;
    let _ = opt(one_of(char::is_whitespace)).parse_next(input)?;
    let text = line_text(input)?;
    Ok(ExactMarker {
        count: digits.parse().ok(),
        text,
    })
}

/// Parse `[ digits (-|,) (digits|*) ]` plus the selected text.
fn range<'i>(input: &mut &'i str) -> ModalResult<RangeMarker<'i>> {
    '['.parse_next(input)?;
    ws(input)?;
    let from = digit1.parse_next(input)?;
    ws(input)?;
    one_of(['-', ',']).parse_next(input)?;
    ws(input)?;
    let to = (digit0, opt('*')).take().parse_next(input)?;
    ws(input)?;
    ']'.parse_next(input)?;
    ws(input)?;
    let text = line_text(input)?;
    Ok(RangeMarker {
        from: from.parse().ok(),
        to: range_end(to),
        text,
    })
}

/// Interpret the upper bound: `*`, digits optionally followed by `*`, or
/// nothing at all.
fn range_end(raw: &str) -> RangeEnd {
    let digits = raw.trim_end_matches('*');
    if digits.is_empty() {
        return if raw == "*" {
            RangeEnd::Unbounded
        } else {
            RangeEnd::Invalid
        };
    }
    digits
        .parse()
        .map_or(RangeEnd::Unbounded, RangeEnd::Bounded)
}

/// Text up to the end of the current line.
fn line_text<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_till(0.., is_line_terminator).parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}
