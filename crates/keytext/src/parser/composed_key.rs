//! Composed keys: `base.key[count]{name:value,...}`.
//!
//! The `[count]` and `{...}` groups are both optional but must sit at the
//! very end of the key, in that order. Extraction is all-or-nothing: when the
//! trailing groups are not well-formed the whole input is the key.

use tracing::trace;
use winnow::ascii::digit1;
use winnow::combinator::{delimited, opt};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::rest;

use super::error::ParseError;
use super::is_line_terminator;
use crate::types::Replacements;

/// A key split into its base key and inline arguments.
///
/// # Example
///
/// ```
/// use keytext::ComposedKey;
///
/// let parsed = ComposedKey::parse("companies.name[2]{name:Apple, other:Microsoft}");
/// assert_eq!(parsed.key, "companies.name");
/// assert_eq!(parsed.count, Some(2));
///
/// let replace = parsed.replace.unwrap();
/// assert_eq!(replace.get("other").unwrap().to_string(), "Microsoft");
///
/// // Unterminated groups are not stripped.
/// let parsed = ComposedKey::parse("greetings.hello{name:John");
/// assert_eq!(parsed.key, "greetings.hello{name:John");
/// assert_eq!(parsed.count, None);
/// assert!(parsed.replace.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedKey {
    /// The dictionary key without inline arguments.
    pub key: String,

    /// The inline `[count]`, if present.
    pub count: Option<i64>,

    /// The inline `{name:value,...}` list, if present.
    pub replace: Option<Replacements>,
}

impl ComposedKey {
    /// Whether `key` contains `[` or `{` anywhere.
    ///
    /// This is a cheap pre-check; only [`ComposedKey::try_parse`] decides
    /// whether the key is structurally composed.
    pub fn is_composed(key: &str) -> bool {
        key.contains(['[', '{'])
    }

    /// A key with no inline arguments.
    pub fn literal(key: impl Into<String>) -> Self {
        ComposedKey {
            key: key.into(),
            count: None,
            replace: None,
        }
    }

    /// Split `input`, falling back to the whole input as a literal key.
    pub fn parse(input: &str) -> Self {
        Self::try_parse(input).unwrap_or_else(|err| {
            trace!(key = input, %err, "treating key as literal");
            Self::literal(input)
        })
    }

    /// Split `input` into base key, count and replacements.
    ///
    /// The base key is the shortest non-empty prefix whose remainder is a
    /// complete `[digits]` and/or `{...}` suffix. A count whose digits do not
    /// fit an `i64` saturates to `i64::MAX`.
    pub fn try_parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some(position) = input.find(is_line_terminator) {
            return Err(ParseError::LineTerminator { position });
        }

        for (split, _) in input.char_indices().skip(1) {
            let mut remaining = &input[split..];
            let Ok((count, args)) = suffix(&mut remaining) else {
                continue;
            };
            if !remaining.is_empty() {
                continue;
            }
            return Ok(ComposedKey {
                key: input[..split].to_string(),
                count: count.map(|digits| digits.parse().unwrap_or(i64::MAX)),
                replace: args.map(parse_replacements),
            });
        }

        Err(ParseError::NoSuffix {
            input: input.to_string(),
        })
    }
}

/// Parse `name:value,name:value` into a replacement set.
///
/// Names and values are trimmed. Only the first two `:`-separated parts of a
/// pair are used and pairs without a `:` are dropped.
fn parse_replacements(args: &str) -> Replacements {
    args.split(',')
        .filter_map(|pair| {
            let mut parts = pair.split(':');
            let name = parts.next()?.trim();
            let value = parts.next()?.trim();
            Some((name, value))
        })
        .collect()
}

/// Parse the optional `[count]` and `{args}` groups.
fn suffix<'i>(input: &mut &'i str) -> ModalResult<(Option<&'i str>, Option<&'i str>)> {
    (opt(count_group), opt(args_group)).parse_next(input)
}

/// Parse `[digits]`.
fn count_group<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('[', digit1, ']').parse_next(input)
}

/// Parse `{...}` running to the end of input, with a non-empty body.
fn args_group<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    '{'.parse_next(input)?;
    let body = rest.parse_next(input)?;
    match body.strip_suffix('}') {
        Some(args) if !args.is_empty() => Ok(args),
        _ => Err(ErrMode::Backtrack(ContextError::new())),
    }
}
