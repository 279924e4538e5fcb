//! Parse error types for composed keys.

use thiserror::Error;

/// Why a key could not be split into a base key and inline arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The key is empty.
    #[error("empty key")]
    Empty,

    /// Composed keys are single-line.
    #[error("line terminator at byte {position}")]
    LineTerminator { position: usize },

    /// No trailing `[count]` or `{name:value,...}` group is well-formed.
    #[error("no well-formed `[count]` or `{{...}}` suffix in '{input}'")]
    NoSuffix { input: String },
}
