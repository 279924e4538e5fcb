//! Error types for dictionary construction.

use thiserror::Error;

/// Errors that occur when converting host data into a [`Dictionary`].
///
/// [`Dictionary`]: super::Dictionary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DictionaryError {
    /// The root of a dictionary must be a mapping.
    #[error("dictionary root must be an object, found {found}")]
    NotAnObject { found: &'static str },
}
