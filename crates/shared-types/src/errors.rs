//! # Error Types
//!
//! Defines error types shared by every crate that works with tag sets
//! or encoded byte payloads.

use thiserror::Error;

/// A name that does not belong to a closed tag set.
///
/// Raised by [`crate::Tag::from_name`] for any string outside the set,
/// including case variants of valid names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {name:?}")]
pub struct UnknownTagError {
    /// Which tag set rejected the name (e.g. "credential component type").
    pub kind: &'static str,
    /// The rejected name, verbatim.
    pub name: String,
}

impl UnknownTagError {
    /// Create a new error for `name` rejected by the `kind` tag set.
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Errors raised while reading a [`crate::B64Bytes`] value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BytesError {
    /// The input string is not valid padded standard base64.
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),

    /// The input is neither bytes nor a base64 string.
    #[error("Expected bytes or a base64 string, found {found}")]
    NotBytes { found: String },
}
