//! # Domain Errors
//!
//! Validation failures raised while constructing or deserializing
//! credential components. Every variant rejects the whole input; there is
//! no partial result.

use shared_types::UnknownTagError;
use thiserror::Error;

use super::component_type::CredentialComponentType;

/// Credential component error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Discriminator names a tag outside the closed set.
    #[error(transparent)]
    UnknownTag(#[from] UnknownTagError),

    /// Discriminator field absent.
    #[error("Missing discriminator: no {key:?} field")]
    MissingDiscriminator {
        /// Expected discriminator key
        key: &'static str,
    },

    /// Discriminator names a valid tag that is not the schema's own.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Tag the schema is bound to
        expected: CredentialComponentType,
        /// Tag found in the input
        found: CredentialComponentType,
    },

    /// Payload absent, null, of the wrong type, or badly shaped.
    #[error("Invalid payload for {field:?}: {reason}")]
    InvalidPayload {
        /// Payload field name
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// Key not recognised by a strict schema.
    #[error("Unexpected field: {field:?}")]
    UnexpectedField {
        /// The unrecognised key
        field: String,
    },
}

impl CredentialError {
    /// Shorthand for [`CredentialError::InvalidPayload`].
    pub fn invalid_payload(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            field,
            reason: reason.into(),
        }
    }
}
