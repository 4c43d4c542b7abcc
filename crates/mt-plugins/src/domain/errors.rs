//! # Domain Errors
//!
//! Error types for plugin metadata validation.

use shared_types::UnknownTagError;
use thiserror::Error;

/// Plugin metadata error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    /// Plugin type or operating system name outside its closed set.
    #[error(transparent)]
    UnknownTag(#[from] UnknownTagError),

    /// Version string is not a semantic version.
    #[error("Invalid version {input:?}: {reason}")]
    VersionFormat {
        /// The rejected input
        input: String,
        /// Parser message
        reason: String,
    },

    /// A manifest field violates its constraint.
    #[error("Invalid manifest field {field:?}: {reason}")]
    ManifestField {
        /// Field name
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// Manifest document has the wrong structure (wrong JSON types,
    /// unknown keys).
    #[error("Malformed manifest: {0}")]
    MalformedManifest(String),
}

impl PluginError {
    /// Shorthand for [`PluginError::ManifestField`].
    pub fn field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ManifestField {
            field,
            reason: reason.into(),
        }
    }
}
