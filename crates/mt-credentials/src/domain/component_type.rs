//! # Credential Component Type
//!
//! The discriminator carried by every serialized credential component.

use shared_types::Tag;

/// Kind of a credential component.
///
/// Each single-value component owns exactly one of these, and no two
/// components share one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CredentialComponentType {
    /// Account name.
    Username,
    /// Plaintext password.
    Password,
    /// LAN Manager hash.
    LmHash,
    /// NT (NTLM) hash.
    NtHash,
}

impl Tag for CredentialComponentType {
    const KIND: &'static str = "credential component type";
    const ALL: &'static [Self] = &[Self::Username, Self::Password, Self::LmHash, Self::NtHash];

    fn name(&self) -> &'static str {
        match self {
            Self::Username => "USERNAME",
            Self::Password => "PASSWORD",
            Self::LmHash => "LM_HASH",
            Self::NtHash => "NT_HASH",
        }
    }
}

shared_types::impl_tag_traits!(CredentialComponentType);

impl CredentialComponentType {
    /// Whether components of this kind hold secret material.
    pub fn is_secret(&self) -> bool {
        !matches!(self, Self::Username)
    }
}
