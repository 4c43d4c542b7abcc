//! # Domain Value Objects
//!
//! Immutable single-value credential components. Each wraps one string
//! payload and always reports the same [`CredentialComponentType`].
//!
//! ## Security
//!
//! Secret-bearing components (`Password`, `LmHash`, `NtHash`) never print
//! their payload through `Debug` and wipe it when dropped. The payload is
//! still plaintext while the value is alive.

use std::fmt;

use serde_json::Value;
use shared_types::Tag;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::component_type::CredentialComponentType;
use super::errors::CredentialError;
use super::invariants::{invariant_hex_hash, invariant_string_payload};

/// A credential component holding a single string payload.
///
/// The tag and payload field name are fixed per implementing type.
pub trait SingleValueComponent: Sized {
    /// Tag owned by this component.
    const COMPONENT_TYPE: CredentialComponentType;

    /// Key under which the payload is serialized.
    const PAYLOAD_FIELD: &'static str;

    /// Check payload shape beyond "is a string".
    fn validate_payload(payload: &str) -> Result<(), CredentialError> {
        let _ = payload;
        Ok(())
    }

    /// Build the component from an owned, already-typed payload.
    fn from_payload(payload: String) -> Result<Self, CredentialError>;

    /// The payload string.
    fn payload(&self) -> &str;

    /// Tag of this component.
    fn component_type(&self) -> CredentialComponentType {
        Self::COMPONENT_TYPE
    }

    /// Build the component from an untyped JSON payload.
    ///
    /// Anything other than a JSON string is rejected with
    /// [`CredentialError::InvalidPayload`].
    fn from_raw(raw: &Value) -> Result<Self, CredentialError> {
        let payload = invariant_string_payload(Self::PAYLOAD_FIELD, Some(raw))?;
        Self::from_payload(payload.to_owned())
    }
}

/// Validate a secret payload, wiping it if it is rejected.
fn checked_secret<C: SingleValueComponent>(mut payload: String) -> Result<String, CredentialError> {
    match C::validate_payload(&payload) {
        Ok(()) => Ok(payload),
        Err(e) => {
            payload.zeroize();
            Err(e)
        }
    }
}

// =============================================================================
// USERNAME
// =============================================================================

/// An account name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Username {
    username: String,
}

impl Username {
    /// Create a new username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// The username text.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl SingleValueComponent for Username {
    const COMPONENT_TYPE: CredentialComponentType = CredentialComponentType::Username;
    const PAYLOAD_FIELD: &'static str = "username";

    fn from_payload(payload: String) -> Result<Self, CredentialError> {
        Ok(Self::new(payload))
    }

    fn payload(&self) -> &str {
        &self.username
    }
}

// =============================================================================
// PASSWORD
// =============================================================================

/// A plaintext password.
#[derive(Clone, PartialEq, Eq, Hash, ZeroizeOnDrop)]
pub struct Password {
    password: String,
}

impl Password {
    /// Create a new password.
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// The password text (use carefully!).
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl SingleValueComponent for Password {
    const COMPONENT_TYPE: CredentialComponentType = CredentialComponentType::Password;
    const PAYLOAD_FIELD: &'static str = "password";

    fn from_payload(payload: String) -> Result<Self, CredentialError> {
        Ok(Self::new(payload))
    }

    fn payload(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

// =============================================================================
// LM HASH
// =============================================================================

/// A LAN Manager hash, as 32 hex digits.
#[derive(Clone, PartialEq, Eq, Hash, ZeroizeOnDrop)]
pub struct LmHash {
    lm_hash: String,
}

impl LmHash {
    /// Create a new LM hash, rejecting anything that is not 32 hex digits.
    pub fn new(lm_hash: impl Into<String>) -> Result<Self, CredentialError> {
        let lm_hash = checked_secret::<Self>(lm_hash.into())?;
        Ok(Self { lm_hash })
    }

    /// The hash as hex (use carefully!).
    pub fn lm_hash(&self) -> &str {
        &self.lm_hash
    }
}

impl SingleValueComponent for LmHash {
    const COMPONENT_TYPE: CredentialComponentType = CredentialComponentType::LmHash;
    const PAYLOAD_FIELD: &'static str = "lm_hash";

    fn validate_payload(payload: &str) -> Result<(), CredentialError> {
        invariant_hex_hash(Self::PAYLOAD_FIELD, payload)
    }

    fn from_payload(payload: String) -> Result<Self, CredentialError> {
        Self::new(payload)
    }

    fn payload(&self) -> &str {
        &self.lm_hash
    }
}

impl fmt::Debug for LmHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LmHash(***)")
    }
}

// =============================================================================
// NT HASH
// =============================================================================

/// An NT hash, as 32 hex digits.
#[derive(Clone, PartialEq, Eq, Hash, ZeroizeOnDrop)]
pub struct NtHash {
    nt_hash: String,
}

impl NtHash {
    /// Create a new NT hash, rejecting anything that is not 32 hex digits.
    pub fn new(nt_hash: impl Into<String>) -> Result<Self, CredentialError> {
        let nt_hash = checked_secret::<Self>(nt_hash.into())?;
        Ok(Self { nt_hash })
    }

    /// The hash as hex (use carefully!).
    pub fn nt_hash(&self) -> &str {
        &self.nt_hash
    }
}

impl SingleValueComponent for NtHash {
    const COMPONENT_TYPE: CredentialComponentType = CredentialComponentType::NtHash;
    const PAYLOAD_FIELD: &'static str = "nt_hash";

    fn validate_payload(payload: &str) -> Result<(), CredentialError> {
        invariant_hex_hash(Self::PAYLOAD_FIELD, payload)
    }

    fn from_payload(payload: String) -> Result<Self, CredentialError> {
        Self::new(payload)
    }

    fn payload(&self) -> &str {
        &self.nt_hash
    }
}

impl fmt::Debug for NtHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NtHash(***)")
    }
}

// =============================================================================
// CLOSED SUM
// =============================================================================

/// Any credential component.
///
/// Equality compares kind and payload: two components are equal only if
/// they are the same variant holding the same string. `Debug` shows the
/// payload only for kinds that are not secret.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum CredentialComponent {
    /// See [`Username`].
    Username(Username),
    /// See [`Password`].
    Password(Password),
    /// See [`LmHash`].
    LmHash(LmHash),
    /// See [`NtHash`].
    NtHash(NtHash),
}

impl CredentialComponent {
    /// Tag of the wrapped component.
    pub fn component_type(&self) -> CredentialComponentType {
        match self {
            Self::Username(c) => c.component_type(),
            Self::Password(c) => c.component_type(),
            Self::LmHash(c) => c.component_type(),
            Self::NtHash(c) => c.component_type(),
        }
    }

    /// Payload of the wrapped component.
    pub fn payload(&self) -> &str {
        match self {
            Self::Username(c) => c.payload(),
            Self::Password(c) => c.payload(),
            Self::LmHash(c) => c.payload(),
            Self::NtHash(c) => c.payload(),
        }
    }
}

impl fmt::Debug for CredentialComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let component_type = self.component_type();
        if component_type.is_secret() {
            write!(f, "{component_type}(***)")
        } else {
            f.debug_tuple(component_type.name())
                .field(&self.payload())
                .finish()
        }
    }
}

impl From<Username> for CredentialComponent {
    fn from(c: Username) -> Self {
        Self::Username(c)
    }
}

impl From<Password> for CredentialComponent {
    fn from(c: Password) -> Self {
        Self::Password(c)
    }
}

impl From<LmHash> for CredentialComponent {
    fn from(c: LmHash) -> Self {
        Self::LmHash(c)
    }
}

impl From<NtHash> for CredentialComponent {
    fn from(c: NtHash) -> Self {
        Self::NtHash(c)
    }
}
