//! # MT Credentials
//!
//! Self-describing credential components: usernames, passwords and
//! password hashes, each tagged with its kind.
//!
//! ## Wire Format
//!
//! ```text
//! { "credential_type": "<TAG_NAME>", "<field>": "<payload>" }
//! ```
//!
//! | Tag | Field | Payload |
//! |-----|-------|---------|
//! | `USERNAME` | `username` | any string |
//! | `PASSWORD` | `password` | any string |
//! | `LM_HASH` | `lm_hash` | 32 hex digits |
//! | `NT_HASH` | `nt_hash` | 32 hex digits |
//!
//! ## Invariants
//!
//! - A schema accepts its own tag and nothing else, even other valid tags.
//! - Payloads are strings; null and numbers are rejected, never coerced.
//! - `load(serialize(v)) == v` for every component.
//!
//! ## Module Structure
//!
//! ```text
//! mt-credentials/
//! ├── domain/          # CredentialComponentType, components, invariants, errors
//! └── schema/          # ComponentSchema, ComponentRegistry, SchemaConfig, serde
//! ```
//!
//! ## Usage Example
//!
//! ```ignore
//! use mt_credentials::{ComponentSchema, Password, SingleValueComponent};
//!
//! let schema = ComponentSchema::<Password>::new();
//! let mapping = schema.serialize(&Password::new("123456"));
//! let payload = schema.deserialize(&mapping)?;
//! assert_eq!(Password::from_payload(payload)?, Password::new("123456"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod schema;

// Re-exports
pub use domain::{
    invariant_hex_hash, invariant_string_payload, CredentialComponent, CredentialComponentType,
    CredentialError, LmHash, NtHash, Password, SingleValueComponent, Username, HASH_HEX_LEN,
};
pub use schema::{
    read_discriminator, ComponentRegistry, ComponentSchema, KeyPolicy, Mapping, SchemaConfig,
    DISCRIMINATOR_KEY,
};
