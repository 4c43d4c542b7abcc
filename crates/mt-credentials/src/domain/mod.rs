//! # Domain Module
//!
//! Credential component tags, values, invariants and errors.
//!
//! RULES:
//! - No I/O operations
//! - Values are immutable once constructed

pub mod component_type;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use component_type::CredentialComponentType;
pub use errors::CredentialError;
pub use invariants::*;
pub use value_objects::*;
