//! Schema Layer - discriminated (de)serialization
//!
//! This layer contains:
//! - `ComponentSchema<C>`: validator bound to one component type
//! - `ComponentRegistry`: tag → schema selection for untyped input
//! - `SchemaConfig`: key policy and environment loading
//! - Serde impls for every component

pub mod component_schema;
pub mod config;
pub mod registry;
mod wire;

pub use component_schema::{read_discriminator, ComponentSchema, Mapping, DISCRIMINATOR_KEY};
pub use config::{KeyPolicy, SchemaConfig, KEY_POLICY_ENV};
pub use registry::ComponentRegistry;
