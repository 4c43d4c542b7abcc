//! # Component Registry
//!
//! Picks the schema for an incoming serialized component by its
//! discriminator, then lets that schema validate and build it.
//!
//! The tag → constructor table is an exhaustive `match`, so adding a
//! component type without registering it does not compile.

use tracing::debug;

use super::component_schema::{read_discriminator, ComponentSchema, Mapping};
use super::config::SchemaConfig;
use crate::domain::{
    CredentialComponent, CredentialComponentType, CredentialError, LmHash, NtHash, Password,
    SingleValueComponent, Username,
};

/// Constructor for one component type.
type Loader = fn(SchemaConfig, &Mapping) -> Result<CredentialComponent, CredentialError>;

fn load_as<C>(config: SchemaConfig, mapping: &Mapping) -> Result<CredentialComponent, CredentialError>
where
    C: SingleValueComponent + Into<CredentialComponent>,
{
    ComponentSchema::<C>::with_config(config)
        .load(mapping)
        .map(Into::into)
}

fn loader(component_type: CredentialComponentType) -> Loader {
    match component_type {
        CredentialComponentType::Username => load_as::<Username>,
        CredentialComponentType::Password => load_as::<Password>,
        CredentialComponentType::LmHash => load_as::<LmHash>,
        CredentialComponentType::NtHash => load_as::<NtHash>,
    }
}

/// Registry of every credential component schema.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComponentRegistry {
    config: SchemaConfig,
}

impl ComponentRegistry {
    /// Create a registry whose schemas all use `config`.
    pub fn new(config: SchemaConfig) -> Self {
        Self { config }
    }

    /// Configuration handed to every schema.
    pub fn config(&self) -> SchemaConfig {
        self.config
    }

    /// Payload field used by the schema for `component_type`.
    pub fn payload_field(component_type: CredentialComponentType) -> &'static str {
        match component_type {
            CredentialComponentType::Username => Username::PAYLOAD_FIELD,
            CredentialComponentType::Password => Password::PAYLOAD_FIELD,
            CredentialComponentType::LmHash => LmHash::PAYLOAD_FIELD,
            CredentialComponentType::NtHash => NtHash::PAYLOAD_FIELD,
        }
    }

    /// Deserialize a component of whatever type its discriminator names.
    pub fn load(&self, mapping: &Mapping) -> Result<CredentialComponent, CredentialError> {
        let component_type = read_discriminator(mapping).inspect_err(|err| {
            debug!(reason = %err, "Rejected credential component discriminator");
        })?;
        loader(component_type)(self.config, mapping)
    }

    /// Serialize a component with the schema for its type.
    pub fn dump(&self, component: &CredentialComponent) -> Mapping {
        match component {
            CredentialComponent::Username(c) => {
                ComponentSchema::<Username>::with_config(self.config).serialize(c)
            }
            CredentialComponent::Password(c) => {
                ComponentSchema::<Password>::with_config(self.config).serialize(c)
            }
            CredentialComponent::LmHash(c) => {
                ComponentSchema::<LmHash>::with_config(self.config).serialize(c)
            }
            CredentialComponent::NtHash(c) => {
                ComponentSchema::<NtHash>::with_config(self.config).serialize(c)
            }
        }
    }
}
