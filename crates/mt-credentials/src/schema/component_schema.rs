//! # Component Schema
//!
//! A schema is bound to one component type, and through it to one tag and
//! one payload field. The binding is what lets a schema tell "valid tag"
//! apart from "my tag".
//!
//! ## Deserialization order
//!
//! 1. Discriminator present, else `MissingDiscriminator`
//! 2. Discriminator names a known tag, else `UnknownTag`
//! 3. Tag equals the schema's tag, else `TypeMismatch`
//! 4. Payload field present and a string of the right shape, else `InvalidPayload`
//! 5. Strict schemas only: no other keys, else `UnexpectedField`
//!
//! The first failed check aborts the whole operation.

use std::fmt;
use std::marker::PhantomData;

use serde_json::{Map, Value};
use shared_types::{Tag, UnknownTagError};
use tracing::debug;

use super::config::{KeyPolicy, SchemaConfig};
use crate::domain::{
    invariant_string_payload, CredentialComponentType, CredentialError, SingleValueComponent,
};

/// Key holding the discriminator in every serialized component.
pub const DISCRIMINATOR_KEY: &str = "credential_type";

/// A serialized component: a JSON object.
pub type Mapping = Map<String, Value>;

/// Read and resolve the discriminator of a serialized component.
pub fn read_discriminator(mapping: &Mapping) -> Result<CredentialComponentType, CredentialError> {
    let value = mapping
        .get(DISCRIMINATOR_KEY)
        .ok_or(CredentialError::MissingDiscriminator {
            key: DISCRIMINATOR_KEY,
        })?;

    match value {
        Value::String(name) => Ok(CredentialComponentType::from_name(name)?),
        other => Err(UnknownTagError::new(CredentialComponentType::KIND, other.to_string()).into()),
    }
}

/// (De)serializer for one component type.
///
/// Stateless apart from its fixed binding and configuration; every call is
/// independent.
pub struct ComponentSchema<C> {
    component_type: CredentialComponentType,
    payload_field: &'static str,
    config: SchemaConfig,
    _component: PhantomData<fn() -> C>,
}

impl<C: SingleValueComponent> ComponentSchema<C> {
    /// Create a schema with the default (permissive) configuration.
    pub fn new() -> Self {
        Self::with_config(SchemaConfig::default())
    }

    /// Create a schema with the given configuration.
    pub fn with_config(config: SchemaConfig) -> Self {
        Self {
            component_type: C::COMPONENT_TYPE,
            payload_field: C::PAYLOAD_FIELD,
            config,
            _component: PhantomData,
        }
    }

    /// Tag this schema accepts.
    pub fn component_type(&self) -> CredentialComponentType {
        self.component_type
    }

    /// Key holding the payload.
    pub fn payload_field(&self) -> &'static str {
        self.payload_field
    }

    /// Configuration in effect.
    pub fn config(&self) -> SchemaConfig {
        self.config
    }

    /// Serialize a component to `{credential_type, <payload_field>}`.
    ///
    /// The component's type is fixed by `C`, so it always matches the
    /// schema's tag.
    pub fn serialize(&self, value: &C) -> Mapping {
        let mut mapping = Map::new();
        mapping.insert(
            DISCRIMINATOR_KEY.to_string(),
            Value::String(self.component_type.name().to_string()),
        );
        mapping.insert(
            self.payload_field.to_string(),
            Value::String(value.payload().to_string()),
        );
        mapping
    }

    /// Validate a serialized component and return its payload.
    ///
    /// The schema does not build the component; pass the payload to
    /// [`SingleValueComponent::from_payload`] or use [`Self::load`].
    pub fn deserialize(&self, mapping: &Mapping) -> Result<String, CredentialError> {
        self.validate(mapping).map(str::to_owned).inspect_err(|err| {
            debug!(
                component_type = %self.component_type,
                field = self.payload_field,
                reason = %err,
                "Rejected credential component"
            );
        })
    }

    /// Validate a serialized component and build it.
    pub fn load(&self, mapping: &Mapping) -> Result<C, CredentialError> {
        C::from_payload(self.deserialize(mapping)?)
    }

    fn validate<'a>(&self, mapping: &'a Mapping) -> Result<&'a str, CredentialError> {
        let found = read_discriminator(mapping)?;
        if found != self.component_type {
            return Err(CredentialError::TypeMismatch {
                expected: self.component_type,
                found,
            });
        }

        let payload = invariant_string_payload(self.payload_field, mapping.get(self.payload_field))?;
        C::validate_payload(payload)?;

        if self.config.key_policy == KeyPolicy::Strict {
            if let Some(extra) = mapping
                .keys()
                .find(|key| key.as_str() != DISCRIMINATOR_KEY && key.as_str() != self.payload_field)
            {
                return Err(CredentialError::UnexpectedField {
                    field: extra.clone(),
                });
            }
        }

        Ok(payload)
    }
}

impl<C: SingleValueComponent> Default for ComponentSchema<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for ComponentSchema<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ComponentSchema<C> {}

impl<C> fmt::Debug for ComponentSchema<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentSchema")
            .field("component_type", &self.component_type)
            .field("payload_field", &self.payload_field)
            .field("config", &self.config)
            .finish()
    }
}
