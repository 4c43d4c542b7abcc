//! Serde integration.
//!
//! Every component serializes through its schema and deserializes through
//! it as well, so `serde_json::from_str::<Password>(..)` enforces exactly the
//! same checks as [`ComponentSchema::load`]. Serde entry points always use
//! the default (permissive) configuration.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::component_schema::{ComponentSchema, Mapping};
use super::registry::ComponentRegistry;
use crate::domain::{CredentialComponent, LmHash, NtHash, Password, SingleValueComponent, Username};

fn serialize_component<C, S>(component: &C, serializer: S) -> Result<S::Ok, S::Error>
where
    C: SingleValueComponent,
    S: Serializer,
{
    ComponentSchema::<C>::new()
        .serialize(component)
        .serialize(serializer)
}

fn deserialize_component<'de, C, D>(deserializer: D) -> Result<C, D::Error>
where
    C: SingleValueComponent,
    D: Deserializer<'de>,
{
    let mapping = Mapping::deserialize(deserializer)?;
    ComponentSchema::<C>::new()
        .load(&mapping)
        .map_err(D::Error::custom)
}

impl Serialize for Username {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_component(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_component(deserializer)
    }
}

impl Serialize for Password {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_component(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Password {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_component(deserializer)
    }
}

impl Serialize for LmHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_component(self, serializer)
    }
}

impl<'de> Deserialize<'de> for LmHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_component(deserializer)
    }
}

impl Serialize for NtHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_component(self, serializer)
    }
}

impl<'de> Deserialize<'de> for NtHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_component(deserializer)
    }
}

impl Serialize for CredentialComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ComponentRegistry::default()
            .dump(self)
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CredentialComponent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mapping = Mapping::deserialize(deserializer)?;
        ComponentRegistry::default()
            .load(&mapping)
            .map_err(D::Error::custom)
    }
}
