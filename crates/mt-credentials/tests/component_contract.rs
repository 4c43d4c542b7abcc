//! # Credential Component Contract Tests
//!
//! Exercises every single-value component through the same contract:
//!
//! 1. **Serialize** - value → `{credential_type, <field>}`
//! 2. **Deserialize** - mapping → payload → value equal to the original
//! 3. **Unknown tag** - `"INVALID"` is rejected by every schema
//! 4. **Wrong tag** - a valid tag that is not the schema's own is rejected
//! 5. **Invalid payload** - null, integer and float payloads are rejected

use mt_credentials::{
    ComponentSchema, CredentialComponentType, CredentialError, Mapping, Password,
    SingleValueComponent, Username,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use shared_types::Tag;

// =============================================================================
// TEST HELPERS
// =============================================================================

fn build_component_dict(component_type: CredentialComponentType, key: &str, value: Value) -> Mapping {
    let mut mapping = Mapping::new();
    mapping.insert("credential_type".to_string(), json!(component_type.name()));
    mapping.insert(key.to_string(), value);
    mapping
}

/// Any valid tag other than `component_type`.
fn other_tag(component_type: CredentialComponentType) -> CredentialComponentType {
    if component_type != CredentialComponentType::Username {
        CredentialComponentType::Username
    } else {
        CredentialComponentType::Password
    }
}

fn check_serialize<C: SingleValueComponent>(component: C, key: &str, value: &str) {
    let serialized = ComponentSchema::<C>::new().serialize(&component);
    assert_eq!(
        serialized,
        build_component_dict(C::COMPONENT_TYPE, key, json!(value))
    );
}

fn check_deserialize<C>(key: &str, value: &str)
where
    C: SingleValueComponent + PartialEq + std::fmt::Debug,
{
    let schema = ComponentSchema::<C>::new();
    let credential_dict = build_component_dict(C::COMPONENT_TYPE, key, json!(value));
    let expected = C::from_payload(value.to_string()).unwrap();

    let deserialized = C::from_payload(schema.deserialize(&credential_dict).unwrap()).unwrap();

    assert_eq!(deserialized, expected);
}

fn check_invalid_credential_type<C: SingleValueComponent>(key: &str, value: &str) {
    let mut invalid = build_component_dict(C::COMPONENT_TYPE, key, json!(value));
    invalid.insert("credential_type".to_string(), json!("INVALID"));

    let result = ComponentSchema::<C>::new().load(&invalid);
    assert!(matches!(result, Err(CredentialError::UnknownTag(_))));
}

fn check_incorrect_credential_type<C: SingleValueComponent>(key: &str, value: &str) {
    let mut incorrect = build_component_dict(C::COMPONENT_TYPE, key, json!(value));
    incorrect.insert(
        "credential_type".to_string(),
        json!(other_tag(C::COMPONENT_TYPE).name()),
    );

    let result = ComponentSchema::<C>::new().load(&incorrect);
    assert!(matches!(result, Err(CredentialError::TypeMismatch { .. })));
}

fn check_invalid_values<C: SingleValueComponent>(key: &str) {
    let schema = ComponentSchema::<C>::new();
    for invalid_value in [Value::Null, json!(1), json!(2.0)] {
        let component_dict = build_component_dict(C::COMPONENT_TYPE, key, invalid_value);
        assert!(matches!(
            schema.load(&component_dict),
            Err(CredentialError::InvalidPayload { .. })
        ));
    }
}

// =============================================================================
// PASSWORD
// =============================================================================

#[test]
fn test_password_serialize() {
    check_serialize(Password::new("123456"), "password", "123456");
}

#[test]
fn test_password_deserialize() {
    check_deserialize::<Password>("password", "123456");
}

#[test]
fn test_password_invalid_credential_type() {
    check_invalid_credential_type::<Password>("password", "123456");
}

#[test]
fn test_password_incorrect_credential_type() {
    check_incorrect_credential_type::<Password>("password", "123456");
}

#[test]
fn test_password_invalid_values() {
    check_invalid_values::<Password>("password");
}

// =============================================================================
// USERNAME
// =============================================================================

#[test]
fn test_username_serialize() {
    check_serialize(Username::new("test_user"), "username", "test_user");
}

#[test]
fn test_username_deserialize() {
    check_deserialize::<Username>("username", "test_user");
}

#[test]
fn test_username_invalid_credential_type() {
    check_invalid_credential_type::<Username>("username", "test_user");
}

#[test]
fn test_username_incorrect_credential_type() {
    check_incorrect_credential_type::<Username>("username", "test_user");
}

#[test]
fn test_username_invalid_values() {
    check_invalid_values::<Username>("username");
}

#[test]
fn test_username_schema_rejects_serialized_password() {
    let serialized = ComponentSchema::<Password>::new().serialize(&Password::new("123456"));
    let result = ComponentSchema::<Username>::new().deserialize(&serialized);
    assert_eq!(
        result,
        Err(CredentialError::TypeMismatch {
            expected: CredentialComponentType::Username,
            found: CredentialComponentType::Password,
        })
    );
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_password_roundtrip(payload in ".*") {
        let schema = ComponentSchema::<Password>::new();
        let original = Password::new(payload.clone());
        let recovered = schema.deserialize(&schema.serialize(&original)).unwrap();
        prop_assert_eq!(&recovered, &payload);
        prop_assert_eq!(Password::new(recovered), original);
    }

    #[test]
    fn prop_username_roundtrip(payload in ".*") {
        let schema = ComponentSchema::<Username>::new();
        let original = Username::new(payload.clone());
        let recovered = schema.load(&schema.serialize(&original)).unwrap();
        prop_assert_eq!(recovered, original);
    }

    #[test]
    fn prop_password_schema_refuses_every_other_tag(
        index in 0..CredentialComponentType::ALL.len(),
        payload in ".*",
    ) {
        let tag = CredentialComponentType::ALL[index];
        let input = build_component_dict(tag, "password", json!(payload));
        let result = ComponentSchema::<Password>::new().deserialize(&input);
        if tag == CredentialComponentType::Password {
            prop_assert!(result.is_ok());
        } else {
            let is_mismatch = matches!(result, Err(CredentialError::TypeMismatch { .. }));
            prop_assert!(is_mismatch);
        }
    }

    #[test]
    fn prop_unknown_names_rejected(name in "[a-z]{1,12}") {
        // Canonical names are upper case, so no lower-case name is a tag.
        let mut input = build_component_dict(CredentialComponentType::Username, "username", json!("u"));
        input.insert("credential_type".to_string(), json!(name));
        let is_unknown = matches!(
            ComponentSchema::<Username>::new().deserialize(&input),
            Err(CredentialError::UnknownTag(_))
        );
        prop_assert!(is_unknown);
    }
}
