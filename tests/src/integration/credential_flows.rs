//! # Credential Flows
//!
//! Untyped JSON in, typed components out, through every entry point:
//!
//! 1. **Registry**: discriminator selects the schema
//! 2. **Typed schema**: caller already knows the expected kind
//! 3. **Serde**: components embedded in larger documents
//!
//! All three must agree on what they accept and reject.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use mt_credentials::{
        ComponentRegistry, ComponentSchema, CredentialComponent, CredentialComponentType,
        CredentialError, Mapping, NtHash, Password, SchemaConfig, SingleValueComponent, Username,
    };
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};
    use shared_types::Tag;

    use crate::integration::init_test_logging;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const NT: &str = "31d6cfe0d16ae931b73c59d7e0c089c0";

    /// A stolen credential pair as an agent would report it.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Credentials {
        identity: Option<CredentialComponent>,
        secret: Option<CredentialComponent>,
    }

    fn mapping(value: Value) -> Mapping {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    // =============================================================================
    // ENTRY POINTS AGREE
    // =============================================================================

    #[test]
    fn test_registry_schema_and_serde_agree_on_valid_input() {
        init_test_logging();
        let input = json!({"credential_type": "PASSWORD", "password": "123456"});

        let via_registry = ComponentRegistry::default().load(&mapping(input.clone())).unwrap();
        let via_schema = ComponentSchema::<Password>::new()
            .load(&mapping(input.clone()))
            .unwrap();
        let via_serde: Password = serde_json::from_value(input).unwrap();

        assert_eq!(via_registry, CredentialComponent::Password(via_schema.clone()));
        assert_eq!(via_schema, via_serde);
    }

    #[test]
    fn test_entry_points_agree_on_rejections() {
        init_test_logging();
        let bad_inputs = [
            json!({"password": "123456"}),
            json!({"credential_type": "INVALID", "password": "123456"}),
            json!({"credential_type": "PASSWORD", "password": null}),
            json!({"credential_type": "PASSWORD", "password": 1}),
            json!({"credential_type": "PASSWORD", "password": 2.0}),
        ];
        for input in bad_inputs {
            assert!(ComponentRegistry::default().load(&mapping(input.clone())).is_err());
            assert!(ComponentSchema::<Password>::new().load(&mapping(input.clone())).is_err());
            assert!(serde_json::from_value::<Password>(input.clone()).is_err());
            assert!(serde_json::from_value::<CredentialComponent>(input).is_err());
        }
    }

    #[test]
    fn test_only_typed_entry_points_detect_mismatch() {
        // The registry follows the discriminator; a typed schema refuses it.
        let input = json!({"credential_type": "PASSWORD", "password": "123456"});

        assert!(ComponentRegistry::default().load(&mapping(input.clone())).is_ok());
        assert_eq!(
            ComponentSchema::<Username>::new().deserialize(&mapping(input.clone())),
            Err(CredentialError::TypeMismatch {
                expected: CredentialComponentType::Username,
                found: CredentialComponentType::Password,
            })
        );
        assert!(serde_json::from_value::<Username>(input).is_err());
    }

    // =============================================================================
    // EMBEDDED DOCUMENTS
    // =============================================================================

    #[test]
    fn test_credentials_document_roundtrip() {
        let credentials = Credentials {
            identity: Some(Username::new("administrator").into()),
            secret: Some(NtHash::new(NT).unwrap().into()),
        };

        let value = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            value,
            json!({
                "identity": {"credential_type": "USERNAME", "username": "administrator"},
                "secret": {"credential_type": "NT_HASH", "nt_hash": NT},
            })
        );

        let back: Credentials = serde_json::from_value(value).unwrap();
        assert_eq!(back, credentials);
    }

    #[test]
    fn test_one_bad_component_rejects_whole_document() {
        let document = json!({
            "identity": {"credential_type": "USERNAME", "username": "administrator"},
            "secret": {"credential_type": "NT_HASH", "nt_hash": "not-a-hash"},
        });
        let result: Result<Credentials, _> = serde_json::from_value(document);
        assert!(result.is_err());
    }

    #[test]
    fn test_document_error_names_the_failure() {
        let document = json!({
            "identity": {"credential_type": "USERNAME", "username": 7},
            "secret": null,
        });
        let err = serde_json::from_value::<Credentials>(document)
            .unwrap_err()
            .to_string();
        assert!(err.contains("Invalid payload"), "{err}");
        assert!(err.contains("username"), "{err}");
    }

    // =============================================================================
    // KEY POLICY
    // =============================================================================

    #[test]
    fn test_key_policy_applies_to_every_kind() {
        let permissive = ComponentRegistry::new(SchemaConfig::permissive());
        let strict = ComponentRegistry::new(SchemaConfig::strict());

        for tag in CredentialComponentType::iter() {
            let mut input = Mapping::new();
            input.insert("credential_type".into(), json!(tag.name()));
            input.insert(ComponentRegistry::payload_field(tag).into(), json!(NT));
            input.insert("source".into(), json!("mimikatz"));

            assert!(permissive.load(&input).is_ok(), "{tag}");
            assert_eq!(
                strict.load(&input),
                Err(CredentialError::UnexpectedField {
                    field: "source".to_string()
                }),
                "{tag}"
            );
        }
    }

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    #[test]
    fn test_concurrent_deserialization_is_deterministic() {
        let registry = Arc::new(ComponentRegistry::default());
        let inputs = Arc::new(vec![
            mapping(json!({"credential_type": "USERNAME", "username": "u"})),
            mapping(json!({"credential_type": "PASSWORD", "password": "p"})),
            mapping(json!({"credential_type": "INVALID", "password": "p"})),
        ]);
        let expected: Vec<_> = inputs.iter().map(|m| registry.load(m)).collect();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let inputs = Arc::clone(&inputs);
                thread::spawn(move || {
                    (0..100)
                        .map(|_| inputs.iter().map(|m| registry.load(m)).collect::<Vec<_>>())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for results in handle.join().unwrap() {
                assert_eq!(results, expected);
            }
        }
    }

    #[test]
    fn test_payload_accessors_match_wire_field() {
        let password = Password::new("123456");
        let serialized = ComponentSchema::<Password>::new().serialize(&password);
        assert_eq!(
            serialized.get(Password::PAYLOAD_FIELD),
            Some(&json!(password.password()))
        );
    }
}
