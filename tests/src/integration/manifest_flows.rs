//! # Manifest Flows
//!
//! Plugin manifests as they travel between island and agent: a catalog of
//! manifests is filtered by OS and the newest version is picked, and a
//! credentials collector reports what it found alongside its manifest.

#[cfg(test)]
mod tests {
    use mt_credentials::{CredentialComponent, LmHash, Password, Username};
    use mt_plugins::{AgentPluginManifest, AgentPluginType, OperatingSystem, PluginError};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use crate::integration::init_test_logging;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// What a credentials collector sends back after a run.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct CollectorReport {
        plugin: AgentPluginManifest,
        components: Vec<CredentialComponent>,
    }

    const CATALOG: &str = r#"[
        {"name": "SSH", "plugin_type": "EXPLOITER", "version": "1.0.2",
         "supported_operating_systems": ["linux"], "safe": true},
        {"name": "SSH", "plugin_type": "EXPLOITER", "version": "2.15.3-alpha",
         "supported_operating_systems": ["linux"]},
        {"name": "SSH", "plugin_type": "EXPLOITER", "version": "2.15.3",
         "supported_operating_systems": ["linux", "windows"], "safe": true},
        {"name": "Mimikatz", "plugin_type": "CREDENTIALS_COLLECTOR", "version": "21.3.15-beta+12345",
         "supported_operating_systems": ["windows"], "target_operating_systems": ["windows"]}
    ]"#;

    fn catalog() -> Vec<AgentPluginManifest> {
        serde_json::from_str(CATALOG).unwrap()
    }

    // =============================================================================
    // CATALOG
    // =============================================================================

    #[test]
    fn test_latest_exploiter_for_linux() {
        init_test_logging();
        let latest = catalog()
            .into_iter()
            .filter(|m| m.plugin_type() == AgentPluginType::Exploiter)
            .filter(|m| m.supports(OperatingSystem::Linux))
            .max_by(|a, b| a.version().cmp_precedence(b.version()))
            .unwrap();

        assert_eq!(latest.version().to_string(), "2.15.3");
        assert!(latest.is_safe());
    }

    #[test]
    fn test_unsafe_plugins_filtered_out() {
        let safe: Vec<_> = catalog()
            .into_iter()
            .filter(AgentPluginManifest::is_safe)
            .map(|m| m.version().to_string())
            .collect();
        assert_eq!(safe, vec!["1.0.2", "2.15.3"]);
    }

    #[test]
    fn test_windows_only_collector() {
        let collectors: Vec<_> = catalog()
            .into_iter()
            .filter(|m| m.plugin_type() == AgentPluginType::CredentialsCollector)
            .collect();
        assert_eq!(collectors.len(), 1);
        assert!(collectors[0].supports(OperatingSystem::Windows));
        assert!(!collectors[0].supports(OperatingSystem::Linux));
        assert!(!collectors[0].targets(OperatingSystem::Linux));
    }

    #[test]
    fn test_one_bad_manifest_rejects_catalog() {
        let catalog = json!([
            {"name": "SSH", "plugin_type": "EXPLOITER", "version": "1.0.2"},
            {"name": "SSH", "plugin_type": "EXPLOITER", "version": "1.0"},
        ]);
        assert!(serde_json::from_value::<Vec<AgentPluginManifest>>(catalog).is_err());
    }

    #[test]
    fn test_catalog_survives_reserialization() {
        let original = catalog();
        let text = serde_json::to_string(&original).unwrap();
        let reparsed: Vec<AgentPluginManifest> = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_from_json_str_reports_specific_errors() {
        assert!(matches!(
            AgentPluginManifest::from_json_str(r#"{"name": "SSH", "plugin_type": "WORM", "version": "1.0.0"}"#),
            Err(PluginError::UnknownTag(_))
        ));
        assert!(matches!(
            AgentPluginManifest::from_json_str(r#"{"name": "SSH""#),
            Err(PluginError::MalformedManifest(_))
        ));
    }

    // =============================================================================
    // COLLECTOR REPORTS
    // =============================================================================

    #[test]
    fn test_collector_report_roundtrip() {
        let plugin = catalog().pop().unwrap();
        let report = CollectorReport {
            plugin,
            components: vec![
                Username::new("administrator").into(),
                Password::new("hunter2").into(),
                LmHash::new("aad3b435b51404eeaad3b435b51404ee").unwrap().into(),
            ],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value["components"][2],
            json!({"credential_type": "LM_HASH", "lm_hash": "aad3b435b51404eeaad3b435b51404ee"})
        );
        assert_eq!(value["plugin"]["plugin_type"], json!("CREDENTIALS_COLLECTOR"));

        let back: CollectorReport = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_collector_report_with_mismatched_component_rejected() {
        let plugin = serde_json::to_value(catalog().pop().unwrap()).unwrap();
        let report = json!({
            "plugin": plugin,
            "components": [
                {"credential_type": "USERNAME", "username": "administrator"},
                {"credential_type": "NT_HASH", "password": "hunter2"},
            ],
        });
        assert!(serde_json::from_value::<CollectorReport>(report).is_err());
    }
}
