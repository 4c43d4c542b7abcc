//! # Agent Plugin Manifest
//!
//! Describes a plugin: what it is, what it runs on, what it targets and
//! whether it is safe to run.
//!
//! A manifest is built once, from trusted or external data, and is
//! immutable afterwards. All construction paths (builder, JSON, serde) go
//! through [`ManifestBuilder::build`], so they enforce the same rules:
//!
//! - `name` matches `[a-zA-Z0-9_]+` after trimming whitespace
//! - `plugin_type` is a known [`AgentPluginType`]
//! - both OS sets are non-empty (default: every OS)
//! - `version` is a semantic version
//! - `link_to_documentation`, if present, is an absolute http(s) URL
//! - `safe` defaults to `false`

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::{OperatingSystem, Tag};
use tracing::debug;
use url::Url;

use super::errors::PluginError;
use super::os_set::OperatingSystemSet;
use super::plugin_name::PluginName;
use super::plugin_type::AgentPluginType;
use super::plugin_version::PluginVersion;

/// A validated agent plugin manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ManifestBuilder")]
pub struct AgentPluginManifest {
    name: PluginName,
    plugin_type: AgentPluginType,
    supported_operating_systems: OperatingSystemSet,
    target_operating_systems: OperatingSystemSet,
    title: Option<String>,
    version: PluginVersion,
    description: Option<String>,
    remediation_suggestion: Option<String>,
    link_to_documentation: Option<Url>,
    safe: bool,
}

impl AgentPluginManifest {
    /// Start building a manifest.
    pub fn builder() -> ManifestBuilder {
        ManifestBuilder::new()
    }

    /// Validate a manifest from an untyped JSON document.
    ///
    /// Structural problems (wrong JSON types, unknown keys) are
    /// [`PluginError::MalformedManifest`]; everything else keeps its
    /// specific error.
    pub fn from_json(value: Value) -> Result<Self, PluginError> {
        let builder: ManifestBuilder = serde_json::from_value(value)
            .map_err(|e| PluginError::MalformedManifest(e.to_string()))?;
        builder.build()
    }

    /// Validate a manifest from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, PluginError> {
        let builder: ManifestBuilder = serde_json::from_str(text)
            .map_err(|e| PluginError::MalformedManifest(e.to_string()))?;
        builder.build()
    }

    /// Plugin name.
    pub fn name(&self) -> &PluginName {
        &self.name
    }

    /// Plugin type.
    pub fn plugin_type(&self) -> AgentPluginType {
        self.plugin_type
    }

    /// Operating systems the plugin can run on.
    pub fn supported_operating_systems(&self) -> &OperatingSystemSet {
        &self.supported_operating_systems
    }

    /// Operating systems the plugin can target.
    pub fn target_operating_systems(&self) -> &OperatingSystemSet {
        &self.target_operating_systems
    }

    /// Human readable name.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Plugin version.
    pub fn version(&self) -> &PluginVersion {
        &self.version
    }

    /// Description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// How to remediate what the plugin exploits, if applicable.
    pub fn remediation_suggestion(&self) -> Option<&str> {
        self.remediation_suggestion.as_deref()
    }

    /// Link to documentation.
    pub fn link_to_documentation(&self) -> Option<&Url> {
        self.link_to_documentation.as_ref()
    }

    /// Whether the plugin is safe to run.
    ///
    /// A plugin that could disrupt the regular activity of servers or the
    /// network is not safe.
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    /// Whether the plugin can run on `os`.
    pub fn supports(&self, os: OperatingSystem) -> bool {
        self.supported_operating_systems.contains(os)
    }

    /// Whether the plugin can target `os`.
    pub fn targets(&self, os: OperatingSystem) -> bool {
        self.target_operating_systems.contains(os)
    }
}

impl TryFrom<ManifestBuilder> for AgentPluginManifest {
    type Error = PluginError;

    fn try_from(builder: ManifestBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Builder for [`AgentPluginManifest`] with validation.
///
/// Accepts raw (string) inputs and validates everything in
/// [`Self::build`]. Also the shape a manifest document is read into.
///
/// # Example
///
/// ```ignore
/// let manifest = AgentPluginManifest::builder()
///     .name("SSH")
///     .plugin_type("EXPLOITER")
///     .version("1.0.2")
///     .build()?;
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestBuilder {
    name: Option<String>,
    plugin_type: Option<String>,
    supported_operating_systems: Option<Vec<String>>,
    target_operating_systems: Option<Vec<String>>,
    title: Option<String>,
    version: Option<String>,
    description: Option<String>,
    remediation_suggestion: Option<String>,
    link_to_documentation: Option<String>,
    safe: Option<bool>,
}

impl ManifestBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plugin name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the plugin type by canonical name
    pub fn plugin_type(mut self, plugin_type: impl Into<String>) -> Self {
        self.plugin_type = Some(plugin_type.into());
        self
    }

    /// Set supported operating systems by canonical name
    pub fn supported_operating_systems<I, S>(mut self, systems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_operating_systems = Some(systems.into_iter().map(Into::into).collect());
        self
    }

    /// Set target operating systems by canonical name
    pub fn target_operating_systems<I, S>(mut self, systems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_operating_systems = Some(systems.into_iter().map(Into::into).collect());
        self
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the version string
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the remediation suggestion
    pub fn remediation_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.remediation_suggestion = Some(suggestion.into());
        self
    }

    /// Set the documentation link
    pub fn link_to_documentation(mut self, link: impl Into<String>) -> Self {
        self.link_to_documentation = Some(link.into());
        self
    }

    /// Mark the plugin safe or unsafe
    pub fn safe(mut self, safe: bool) -> Self {
        self.safe = Some(safe);
        self
    }

    /// Build the manifest, validating all fields.
    ///
    /// Fields are checked in declaration order; the first failure is
    /// returned.
    pub fn build(self) -> Result<AgentPluginManifest, PluginError> {
        self.validate().inspect_err(|err| {
            debug!(reason = %err, "Rejected agent plugin manifest");
        })
    }

    fn validate(self) -> Result<AgentPluginManifest, PluginError> {
        let name = PluginName::new(&required("name", self.name)?)?;
        let plugin_type = AgentPluginType::from_name(&required("plugin_type", self.plugin_type)?)?;
        let supported_operating_systems =
            os_set("supported_operating_systems", self.supported_operating_systems)?;
        let target_operating_systems =
            os_set("target_operating_systems", self.target_operating_systems)?;
        let version = PluginVersion::parse(&required("version", self.version)?)?;
        let link_to_documentation = self
            .link_to_documentation
            .as_deref()
            .map(documentation_url)
            .transpose()?;

        Ok(AgentPluginManifest {
            name,
            plugin_type,
            supported_operating_systems,
            target_operating_systems,
            title: self.title,
            version,
            description: self.description,
            remediation_suggestion: self.remediation_suggestion,
            link_to_documentation,
            safe: self.safe.unwrap_or(false),
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, PluginError> {
    value.ok_or_else(|| PluginError::field(field, "required"))
}

fn os_set(field: &'static str, names: Option<Vec<String>>) -> Result<OperatingSystemSet, PluginError> {
    let Some(names) = names else {
        return Ok(OperatingSystemSet::default());
    };
    let systems = names
        .iter()
        .map(|name| OperatingSystem::from_name(name))
        .collect::<Result<Vec<_>, _>>()?;
    OperatingSystemSet::new(systems).ok_or_else(|| PluginError::field(field, "must not be empty"))
}

fn documentation_url(link: &str) -> Result<Url, PluginError> {
    const FIELD: &str = "link_to_documentation";

    let url = Url::parse(link).map_err(|e| PluginError::field(FIELD, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PluginError::field(
            FIELD,
            format!("scheme {other:?} is not http or https"),
        )),
    }
}
