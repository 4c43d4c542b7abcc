//! # MT Plugins
//!
//! Agent plugin metadata: names, semantic versions and manifests.
//!
//! ## Validation Rules
//!
//! | Field | Rule |
//! |-------|------|
//! | `name` | `[a-zA-Z0-9_]+` after trimming whitespace |
//! | `plugin_type` | member of [`AgentPluginType`] |
//! | `*_operating_systems` | non-empty subset of `OperatingSystem` (default: all) |
//! | `version` | semantic version |
//! | `link_to_documentation` | absolute http(s) URL, optional |
//! | `safe` | defaults to `false` |
//!
//! ## Module Structure
//!
//! ```text
//! mt-plugins/
//! └── domain/          # PluginName, PluginVersion, OperatingSystemSet, manifest, errors
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

// Re-exports
pub use domain::{
    AgentPluginManifest, AgentPluginType, ManifestBuilder, OperatingSystemSet, PluginError,
    PluginName, PluginVersion,
};
pub use shared_types::OperatingSystem;
