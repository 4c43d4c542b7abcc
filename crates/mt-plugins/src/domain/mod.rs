//! # Domain Module
//!
//! Plugin metadata value types and the manifest validator.
//!
//! RULES:
//! - No I/O operations
//! - Every value is validated on construction and immutable afterwards

pub mod errors;
pub mod manifest;
pub mod os_set;
pub mod plugin_name;
pub mod plugin_type;
pub mod plugin_version;

pub use errors::PluginError;
pub use manifest::{AgentPluginManifest, ManifestBuilder};
pub use os_set::OperatingSystemSet;
pub use plugin_name::PluginName;
pub use plugin_type::AgentPluginType;
pub use plugin_version::PluginVersion;
