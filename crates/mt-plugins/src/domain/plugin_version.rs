//! # Plugin Version
//!
//! Semantic version of a plugin: `MAJOR.MINOR.PATCH[-PRE][+BUILD]`.
//!
//! ## Ordering
//!
//! - [`PluginVersion::cmp_precedence`] is semantic-versioning precedence:
//!   numeric major/minor/patch, a pre-release sorts before its release,
//!   pre-release identifiers compared left to right (numeric < alphanumeric),
//!   build metadata ignored.
//! - `Ord` agrees with precedence and additionally breaks ties on build
//!   metadata, so that it stays consistent with `Eq`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::PluginError;

/// A parsed semantic version.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluginVersion(semver::Version);

impl PluginVersion {
    /// Release version without pre-release or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    /// Parse a canonical semantic version string.
    ///
    /// No leading `v`, no surrounding whitespace, no leading zeros in
    /// numeric components.
    pub fn parse(version: &str) -> Result<Self, PluginError> {
        semver::Version::parse(version)
            .map(Self)
            .map_err(|e| PluginError::VersionFormat {
                input: version.to_string(),
                reason: e.to_string(),
            })
    }

    /// Major component.
    pub fn major(&self) -> u64 {
        self.0.major
    }

    /// Minor component.
    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    /// Patch component.
    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Pre-release identifiers (empty for a release).
    pub fn pre_release(&self) -> &str {
        self.0.pre.as_str()
    }

    /// Build metadata (empty if absent).
    pub fn build(&self) -> &str {
        self.0.build.as_str()
    }

    /// Whether this is a pre-release.
    pub fn is_pre_release(&self) -> bool {
        !self.0.pre.is_empty()
    }

    /// Compare by semantic-versioning precedence, ignoring build metadata.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        (self.0.major, self.0.minor, self.0.patch)
            .cmp(&(other.0.major, other.0.minor, other.0.patch))
            .then_with(|| self.0.pre.cmp(&other.0.pre))
    }
}

impl TryFrom<String> for PluginVersion {
    type Error = PluginError;

    fn try_from(version: String) -> Result<Self, Self::Error> {
        Self::parse(&version)
    }
}

impl From<PluginVersion> for String {
    fn from(version: PluginVersion) -> Self {
        version.to_string()
    }
}

impl FromStr for PluginVersion {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
