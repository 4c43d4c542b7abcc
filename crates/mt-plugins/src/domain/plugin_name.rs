//! Plugin names.
//!
//! Allowed characters are ASCII alphanumerics and underscore. Leading and
//! trailing whitespace is stripped before the check.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::PluginError;

/// A validated plugin name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluginName(String);

impl PluginName {
    /// Strip surrounding whitespace and validate.
    pub fn new(name: &str) -> Result<Self, PluginError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PluginError::field("name", "must not be empty"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(PluginError::field(
                "name",
                format!("invalid character {bad:?}; allowed: [a-zA-Z0-9_]"),
            ));
        }
        Ok(Self(name.to_string()))
    }

    /// The name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PluginName {
    type Error = PluginError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(&name)
    }
}

impl From<PluginName> for String {
    fn from(name: PluginName) -> Self {
        name.0
    }
}

impl FromStr for PluginName {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PluginName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
