//! Schema configuration
//!
//! # Example
//!
//! ```ignore
//! use mt_credentials::schema::{KeyPolicy, SchemaConfig};
//!
//! let config = SchemaConfig::default().with_key_policy(KeyPolicy::Strict);
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

/// Environment variable read by [`SchemaConfig::from_env`].
pub const KEY_POLICY_ENV: &str = "MT_SCHEMA_KEY_POLICY";

/// How a schema treats keys other than the discriminator and its payload
/// field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Extra keys are ignored.
    #[default]
    Permissive,
    /// Extra keys are rejected with `UnexpectedField`.
    Strict,
}

impl fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => f.write_str("permissive"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for KeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown key policy: {other}")),
        }
    }
}

/// Configuration shared by every schema built from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Treatment of unrecognised keys.
    pub key_policy: KeyPolicy,
}

impl SchemaConfig {
    /// Permissive configuration (extra keys ignored).
    pub fn permissive() -> Self {
        Self {
            key_policy: KeyPolicy::Permissive,
        }
    }

    /// Strict configuration (extra keys rejected).
    pub fn strict() -> Self {
        Self {
            key_policy: KeyPolicy::Strict,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MT_SCHEMA_KEY_POLICY`: `strict` or `permissive` (default: permissive)
    pub fn from_env() -> Self {
        Self {
            key_policy: key_policy_from_var(env::var(KEY_POLICY_ENV).ok().as_deref()),
        }
    }

    /// Builder-style method to set the key policy
    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }
}

fn key_policy_from_var(value: Option<&str>) -> KeyPolicy {
    match value.map(str::parse::<KeyPolicy>) {
        Some(Ok(policy)) => policy,
        Some(Err(reason)) => {
            warn!(
                var = KEY_POLICY_ENV,
                %reason,
                "Ignoring invalid key policy, using default"
            );
            KeyPolicy::default()
        }
        None => KeyPolicy::default(),
    }
}
