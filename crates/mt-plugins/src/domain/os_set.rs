//! Non-empty sets of operating systems.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shared_types::{OperatingSystem, Tag};

use super::errors::PluginError;

/// A non-empty set of operating systems, iterated in declaration order.
///
/// Serializes as a list. Duplicates in the input collapse.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<OperatingSystem>", into = "Vec<OperatingSystem>")]
pub struct OperatingSystemSet(BTreeSet<OperatingSystem>);

impl OperatingSystemSet {
    /// Build a set, or `None` if `systems` is empty.
    pub fn new(systems: impl IntoIterator<Item = OperatingSystem>) -> Option<Self> {
        let set: BTreeSet<_> = systems.into_iter().collect();
        (!set.is_empty()).then_some(Self(set))
    }

    /// Every known operating system.
    pub fn all() -> Self {
        Self(OperatingSystem::iter().collect())
    }

    /// Whether `os` is in the set.
    pub fn contains(&self, os: OperatingSystem) -> bool {
        self.0.contains(&os)
    }

    /// Number of operating systems (never zero).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = OperatingSystem> + '_ {
        self.0.iter().copied()
    }
}

impl Default for OperatingSystemSet {
    fn default() -> Self {
        Self::all()
    }
}

impl TryFrom<Vec<OperatingSystem>> for OperatingSystemSet {
    type Error = PluginError;

    fn try_from(systems: Vec<OperatingSystem>) -> Result<Self, Self::Error> {
        Self::new(systems).ok_or_else(|| PluginError::field("operating_systems", "must not be empty"))
    }
}

impl From<OperatingSystemSet> for Vec<OperatingSystem> {
    fn from(set: OperatingSystemSet) -> Self {
        set.0.into_iter().collect()
    }
}
