//! # Operating Systems
//!
//! The closed set of operating systems an agent (or agent plugin) can run on
//! or target.

use crate::tag::Tag;

/// Operating system family.
///
/// Ordering follows declaration order so that sets of operating systems
/// iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperatingSystem {
    /// Any Linux distribution.
    Linux,
    /// Microsoft Windows.
    Windows,
}

impl Tag for OperatingSystem {
    const KIND: &'static str = "operating system";
    const ALL: &'static [Self] = &[Self::Linux, Self::Windows];

    fn name(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }
}

crate::impl_tag_traits!(OperatingSystem);
