//! Agent plugin types.

use shared_types::Tag;

/// What an agent plugin does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgentPluginType {
    /// Exploits a vulnerability to propagate.
    Exploiter,
    /// Collects credentials from the host.
    CredentialsCollector,
    /// Identifies services on a remote host.
    Fingerprinter,
    /// Runs a payload on the host.
    Payload,
}

impl Tag for AgentPluginType {
    const KIND: &'static str = "agent plugin type";
    const ALL: &'static [Self] = &[
        Self::Exploiter,
        Self::CredentialsCollector,
        Self::Fingerprinter,
        Self::Payload,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::Exploiter => "EXPLOITER",
            Self::CredentialsCollector => "CREDENTIALS_COLLECTOR",
            Self::Fingerprinter => "FINGERPRINTER",
            Self::Payload => "PAYLOAD",
        }
    }
}

shared_types::impl_tag_traits!(AgentPluginType);
