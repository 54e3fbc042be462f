//! Port mapping value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport protocol of a published port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// TCP (the compose default).
    #[default]
    Tcp,
    /// UDP.
    Udp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp => write!(f, "tcp"),
            Self::Udp => write!(f, "udp"),
        }
    }
}

/// How a port is published on the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishMode {
    /// Publish on the host the container runs on (the compose default).
    #[default]
    Host,
    /// Load-balanced ingress publishing (swarm deployments).
    Ingress,
}

impl fmt::Display for PublishMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Ingress => write!(f, "ingress"),
        }
    }
}

/// Optional overrides for a port mapping's protocol and publish mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortOptions {
    /// Transport protocol override.
    pub protocol: Protocol,
    /// Publish mode override.
    pub mode: PublishMode,
}

/// A single published-to-target port mapping.
///
/// Pure value with no identity; a service may declare the same mapping
/// more than once and every declaration is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortMapping {
    /// Host-side port.
    pub published: u16,
    /// Container-side port.
    pub target: u16,
    /// Transport protocol.
    #[serde(default)]
    pub protocol: Protocol,
    /// Publish mode.
    #[serde(default)]
    pub mode: PublishMode,
}

impl PortMapping {
    /// Creates a mapping with the default protocol (tcp) and mode (host).
    #[must_use]
    pub fn new(published: u16, target: u16) -> Self {
        Self::with_options(published, target, PortOptions::default())
    }

    /// Creates a mapping with explicit protocol/mode overrides.
    #[must_use]
    pub const fn with_options(published: u16, target: u16, options: PortOptions) -> Self {
        Self {
            published,
            target,
            protocol: options.protocol,
            mode: options.mode,
        }
    }
}
