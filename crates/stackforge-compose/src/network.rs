//! Network attachment value types.
//!
//! Mirrors the named-volume model: a service attaches to networks by name,
//! and every attached name registers once in the document's top-level
//! network registry with optional driver configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Driver configuration attached to a network declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkOptions {
    /// Network driver name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    /// Driver-specific options.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub driver_opts: IndexMap<String, String>,
}

impl NetworkOptions {
    /// Returns true when neither a driver nor any driver option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.driver.is_none() && self.driver_opts.is_empty()
    }
}

/// A single network attachment on a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAttachment {
    /// Registry key of the network.
    pub name: String,
    /// Driver configuration carried to the registry entry.
    pub options: NetworkOptions,
}

impl NetworkAttachment {
    /// Attaches to a network with default driver configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: NetworkOptions::default(),
        }
    }

    /// Attaches to a network with explicit driver configuration.
    #[must_use]
    pub fn with_options(name: impl Into<String>, options: NetworkOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}
