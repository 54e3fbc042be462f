//! Domain primitive types used across the stackforge workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// A validated compose map key: the name of a service, volume, or network.
///
/// Compose restricts top-level keys to `[A-Za-z0-9._-]+`; anything else is
/// rejected up front so the synthesized document never carries a key the
/// downstream tooling would choke on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Creates a validated name for an entity of the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains a character
    /// outside `[A-Za-z0-9._-]`.
    pub fn new(kind: &'static str, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigurationError::InvalidName {
                kind,
                name,
                reason: "name must not be empty",
            });
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(ConfigurationError::InvalidName {
                kind,
                name,
                reason: "only letters, digits, `.`, `_`, and `-` are allowed",
            });
        }
        Ok(Self(name))
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for ServiceName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ServiceName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
