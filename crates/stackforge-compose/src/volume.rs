//! Volume declaration value types.
//!
//! A service declares either bind mounts (host path into container path)
//! or named volumes (document-scoped storage units). Only named volumes
//! contribute entries to the document's top-level volume registry; that
//! registration happens in the builder at synthesis time because the
//! registry is document-scoped, not service-scoped.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Driver configuration attached to a named volume declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedVolumeOptions {
    /// Volume driver name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    /// Driver-specific options.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub driver_opts: IndexMap<String, String>,
}

impl NamedVolumeOptions {
    /// Returns true when neither a driver nor any driver option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.driver.is_none() && self.driver_opts.is_empty()
    }
}

/// A single volume declaration on a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VolumeBinding {
    /// A host path mapped directly into the container.
    Bind {
        /// Host-side source path.
        source: String,
        /// Container-side target path.
        target: String,
    },
    /// A document-scoped named volume mounted into the container.
    #[serde(rename = "volume")]
    Named {
        /// Registry key of the volume.
        source: String,
        /// Container-side target path.
        target: String,
        /// Driver configuration carried to the registry entry.
        #[serde(default, flatten)]
        options: NamedVolumeOptions,
    },
}

impl VolumeBinding {
    /// Declares a bind mount from a host path to a container path.
    #[must_use]
    pub fn bind(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Bind {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Declares a named volume mount with default driver configuration.
    #[must_use]
    pub fn named(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Named {
            source: name.into(),
            target: target.into(),
            options: NamedVolumeOptions::default(),
        }
    }

    /// Declares a named volume mount with explicit driver configuration.
    #[must_use]
    pub fn named_with(
        name: impl Into<String>,
        target: impl Into<String>,
        options: NamedVolumeOptions,
    ) -> Self {
        Self::Named {
            source: name.into(),
            target: target.into(),
            options,
        }
    }

    /// Container-side target path of this declaration.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Bind { target, .. } | Self::Named { target, .. } => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_constructor_sets_paths() {
        let binding = VolumeBinding::bind("/srv/data", "/data");
        assert_eq!(
            binding,
            VolumeBinding::Bind {
                source: "/srv/data".into(),
                target: "/data".into(),
            }
        );
        assert_eq!(binding.target(), "/data");
    }

    #[test]
    fn named_constructor_defaults_to_no_driver() {
        let binding = VolumeBinding::named("html", "/var/www/html");
        let VolumeBinding::Named { options, .. } = &binding else {
            panic!("expected named binding");
        };
        assert!(options.is_empty());
    }

    #[test]
    fn named_with_keeps_driver_options() {
        let mut driver_opts = IndexMap::new();
        let _ = driver_opts.insert("size".to_string(), "10G".to_string());
        let binding = VolumeBinding::named_with(
            "pgdata",
            "/var/lib/postgresql/data",
            NamedVolumeOptions {
                driver: Some("local".into()),
                driver_opts,
            },
        );
        let VolumeBinding::Named { options, .. } = &binding else {
            panic!("expected named binding");
        };
        assert_eq!(options.driver.as_deref(), Some("local"));
        assert_eq!(options.driver_opts.get("size").map(String::as_str), Some("10G"));
    }

    #[test]
    fn deserializes_compose_long_syntax() {
        let binding: VolumeBinding =
            serde_yaml::from_str("{type: volume, source: html, target: /var/www/html}")
                .expect("parse");
        assert_eq!(binding, VolumeBinding::named("html", "/var/www/html"));

        let binding: VolumeBinding =
            serde_yaml::from_str("{type: bind, source: ./site, target: /srv}").expect("parse");
        assert_eq!(binding, VolumeBinding::bind("./site", "/srv"));
    }
}
