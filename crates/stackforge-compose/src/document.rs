//! The plain serializable compose document.
//!
//! Everything here is inert data: the builder assembles these types during
//! synthesis and the caller hands them to an encoder. Map types are
//! insertion-ordered so the encoded document lists services in
//! registration order and registry entries in first-declaration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::port::PortMapping;
use crate::spec::BuildSpec;
use crate::volume::VolumeBinding;

/// Mount kind of a service-level volume entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeKind {
    /// Host path mounted directly.
    Bind,
    /// Document-scoped named volume.
    Volume,
}

/// A service-level volume entry in compose long syntax.
///
/// Driver configuration never appears here; it lives in the top-level
/// registry entry only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeFragment {
    /// Mount kind.
    #[serde(rename = "type")]
    pub kind: VolumeKind,
    /// Host path (bind) or registry key (volume).
    pub source: String,
    /// Container-side target path.
    pub target: String,
}

impl From<&VolumeBinding> for VolumeFragment {
    fn from(binding: &VolumeBinding) -> Self {
        match binding {
            VolumeBinding::Bind { source, target } => Self {
                kind: VolumeKind::Bind,
                source: source.clone(),
                target: target.clone(),
            },
            VolumeBinding::Named { source, target, .. } => Self {
                kind: VolumeKind::Volume,
                source: source.clone(),
                target: target.clone(),
            },
        }
    }
}

/// One service's section of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceFragment {
    /// Literal image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Build specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildSpec>,
    /// Command run inside the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    /// Entrypoint override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<Vec<String>>,
    /// Environment variables.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub environment: IndexMap<String, String>,
    /// Container labels.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub labels: IndexMap<String, String>,
    /// Published port mappings.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortMapping>,
    /// Volume entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<VolumeFragment>,
    /// Attached network names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<String>,
    /// Resolved dependency names, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// A top-level volume registry entry.
///
/// Serializes to an empty mapping for default-configured volumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeEntry {
    /// Volume driver name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    /// Driver-specific options.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub driver_opts: IndexMap<String, String>,
}

/// A top-level network registry entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkEntry {
    /// Network driver name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    /// Driver-specific options.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub driver_opts: IndexMap<String, String>,
}

/// The full synthesized compose document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeDocument {
    /// Services, keyed by name in registration order.
    pub services: IndexMap<String, ServiceFragment>,
    /// Named volume registry; omitted from the encoded document when empty.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub volumes: IndexMap<String, VolumeEntry>,
    /// Network registry; omitted from the encoded document when empty.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub networks: IndexMap<String, NetworkEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collections_are_omitted() {
        let mut services = IndexMap::new();
        let _ = services.insert(
            "web".to_string(),
            ServiceFragment {
                image: Some("nginx".into()),
                ..ServiceFragment::default()
            },
        );
        let document = ComposeDocument {
            services,
            ..ComposeDocument::default()
        };

        let yaml = serde_yaml::to_string(&document).expect("serialize");
        assert_eq!(yaml, "services:\n  web:\n    image: nginx\n");
    }

    #[test]
    fn default_volume_entry_serializes_as_empty_mapping() {
        let mut volumes = IndexMap::new();
        let _ = volumes.insert("html".to_string(), VolumeEntry::default());
        let document = ComposeDocument {
            volumes,
            ..ComposeDocument::default()
        };

        let value = serde_yaml::to_value(&document).expect("serialize");
        let expected: serde_yaml::Value =
            serde_yaml::from_str("{services: {}, volumes: {html: {}}}").expect("parse");
        assert_eq!(value, expected);
    }

    #[test]
    fn volume_fragment_from_binding() {
        let fragment = VolumeFragment::from(&VolumeBinding::named("html", "/var/www/html"));
        assert_eq!(fragment.kind, VolumeKind::Volume);
        assert_eq!(fragment.source, "html");
        assert_eq!(fragment.target, "/var/www/html");

        let fragment = VolumeFragment::from(&VolumeBinding::bind("./site", "/srv"));
        assert_eq!(fragment.kind, VolumeKind::Bind);
    }

    #[test]
    fn service_map_preserves_registration_order() {
        let mut services = IndexMap::new();
        for name in ["zeta", "alpha", "midway"] {
            let _ = services.insert(
                name.to_string(),
                ServiceFragment {
                    image: Some("img".into()),
                    ..ServiceFragment::default()
                },
            );
        }
        let document = ComposeDocument {
            services,
            ..ComposeDocument::default()
        };
        let yaml = serde_yaml::to_string(&document).expect("serialize");
        let zeta = yaml.find("zeta").expect("zeta");
        let alpha = yaml.find("alpha").expect("alpha");
        let midway = yaml.find("midway").expect("midway");
        assert!(zeta < alpha && alpha < midway, "got: {yaml}");
    }
}
