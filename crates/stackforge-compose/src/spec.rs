//! Declarative service descriptions.
//!
//! [`ServiceSpec`] is the one declarative shape accepted everywhere: as the
//! initial service map at builder construction, as the argument to
//! `add_service`, and as the per-service section of a YAML/JSON manifest.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::network::{NetworkAttachment, NetworkOptions};
use crate::port::PortMapping;
use crate::volume::VolumeBinding;

/// Build specification for services built from a context directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSpec {
    /// Build context directory.
    pub context: String,
    /// Dockerfile path relative to the context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,
    /// Build arguments passed to the image build.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub args: IndexMap<String, String>,
}

impl BuildSpec {
    /// Creates a build spec for the given context directory.
    #[must_use]
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            dockerfile: None,
            args: IndexMap::new(),
        }
    }

    /// Sets the dockerfile path.
    #[must_use]
    pub fn dockerfile(mut self, path: impl Into<String>) -> Self {
        self.dockerfile = Some(path.into());
        self
    }

    /// Adds a build argument.
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.args.insert(key.into(), value.into());
        self
    }
}

/// A network reference in a declarative spec: a bare name or a full form
/// carrying driver configuration for the registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NetworkSpec {
    /// Bare network name.
    Name(String),
    /// Name plus driver configuration.
    Full {
        /// Registry key of the network.
        name: String,
        /// Driver configuration.
        #[serde(flatten)]
        options: NetworkOptions,
    },
}

impl From<NetworkSpec> for NetworkAttachment {
    fn from(spec: NetworkSpec) -> Self {
        match spec {
            NetworkSpec::Name(name) => Self::new(name),
            NetworkSpec::Full { name, options } => Self::with_options(name, options),
        }
    }
}

/// Declarative description of one service.
///
/// Exactly one of `image` and `build` must be present; the builder rejects
/// specs violating that at registration time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceSpec {
    /// Literal image reference.
    pub image: Option<String>,
    /// Build specification.
    pub build: Option<BuildSpec>,
    /// Command run inside the container.
    pub command: Option<Vec<String>>,
    /// Entrypoint override.
    pub entrypoint: Option<Vec<String>>,
    /// Environment variables.
    pub environment: IndexMap<String, String>,
    /// Container labels.
    pub labels: IndexMap<String, String>,
    /// Published port mappings.
    pub ports: Vec<PortMapping>,
    /// Volume declarations.
    pub volumes: Vec<VolumeBinding>,
    /// Network attachments.
    pub networks: Vec<NetworkSpec>,
    /// Names of services this one depends on.
    pub depends_on: Vec<String>,
}

impl ServiceSpec {
    /// Creates a spec for a service running a literal image.
    #[must_use]
    pub fn from_image(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            ..Self::default()
        }
    }

    /// Creates a spec for a service built from a context directory.
    #[must_use]
    pub fn from_build(build: BuildSpec) -> Self {
        Self {
            build: Some(build),
            ..Self::default()
        }
    }

    /// Sets the command.
    #[must_use]
    pub fn command(mut self, command: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.command = Some(command.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_spec_deserializes_with_defaults() {
        let spec: ServiceSpec = serde_yaml::from_str("image: alpine").expect("parse");
        assert_eq!(spec.image.as_deref(), Some("alpine"));
        assert!(spec.build.is_none());
        assert!(spec.ports.is_empty());
        assert!(spec.depends_on.is_empty());
    }

    #[test]
    fn full_spec_deserializes() {
        let spec: ServiceSpec = serde_yaml::from_str(
            r"
image: nginx:1.27
command: [nginx, -g, daemon off;]
environment:
  TZ: UTC
ports:
  - {published: 8080, target: 80}
volumes:
  - {type: volume, source: html, target: /var/www/html}
networks:
  - frontend
  - {name: backend, driver: bridge}
depends_on: [api]
",
        )
        .expect("parse");

        assert_eq!(spec.ports.len(), 1);
        assert_eq!(spec.volumes.len(), 1);
        assert_eq!(spec.networks.len(), 2);
        assert_eq!(spec.depends_on, vec!["api"]);
        assert_eq!(
            NetworkAttachment::from(spec.networks[1].clone()).options.driver.as_deref(),
            Some("bridge")
        );
    }

    #[test]
    fn build_spec_builder_methods() {
        let build = BuildSpec::new("./api")
            .dockerfile("Dockerfile.prod")
            .arg("RUST_VERSION", "1.86");
        assert_eq!(build.context, "./api");
        assert_eq!(build.dockerfile.as_deref(), Some("Dockerfile.prod"));
        assert_eq!(
            build.args.get("RUST_VERSION").map(String::as_str),
            Some("1.86")
        );
    }
}
