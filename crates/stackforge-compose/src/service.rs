//! The service entity and its dependency references.

use indexmap::IndexMap;
use stackforge_common::error::{ConfigurationError, Result};
use stackforge_common::types::ServiceName;

use crate::document::{ServiceFragment, VolumeFragment};
use crate::network::NetworkAttachment;
use crate::port::{PortMapping, PortOptions};
use crate::spec::{BuildSpec, ServiceSpec};
use crate::volume::VolumeBinding;

/// Stable handle to a service registered in a [`ComposeBuilder`].
///
/// Handles are issued at registration and stay valid for the builder's
/// lifetime; services are never deleted.
///
/// [`ComposeBuilder`]: crate::builder::ComposeBuilder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceId(pub(crate) usize);

/// A dependency reference to a sibling service.
///
/// Bare names are resolved against the registry at synthesis time, never
/// earlier, so services may be declared in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRef {
    /// Reference by name, resolved at synthesis time.
    Name(String),
    /// Resolved handle to an already-registered service.
    Handle(ServiceId),
}

impl From<&str> for ServiceRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ServiceRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<ServiceId> for ServiceRef {
    fn from(id: ServiceId) -> Self {
        Self::Handle(id)
    }
}

/// Image source of a service: a literal reference or a build specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Pull a published image.
    Image(String),
    /// Build from a context directory.
    Build(BuildSpec),
}

/// One named container workload within a compose document.
///
/// Created by the builder; mutated afterward only through the mutators
/// below. All mutators append in place; synthesis is a pure read.
#[derive(Debug, Clone)]
pub struct Service {
    pub(crate) name: ServiceName,
    pub(crate) image: ImageSource,
    pub(crate) command: Option<Vec<String>>,
    pub(crate) entrypoint: Option<Vec<String>>,
    pub(crate) environment: IndexMap<String, String>,
    pub(crate) labels: IndexMap<String, String>,
    pub(crate) ports: Vec<PortMapping>,
    pub(crate) volumes: Vec<VolumeBinding>,
    pub(crate) networks: Vec<NetworkAttachment>,
    pub(crate) depends_on: Vec<ServiceRef>,
}

impl Service {
    /// Builds a service from its declarative spec, enforcing the
    /// image/build mutual exclusivity up front.
    pub(crate) fn from_spec(name: ServiceName, spec: ServiceSpec) -> Result<Self> {
        let image = match (spec.image, spec.build) {
            (Some(image), None) => ImageSource::Image(image),
            (None, Some(build)) => ImageSource::Build(build),
            _ => {
                return Err(ConfigurationError::ImageSource {
                    service: name.to_string(),
                });
            }
        };

        Ok(Self {
            name,
            image,
            command: spec.command,
            entrypoint: spec.entrypoint,
            environment: spec.environment,
            labels: spec.labels,
            ports: spec.ports,
            volumes: spec.volumes,
            networks: spec.networks.into_iter().map(Into::into).collect(),
            depends_on: spec.depends_on.into_iter().map(ServiceRef::Name).collect(),
        })
    }

    /// Name of this service.
    #[must_use]
    pub fn name(&self) -> &ServiceName {
        &self.name
    }

    /// Image source of this service.
    #[must_use]
    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    /// Declared port mappings, in declaration order.
    #[must_use]
    pub fn ports(&self) -> &[PortMapping] {
        &self.ports
    }

    /// Declared volume bindings, in declaration order.
    #[must_use]
    pub fn volumes(&self) -> &[VolumeBinding] {
        &self.volumes
    }

    /// Declared dependency references, in declaration order.
    #[must_use]
    pub fn depends_on(&self) -> &[ServiceRef] {
        &self.depends_on
    }

    /// Appends a port mapping with default protocol and mode.
    pub fn add_port(&mut self, published: u16, target: u16) -> &mut Self {
        self.ports.push(PortMapping::new(published, target));
        self
    }

    /// Appends a port mapping with explicit protocol/mode overrides.
    pub fn add_port_with(
        &mut self,
        published: u16,
        target: u16,
        options: PortOptions,
    ) -> &mut Self {
        self.ports
            .push(PortMapping::with_options(published, target, options));
        self
    }

    /// Appends a volume declaration.
    ///
    /// Named volumes are registered into the document-level registry by the
    /// builder at synthesis time, not here.
    pub fn add_volume(&mut self, binding: VolumeBinding) -> &mut Self {
        self.volumes.push(binding);
        self
    }

    /// Appends a network attachment.
    pub fn add_network(&mut self, attachment: NetworkAttachment) -> &mut Self {
        self.networks.push(attachment);
        self
    }

    /// Upserts one environment entry; last write for a key wins, the key
    /// keeps its original position.
    pub fn add_environment(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let _ = self.environment.insert(key.into(), value.into());
        self
    }

    /// Upserts one label entry with the same semantics as environment.
    pub fn add_label(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let _ = self.labels.insert(key.into(), value.into());
        self
    }

    /// Appends a dependency reference: a bare name or a resolved handle.
    ///
    /// Resolution happens centrally at synthesis time.
    pub fn add_depends_on(&mut self, reference: impl Into<ServiceRef>) -> &mut Self {
        self.depends_on.push(reference.into());
        self
    }

    /// Renders this service's document fragment. Pure read; the builder
    /// supplies the already-resolved dependency names.
    pub(crate) fn fragment(&self, depends_on: Vec<String>) -> ServiceFragment {
        let (image, build) = match &self.image {
            ImageSource::Image(image) => (Some(image.clone()), None),
            ImageSource::Build(build) => (None, Some(build.clone())),
        };
        ServiceFragment {
            image,
            build,
            command: self.command.clone(),
            entrypoint: self.entrypoint.clone(),
            environment: self.environment.clone(),
            labels: self.labels.clone(),
            ports: self.ports.clone(),
            volumes: self.volumes.iter().map(VolumeFragment::from).collect(),
            networks: self.networks.iter().map(|n| n.name.clone()).collect(),
            depends_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::Protocol;

    fn web() -> Service {
        let name = ServiceName::new("service", "web").expect("valid name");
        Service::from_spec(name, ServiceSpec::from_image("nginx")).expect("valid spec")
    }

    #[test]
    fn from_spec_requires_exactly_one_image_source() {
        let name = ServiceName::new("service", "broken").expect("valid name");
        let err = Service::from_spec(name.clone(), ServiceSpec::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("broken"), "got: {msg}");
        assert!(msg.contains("`image`") && msg.contains("`build`"), "got: {msg}");

        let both = ServiceSpec {
            image: Some("nginx".into()),
            build: Some(BuildSpec::new(".")),
            ..ServiceSpec::default()
        };
        assert!(Service::from_spec(name, both).is_err());
    }

    #[test]
    fn add_port_allows_duplicates() {
        let mut service = web();
        let _ = service.add_port(8080, 80).add_port(8080, 80);
        assert_eq!(service.ports().len(), 2);
    }

    #[test]
    fn add_port_with_overrides_protocol() {
        let mut service = web();
        let _ = service.add_port_with(
            53,
            53,
            PortOptions {
                protocol: Protocol::Udp,
                ..PortOptions::default()
            },
        );
        assert_eq!(service.ports()[0].protocol, Protocol::Udp);
    }

    #[test]
    fn add_environment_upserts_in_place() {
        let mut service = web();
        let _ = service
            .add_environment("A", "1")
            .add_environment("B", "2")
            .add_environment("A", "3");
        let entries: Vec<_> = service
            .environment
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(entries, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn add_depends_on_accepts_names_and_handles() {
        let mut service = web();
        let _ = service.add_depends_on("db").add_depends_on(ServiceId(3));
        assert_eq!(
            service.depends_on(),
            &[ServiceRef::Name("db".into()), ServiceRef::Handle(ServiceId(3))]
        );
    }
}
