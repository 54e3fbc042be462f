//! Registration, validation, and document synthesis.
//!
//! [`ComposeBuilder`] is a mutable accumulator with no intermediate
//! states: services are registered declaratively or imperatively, mutated
//! through their own API, and [`ComposeBuilder::synthesize`] can be called
//! any number of times — it only reads the accumulator, so repeated
//! synthesis after further mutation reflects the new state.

use stackforge_common::constants::compose_file_name;
use stackforge_common::error::{ConfigurationError, Result};
use stackforge_common::types::ServiceName;

use crate::document::{ComposeDocument, NetworkEntry, VolumeEntry};
use crate::graph::DependencyGraph;
use crate::service::{Service, ServiceId, ServiceRef};
use crate::spec::ServiceSpec;
use crate::volume::VolumeBinding;

/// Accumulates named services and synthesizes the compose document.
#[derive(Debug, Default)]
pub struct ComposeBuilder {
    services: Vec<Service>,
    name_suffix: Option<String>,
}

impl ComposeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from a declarative service map.
    ///
    /// Each entry goes through the same path as [`Self::add_service`],
    /// in iteration order.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry fails service registration.
    pub fn with_services<N, I>(specs: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, ServiceSpec)>,
    {
        let mut builder = Self::new();
        for (name, spec) in specs {
            let _ = builder.add_service(name, spec)?;
        }
        Ok(builder)
    }

    /// Sets the logical output-name suffix.
    ///
    /// The suffix changes only the file name exposed through
    /// [`Self::output_file_name`], never the document content.
    #[must_use]
    pub fn with_name_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.name_suffix = Some(suffix.into());
        self
    }

    /// Logical file name for the external writer:
    /// `docker-compose.yml`, or `docker-compose.<suffix>.yml`.
    #[must_use]
    pub fn output_file_name(&self) -> String {
        compose_file_name(self.name_suffix.as_deref())
    }

    /// Registers a service and returns its handle.
    ///
    /// # Errors
    ///
    /// Fails if the name is not a valid compose key, if it collides with
    /// an already-registered service, or if the spec does not carry
    /// exactly one of `image`/`build`.
    pub fn add_service(&mut self, name: impl Into<String>, spec: ServiceSpec) -> Result<ServiceId> {
        let name = ServiceName::new("service", name)?;
        if self.find(name.as_str()).is_some() {
            return Err(ConfigurationError::DuplicateService {
                name: name.to_string(),
            });
        }

        let service = Service::from_spec(name, spec)?;
        tracing::debug!(service = %service.name(), "registered service");
        self.services.push(service);
        Ok(ServiceId(self.services.len() - 1))
    }

    /// Looks up a registered service by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ServiceId> {
        self.services
            .iter()
            .position(|service| service.name == name)
            .map(ServiceId)
    }

    /// Returns the service behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by a different builder.
    #[must_use]
    pub fn service(&self, id: ServiceId) -> &Service {
        &self.services[id.0]
    }

    /// Returns the service behind a handle for further mutation.
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by a different builder.
    #[must_use]
    pub fn service_mut(&mut self, id: ServiceId) -> &mut Service {
        &mut self.services[id.0]
    }

    /// Iterates registered services in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    /// Number of registered services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// True when no service has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Synthesizes the plain compose document from the current state.
    ///
    /// Resolution and validation of dependency references happen here,
    /// centrally: bare names are looked up in the registry, handles are
    /// checked against it, and self-dependencies are rejected. The
    /// services map is assembled in registration order, the volume and
    /// network registries in first-declaration order.
    ///
    /// # Errors
    ///
    /// Fails if no service is registered, if a dependency reference does
    /// not resolve, if a service depends on itself, or if a volume or
    /// network key is not a valid compose name.
    pub fn synthesize(&self) -> Result<ComposeDocument> {
        if self.services.is_empty() {
            return Err(ConfigurationError::EmptyDocument);
        }
        tracing::info!(services = self.services.len(), "synthesizing compose document");

        let resolved = self.resolve_dependencies()?;

        let mut document = ComposeDocument::default();
        for (service, targets) in self.services.iter().zip(&resolved) {
            let depends_on = targets
                .iter()
                .map(|&target| self.services[target].name().to_string())
                .collect();
            let previous = document
                .services
                .insert(service.name().to_string(), service.fragment(depends_on));
            debug_assert!(previous.is_none());
        }

        self.register_volumes(&mut document)?;
        self.register_networks(&mut document)?;
        Ok(document)
    }

    /// Resolves each service's startup position from its dependency edges.
    ///
    /// Diagnostic only: document synthesis does not order services by
    /// dependencies, and a document with a dependency cycle still
    /// synthesizes.
    ///
    /// # Errors
    ///
    /// Fails on unresolved or self dependencies, or when the edges form a
    /// cycle and no order exists.
    pub fn startup_order(&self) -> Result<Vec<String>> {
        let resolved = self.resolve_dependencies()?;

        let mut graph = DependencyGraph::new();
        let nodes: Vec<_> = self
            .services
            .iter()
            .map(|service| graph.add_service(service.name().as_str()))
            .collect();
        for (dependent, targets) in resolved.iter().enumerate() {
            for &target in targets {
                graph.add_dependency(nodes[dependent], nodes[target]);
            }
        }
        graph.resolve_order()
    }

    /// Resolves every dependency reference to a registry index, in
    /// declaration order per service.
    fn resolve_dependencies(&self) -> Result<Vec<Vec<usize>>> {
        let mut resolved = Vec::with_capacity(self.services.len());
        for (index, service) in self.services.iter().enumerate() {
            let mut targets = Vec::with_capacity(service.depends_on().len());
            for reference in service.depends_on() {
                let target = match reference {
                    ServiceRef::Name(name) => self.find(name).ok_or_else(|| {
                        ConfigurationError::UnknownDependency {
                            dependent: service.name().to_string(),
                            target: name.clone(),
                        }
                    })?,
                    ServiceRef::Handle(id) => {
                        if id.0 >= self.services.len() {
                            return Err(ConfigurationError::UnknownDependency {
                                dependent: service.name().to_string(),
                                target: format!("#{}", id.0),
                            });
                        }
                        *id
                    }
                };
                if target.0 == index {
                    return Err(ConfigurationError::SelfDependency {
                        service: service.name().to_string(),
                    });
                }
                targets.push(target.0);
            }
            resolved.push(targets);
        }
        Ok(resolved)
    }

    /// Scans all named-volume declarations into the top-level registry.
    ///
    /// First declaration wins: a name already registered keeps its entry
    /// even when a later declaration carries different driver options.
    fn register_volumes(&self, document: &mut ComposeDocument) -> Result<()> {
        for service in &self.services {
            for binding in service.volumes() {
                let VolumeBinding::Named {
                    source, options, ..
                } = binding
                else {
                    continue;
                };
                let _ = ServiceName::new("volume", source.clone())?;
                if document.volumes.contains_key(source) {
                    continue;
                }
                let _ = document.volumes.insert(
                    source.clone(),
                    VolumeEntry {
                        driver: options.driver.clone(),
                        driver_opts: options.driver_opts.clone(),
                    },
                );
            }
        }
        Ok(())
    }

    /// Scans all network attachments into the top-level registry, with the
    /// same first-declaration-wins policy as volumes.
    fn register_networks(&self, document: &mut ComposeDocument) -> Result<()> {
        for service in &self.services {
            for attachment in &service.networks {
                let _ = ServiceName::new("network", attachment.name.clone())?;
                if document.networks.contains_key(&attachment.name) {
                    continue;
                }
                let _ = document.networks.insert(
                    attachment.name.clone(),
                    NetworkEntry {
                        driver: attachment.options.driver.clone(),
                        driver_opts: attachment.options.driver_opts.clone(),
                    },
                );
            }
        }
        Ok(())
    }
}
