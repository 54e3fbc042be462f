//! The declarative manifest read from disk.
//!
//! The manifest is the host-side input: an ordered map of service specs
//! plus the optional output-name suffix. Loading it is the only file read
//! in the workspace; the engine itself never touches the filesystem.

use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;
use stackforge_compose::spec::ServiceSpec;
use stackforge_compose::ComposeBuilder;

/// A parsed stackforge manifest.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Optional output-name suffix (`docker-compose.<suffix>.yml`).
    pub suffix: Option<String>,
    /// Services, keyed by name in file order.
    pub services: IndexMap<String, ServiceSpec>,
}

impl Manifest {
    /// Loads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?;
        let manifest: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing manifest {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            services = manifest.services.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Builds a [`ComposeBuilder`] from this manifest's declarations.
    ///
    /// # Errors
    ///
    /// Returns an error if any service spec fails registration.
    pub fn into_builder(self) -> anyhow::Result<ComposeBuilder> {
        let mut builder = ComposeBuilder::with_services(self.services)?;
        if let Some(suffix) = self.suffix {
            builder = builder.with_name_suffix(suffix);
        }
        Ok(builder)
    }
}
