//! Dependency graph management using `petgraph`.
//!
//! Builds a directed graph from resolved `depends_on` edges and resolves
//! a startup ordering. Diagnostic only: document synthesis never consults
//! this module.

use stackforge_common::error::{ConfigurationError, Result};

/// A dependency graph over service names.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Internal petgraph representation.
    graph: petgraph::Graph<String, ()>,
}

impl DependencyGraph {
    /// Creates an empty dependency graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: petgraph::Graph::new(),
        }
    }

    /// Adds a service node to the graph.
    pub fn add_service(&mut self, name: impl Into<String>) -> petgraph::graph::NodeIndex {
        self.graph.add_node(name.into())
    }

    /// Adds a dependency edge: `dependent` depends on `dependency`.
    ///
    /// The graph edge points from `dependency` to `dependent`
    /// so that topological sort yields dependencies first.
    pub fn add_dependency(
        &mut self,
        dependent: petgraph::graph::NodeIndex,
        dependency: petgraph::graph::NodeIndex,
    ) {
        let _ = self.graph.add_edge(dependency, dependent, ());
    }

    /// Returns a topological ordering of services for startup.
    ///
    /// Dependencies appear before the services that depend on them.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph contains cycles.
    pub fn resolve_order(&self) -> Result<Vec<String>> {
        match petgraph::algo::toposort(&self.graph, None) {
            Ok(indices) => {
                let names: Vec<String> = indices
                    .iter()
                    .filter_map(|&idx| self.graph.node_weight(idx).cloned())
                    .collect();
                Ok(names)
            }
            Err(cycle) => Err(ConfigurationError::DependencyCycle {
                service: self
                    .graph
                    .node_weight(cycle.node_id())
                    .cloned()
                    .unwrap_or_default(),
            }),
        }
    }
}
