use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, trace};

use super::types::{DependencyEdge, ModuleGraph, ModuleNode};
use crate::core::{ModuleId, ModuleSet};
use crate::dependency_filter::DependencyFilter;
use crate::error::CycleTrailError;

/// Builder for constructing module dependency graphs
///
/// Applies the scan patterns and reference filtering of a
/// [`DependencyFilter`] to a raw module snapshot.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraphBuilder {
    filter: DependencyFilter,
}

impl ModuleGraphBuilder {
    /// Create a new module graph builder
    pub fn new(filter: DependencyFilter) -> Self {
        Self { filter }
    }

    /// Build the graph for one detection pass
    ///
    /// Modules without a resource are left out entirely. Modules filtered
    /// out by the include/exclude patterns stay in the graph as hops but are
    /// not scanned.
    pub fn build(&self, modules: &ModuleSet) -> Result<ModuleGraph, CycleTrailError> {
        let mut graph = DiGraph::with_capacity(modules.len(), 0);
        let mut indices: HashMap<&ModuleId, NodeIndex> = HashMap::with_capacity(modules.len());
        let mut seen_ids: HashSet<&ModuleId> = HashSet::with_capacity(modules.len());
        let mut scanned = Vec::new();

        for module in &modules.modules {
            if !seen_ids.insert(&module.id) {
                return Err(CycleTrailError::DuplicateModule {
                    id: module.id.to_string(),
                });
            }

            let Some(resource) = module.resource.as_deref() else {
                trace!(module = %module.id, "skipping module without resource");
                continue;
            };

            let idx = graph.add_node(ModuleNode {
                id: module.id.clone(),
                resource: resource.to_string(),
            });
            indices.insert(&module.id, idx);

            if self.filter.should_scan(resource) {
                scanned.push(idx);
            }
        }

        let mut adjacency = vec![Vec::new(); graph.node_count()];

        for module in &modules.modules {
            let Some(&from_idx) = indices.get(&module.id) else {
                continue;
            };

            for dep in &module.dependencies {
                if !self.filter.should_follow(dep) {
                    trace!(module = %module.id, kind = %dep.kind, weak = dep.weak, "dropping filtered reference");
                    continue;
                }

                // Unresolved, or resolved to a module without a resource
                let Some(&to_idx) = dep.module.as_ref().and_then(|id| indices.get(id)) else {
                    trace!(module = %module.id, target = ?dep.module, "dropping unresolvable reference");
                    continue;
                };

                if to_idx == from_idx {
                    continue;
                }

                graph.add_edge(
                    from_idx,
                    to_idx,
                    DependencyEdge { weak: dep.weak },
                );
                adjacency[from_idx.index()].push(to_idx);
            }
        }

        debug!(
            modules = modules.len(),
            vertices = graph.node_count(),
            scanned = scanned.len(),
            edges = graph.edge_count(),
            "built module graph"
        );

        Ok(ModuleGraph {
            graph,
            scanned,
            adjacency,
        })
    }
}
