//! Cycle detection across module dependencies.

use modgraph_config::CycleSettings;

use super::graph::ModuleGraph;
use crate::class::ClassDependency;
use crate::descriptor::Descriptor;
use crate::graph::{Cycles, Edge, Graph};
use crate::identifier::Identifier;

impl<D: Descriptor> ModuleGraph<D> {
    /// One node per module and one edge per module dependency, carrying the
    /// underlying class dependencies.
    pub fn dependency_graph(&self) -> Graph<Identifier, ClassDependency> {
        let mut graph = Graph::new();
        for module in self.iter() {
            graph.add_node(module.identifier().clone());
        }
        for dependency in self.module_dependencies() {
            graph.add_edge(Edge::new(
                dependency.origin().clone(),
                dependency.target().clone(),
                dependency.class_dependencies().iter().cloned(),
            ));
        }
        graph
    }

    /// Elementary cycles between modules, up to the configured limit.
    pub fn cycles(&self, settings: &CycleSettings) -> Cycles<Identifier, ClassDependency> {
        let cycles = self
            .dependency_graph()
            .find_cycles(settings.max_number_to_detect);

        if cycles.max_number_of_cycles_reached() {
            tracing::warn!(
                "Stopped cycle detection after {} cycles; raise cycles.max_number_to_detect to see more",
                settings.max_number_to_detect
            );
        } else {
            tracing::debug!("Found {} module cycles", cycles.len());
        }

        cycles
    }
}
