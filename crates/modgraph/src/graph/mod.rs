//! Generic directed graph primitives and elementary cycle enumeration.
//!
//! Nodes can be anything hashable; edges carry attachments describing why the
//! edge exists (for module graphs, the underlying class dependencies).
//!
//! ```
//! use modgraph::graph::{Edge, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_edge(Edge::new("A", "B", ["a uses b"]));
//! graph.add_edge(Edge::new("B", "C", ["b uses c"]));
//! graph.add_edge(Edge::new("C", "A", ["c uses a"]));
//!
//! let cycles = graph.find_cycles(10);
//! assert_eq!(cycles.len(), 1);
//! assert_eq!(cycles.iter().next().unwrap().to_string(), "A -> B -> C -> A");
//! ```

mod edge;
mod johnson;
mod path;

pub use edge::Edge;
pub use path::{Cycle, GraphError, Path};

use std::collections::BTreeMap;
use std::hash::Hash;

use rustc_hash::FxHashMap as HashMap;

/// Directed graph with at most one edge per ordered node pair.
///
/// Nodes are kept in insertion order, which also fixes the order in which
/// cycles are reported.
#[derive(Debug, Clone)]
pub struct Graph<N, A> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    edges: BTreeMap<(usize, usize), Edge<N, A>>,
}

impl<N, A> Default for Graph<N, A> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::default(),
            edges: BTreeMap::new(),
        }
    }
}

impl<N, A> Graph<N, A>
where
    N: Clone + Eq + Hash,
    A: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node unless it is already present.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&position) = self.index.get(&node) {
            return position;
        }
        let position = self.nodes.len();
        self.index.insert(node.clone(), position);
        self.nodes.push(node);
        position
    }

    /// Adds an edge together with its end nodes.
    ///
    /// A second edge between the same ordered pair merges its attachments into
    /// the existing edge.
    pub fn add_edge(&mut self, edge: Edge<N, A>) {
        let origin = self.add_node(edge.origin().clone());
        let target = self.add_node(edge.target().clone());

        match self.edges.get_mut(&(origin, target)) {
            Some(existing) => existing.attach(edge.attachments().iter().cloned()),
            None => {
                self.edges.insert((origin, target), edge);
            }
        }
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Edges ordered by the insertion order of their origin, then their target.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N, A>> {
        self.edges.values()
    }

    pub fn edge(&self, origin: &N, target: &N) -> Option<&Edge<N, A>> {
        let origin = *self.index.get(origin)?;
        let target = *self.index.get(target)?;
        self.edges.get(&(origin, target))
    }

    /// Enumerates elementary cycles, stopping once `max` cycles were found.
    ///
    /// Self-loops are never reported.
    pub fn find_cycles(&self, max: usize) -> Cycles<N, A> {
        let mut adjacency = vec![Vec::new(); self.nodes.len()];
        for &(origin, target) in self.edges.keys() {
            if origin != target {
                adjacency[origin].push(target);
            }
        }

        let search = johnson::elementary_cycles(&adjacency, max);
        let cycles = search
            .cycles
            .iter()
            .filter_map(|nodes| self.cycle_through(nodes))
            .collect();

        Cycles {
            cycles,
            max_number_of_cycles_reached: search.limit_reached,
        }
    }

    fn cycle_through(&self, nodes: &[usize]) -> Option<Cycle<N, A>> {
        let edges = nodes
            .iter()
            .zip(nodes.iter().cycle().skip(1))
            .map(|(&origin, &target)| self.edges.get(&(origin, target)).cloned())
            .collect::<Option<Vec<_>>>()?;
        Cycle::new(edges).ok()
    }
}

/// Result of a bounded cycle search.
#[derive(Debug, Clone)]
pub struct Cycles<N, A> {
    cycles: Vec<Cycle<N, A>>,
    max_number_of_cycles_reached: bool,
}

impl<N, A> Cycles<N, A> {
    pub fn iter(&self) -> std::slice::Iter<'_, Cycle<N, A>> {
        self.cycles.iter()
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// True if the search stopped before all cycles were enumerated.
    pub fn max_number_of_cycles_reached(&self) -> bool {
        self.max_number_of_cycles_reached
    }

    pub fn into_vec(self) -> Vec<Cycle<N, A>> {
        self.cycles
    }
}

impl<'a, N, A> IntoIterator for &'a Cycles<N, A> {
    type Item = &'a Cycle<N, A>;
    type IntoIter = std::slice::Iter<'a, Cycle<N, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cycles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&'static str, &'static str)]) -> Graph<&'static str, String> {
        let mut graph = Graph::new();
        for (origin, target) in edges {
            graph.add_edge(Edge::new(*origin, *target, [format!("{origin}->{target}")]));
        }
        graph
    }

    fn rendered(cycles: &Cycles<&'static str, String>) -> Vec<String> {
        cycles.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn acyclic_graph_has_no_cycles() {
        let cycles = graph(&[("A", "B"), ("B", "C"), ("A", "C")]).find_cycles(10);
        assert!(cycles.is_empty());
        assert!(!cycles.max_number_of_cycles_reached());
    }

    #[test]
    fn self_loops_are_not_cycles() {
        let cycles = graph(&[("A", "A"), ("A", "B")]).find_cycles(10);
        assert!(cycles.is_empty());
    }

    #[test]
    fn finds_all_elementary_cycles() {
        let cycles = graph(&[
            ("A", "B"),
            ("B", "A"),
            ("B", "C"),
            ("C", "A"),
            ("C", "D"),
            ("D", "C"),
        ])
        .find_cycles(10);

        assert_eq!(
            rendered(&cycles),
            [
                "A -> B -> A",
                "A -> B -> C -> A",
                "C -> D -> C",
            ]
        );
    }

    #[test]
    fn stops_at_the_limit() {
        let edges = [("A", "B"), ("B", "A"), ("B", "C"), ("C", "B"), ("C", "A"), ("A", "C")];
        let all = graph(&edges).find_cycles(100);
        assert!(!all.max_number_of_cycles_reached());
        assert!(all.len() > 2);

        let limited = graph(&edges).find_cycles(2);
        assert_eq!(limited.len(), 2);
        assert!(limited.max_number_of_cycles_reached());
    }

    #[test]
    fn duplicate_edges_merge_attachments() {
        let mut graph: Graph<&str, &str> = Graph::new();
        graph.add_edge(Edge::new("A", "B", ["first"]));
        graph.add_edge(Edge::new("A", "B", ["second"]));

        assert_eq!(graph.edges().count(), 1);
        assert_eq!(graph.edge(&"A", &"B").unwrap().attachments(), ["first", "second"]);
    }

    #[test]
    fn cycle_edges_keep_attachments() {
        let cycles = graph(&[("A", "B"), ("B", "A")]).find_cycles(10);
        let cycle = cycles.iter().next().unwrap();
        assert_eq!(cycle.edges()[0].attachments(), ["A->B"]);
        assert_eq!(cycle.edges()[1].attachments(), ["B->A"]);
    }
}
