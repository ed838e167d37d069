//! Johnson's elementary circuit enumeration over dense node indices.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashSet as HashSet;

pub(super) struct CycleSearch {
    pub cycles: Vec<Vec<usize>>,
    pub limit_reached: bool,
}

/// Every elementary cycle of the graph given as adjacency lists, each listed
/// starting at its smallest node.
///
/// Adjacency lists must not contain self-loops.
pub(super) fn elementary_cycles(adjacency: &[Vec<usize>], max: usize) -> CycleSearch {
    let mut search = Search {
        adjacency,
        in_component: vec![false; adjacency.len()],
        blocked: vec![false; adjacency.len()],
        blocked_by: vec![HashSet::default(); adjacency.len()],
        stack: Vec::new(),
        max,
        result: CycleSearch {
            cycles: Vec::new(),
            limit_reached: false,
        },
    };

    let mut start = 0;
    while let Some(component) = least_component(adjacency, start) {
        let Some(&least) = component.iter().min() else {
            break;
        };

        search.enter(&component);
        search.circuit(least, least);
        if search.result.limit_reached {
            break;
        }
        start = least + 1;
    }

    search.result
}

/// The non-trivial strongly connected component containing the smallest node
/// among those induced by nodes `start..`.
fn least_component(adjacency: &[Vec<usize>], start: usize) -> Option<Vec<usize>> {
    let mut graph = DiGraph::<usize, ()>::new();
    let nodes: Vec<NodeIndex> = (start..adjacency.len()).map(|n| graph.add_node(n)).collect();

    for (origin, targets) in adjacency.iter().enumerate().skip(start) {
        for &target in targets.iter().filter(|&&target| target >= start) {
            graph.add_edge(nodes[origin - start], nodes[target - start], ());
        }
    }

    tarjan_scc(&graph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|component| component.into_iter().map(|n| graph[n]).collect::<Vec<_>>())
        .min_by_key(|component| component.iter().min().copied())
}

struct Search<'a> {
    adjacency: &'a [Vec<usize>],
    in_component: Vec<bool>,
    blocked: Vec<bool>,
    blocked_by: Vec<HashSet<usize>>,
    stack: Vec<usize>,
    max: usize,
    result: CycleSearch,
}

impl Search<'_> {
    fn enter(&mut self, component: &[usize]) {
        self.in_component.fill(false);
        for &node in component {
            self.in_component[node] = true;
            self.blocked[node] = false;
            self.blocked_by[node].clear();
        }
    }

    fn circuit(&mut self, node: usize, start: usize) -> bool {
        let adjacency = self.adjacency;
        let mut found = false;
        self.stack.push(node);
        self.blocked[node] = true;

        for &next in &adjacency[node] {
            if self.result.limit_reached {
                break;
            }
            if !self.in_component[next] {
                continue;
            }
            if next == start {
                if self.result.cycles.len() == self.max {
                    self.result.limit_reached = true;
                    break;
                }
                self.result.cycles.push(self.stack.clone());
                found = true;
            } else if !self.blocked[next] && self.circuit(next, start) {
                found = true;
            }
        }

        if found {
            self.unblock(node);
        } else {
            for &next in &adjacency[node] {
                if self.in_component[next] {
                    self.blocked_by[next].insert(node);
                }
            }
        }

        self.stack.pop();
        found
    }

    fn unblock(&mut self, node: usize) {
        self.blocked[node] = false;
        let waiting: Vec<usize> = self.blocked_by[node].drain().collect();
        for other in waiting {
            if self.blocked[other] {
                self.unblock(other);
            }
        }
    }
}
