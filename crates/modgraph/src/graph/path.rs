use std::fmt;

use thiserror::Error;

use super::edge::Edge;

/// Failures constructing paths and cycles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("A path needs at least one edge")]
    EmptyPath,

    #[error("Edges are not connected: edge {index} does not start where the previous edge ends")]
    EdgesNotConnected { index: usize },

    #[error("Edges do not form a cycle: {reason}")]
    NotACycle { reason: &'static str },
}

/// A non-empty chain of edges where every edge starts at the target of the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N, A> {
    edges: Vec<Edge<N, A>>,
}

impl<N: PartialEq, A> Path<N, A> {
    pub fn new(edges: Vec<Edge<N, A>>) -> Result<Self, GraphError> {
        if edges.is_empty() {
            return Err(GraphError::EmptyPath);
        }

        if let Some(position) = edges
            .windows(2)
            .position(|pair| pair[0].target() != pair[1].origin())
        {
            return Err(GraphError::EdgesNotConnected {
                index: position + 1,
            });
        }

        Ok(Self { edges })
    }

    pub fn edges(&self) -> &[Edge<N, A>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn origin(&self) -> &N {
        self.edges[0].origin()
    }

    pub fn target(&self) -> &N {
        self.edges[self.edges.len() - 1].target()
    }

    /// Every node along the path, starting at the origin and ending at the target.
    pub fn nodes(&self) -> Vec<&N> {
        self.edges
            .iter()
            .map(Edge::origin)
            .chain(std::iter::once(self.target()))
            .collect()
    }
}

/// A closed path of at least two edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<N, A> {
    path: Path<N, A>,
}

impl<N: PartialEq, A> Cycle<N, A> {
    pub fn new(edges: Vec<Edge<N, A>>) -> Result<Self, GraphError> {
        if edges.is_empty() {
            return Err(GraphError::NotACycle {
                reason: "there are no edges",
            });
        }

        let path = Path::new(edges)?;
        if path.len() < 2 {
            return Err(GraphError::NotACycle {
                reason: "a cycle needs at least two edges",
            });
        }
        if path.origin() != path.target() {
            return Err(GraphError::NotACycle {
                reason: "the last edge does not end at the origin of the first",
            });
        }

        Ok(Self { path })
    }

    pub fn edges(&self) -> &[Edge<N, A>] {
        self.path.edges()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Each node of the cycle once, in traversal order.
    pub fn nodes(&self) -> Vec<&N> {
        self.path.edges().iter().map(Edge::origin).collect()
    }
}

impl<N: fmt::Display + PartialEq, A> fmt::Display for Cycle<N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            write!(f, "{node} -> ")?;
        }
        write!(f, "{}", self.path.target())
    }
}
