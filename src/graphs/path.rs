use serde::{Deserialize, Serialize};

use super::{Edge, VertexId, Weight};

/// Ordered sequence of edges returned by a solver.
///
/// For a shortest-path solve the edges chain source→target in traversal
/// order; for a spanning-tree solve they are listed in the order the tree
/// grew. Created fresh per solve and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgePath {
    pub edges: Vec<Edge>,
}

impl EdgePath {
    pub fn new(edges: Vec<Edge>) -> EdgePath {
        EdgePath { edges }
    }

    pub fn empty() -> EdgePath {
        EdgePath { edges: Vec::new() }
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// A shortest-path query along with its expected distance, if a path exists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub source: VertexId,
    pub target: VertexId,
    pub distance: Option<Weight>,
}
