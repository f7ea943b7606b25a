use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod adjacency_list_graph;
pub mod graph_functions;
pub mod path;

pub type VertexId = u32;
pub type Weight = u32;

/// Precondition violation detected at a construction or solve boundary.
///
/// Unreachable targets and disconnected spanning roots are normal outcomes
/// (empty or partial paths), not errors, so this is the only error kind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub tail: VertexId,
    pub head: VertexId,
}

impl Edge {
    pub fn new(tail: VertexId, head: VertexId) -> Edge {
        Edge { tail, head }
    }

    pub fn reversed(&self) -> Edge {
        Edge {
            tail: self.head,
            head: self.tail,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: VertexId,
    pub head: VertexId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn remove_weight(&self) -> Edge {
        Edge {
            tail: self.tail,
            head: self.head,
        }
    }

    pub fn remove_tail(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: VertexId,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: VertexId) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    /// Directed edge count. Each undirected edge contributes two.
    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>()
    }

    /// Edges leaving `source` in insertion order, with `tail == source`.
    fn edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;
}
