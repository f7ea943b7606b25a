use std::slice::Iter;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Graph, GraphError, TaillessEdge, VertexId, Weight, WeightedEdge};

/// Undirected weighted graph over a dense, fixed vertex set `[0, V)`.
///
/// Every `add_edge` appends to both endpoints' adjacency lists, so the
/// adjacency relation stays symmetric by construction. Parallel edges are
/// kept as inserted, self-loops are rejected.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdjacencyListGraph {
    edges: Vec<Vec<TaillessEdge>>,
    vertex_weights: Vec<Weight>,
}

impl AdjacencyListGraph {
    /// Creates a graph with `number_of_vertices` vertices and no edges.
    ///
    /// Each vertex gets an incidental random weight in `1..=10`. Neither
    /// solver reads it; callers may ignore or repurpose it.
    pub fn new(number_of_vertices: u32) -> Result<AdjacencyListGraph, GraphError> {
        if number_of_vertices == 0 {
            return Err(GraphError::InvalidArgument(
                "number of vertices must be positive".to_string(),
            ));
        }

        let mut rng = thread_rng();
        let vertex_weights = (0..number_of_vertices)
            .map(|_| rng.gen_range(1..=10))
            .collect();

        Ok(AdjacencyListGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
            vertex_weights,
        })
    }

    /// Adds the undirected edge `(tail, head)` with the given weight.
    ///
    /// O(1), no deduplication. Adding `(a, b, w)` twice leaves two parallel
    /// edges in both adjacency lists.
    pub fn add_edge(
        &mut self,
        tail: VertexId,
        head: VertexId,
        weight: Weight,
    ) -> Result<(), GraphError> {
        for vertex in [tail, head] {
            if vertex >= self.number_of_vertices() {
                return Err(GraphError::InvalidArgument(format!(
                    "vertex {} is out of range 0..{}",
                    vertex,
                    self.number_of_vertices()
                )));
            }
        }
        if tail == head {
            return Err(GraphError::InvalidArgument(format!(
                "self-loop on vertex {} is not allowed",
                tail
            )));
        }
        if weight == 0 {
            return Err(GraphError::InvalidArgument(
                "edge weight must be positive".to_string(),
            ));
        }

        self.edges[tail as usize].push(TaillessEdge { head, weight });
        self.edges[head as usize].push(TaillessEdge { head: tail, weight });

        Ok(())
    }

    pub fn vertex_weight(&self, vertex: VertexId) -> Option<Weight> {
        self.vertex_weights.get(vertex as usize).copied()
    }
}

impl Graph for AdjacencyListGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.edges.iter().map(Vec::len).sum::<usize>() as u32
    }

    fn edges(
        &self,
        source: VertexId,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        struct OutEdgeIterator<'a> {
            source: VertexId,
            tailless_edge_iterator: Iter<'a, TaillessEdge>,
        }

        impl<'a> Iterator for OutEdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                Some(self.tailless_edge_iterator.next()?.set_tail(self.source))
            }
        }

        impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
            fn len(&self) -> usize {
                self.tailless_edge_iterator.len()
            }
        }

        let tailless_edge_iterator = if let Some(edges) = self.edges.get(source as usize) {
            edges.iter()
        } else {
            [].iter()
        };

        Box::new(OutEdgeIterator {
            source,
            tailless_edge_iterator,
        })
    }
}
