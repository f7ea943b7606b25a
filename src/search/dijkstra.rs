use super::dijkstra_data::DijkstraData;
use crate::{
    graphs::{path::EdgePath, Graph, GraphError, VertexId, Weight},
    queue::DistanceQueueElement,
};

/// Shortest path from `source` to `target` as an edge sequence.
///
/// An empty path means `source == target` or that `target` is unreachable;
/// neither is an error.
pub fn shortest_path(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<EdgePath, GraphError> {
    for vertex in [source, target] {
        if vertex >= graph.number_of_vertices() {
            return Err(GraphError::InvalidArgument(format!(
                "vertex {} is out of range 0..{}",
                vertex,
                graph.number_of_vertices()
            )));
        }
    }

    let data = single_source(graph, source);
    Ok(data.edge_path(target))
}

pub fn shortest_path_distance(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Weight>, GraphError> {
    for vertex in [source, target] {
        if vertex >= graph.number_of_vertices() {
            return Err(GraphError::InvalidArgument(format!(
                "vertex {} is out of range 0..{}",
                vertex,
                graph.number_of_vertices()
            )));
        }
    }

    Ok(single_source(graph, source).distance(target))
}

/// Runs Dijkstra from `source` until the queue is empty. `source` must be in
/// range.
pub fn single_source(graph: &dyn Graph, source: VertexId) -> DijkstraData {
    let mut data = DijkstraData::new(graph.number_of_vertices() as usize, source);

    while let Some(DistanceQueueElement { vertex, .. }) = data.pop() {
        graph
            .edges(vertex)
            .for_each(|edge| data.update(vertex, edge.head, edge.weight));
    }

    data
}
