use crate::{
    graphs::{path::EdgePath, Edge, Graph, GraphError},
    queue::{heap_queue::HeapQueue, EdgeQueueElement},
};

/// Minimum spanning tree via Prim's greedy expansion, rooted at vertex 0.
///
/// On a graph that is not connected from vertex 0 the result is the minimum
/// spanning forest of the root's component, with fewer than `V - 1` edges.
pub fn minimum_spanning_tree(graph: &dyn Graph) -> Result<EdgePath, GraphError> {
    if graph.number_of_vertices() == 0 {
        return Err(GraphError::InvalidArgument(
            "graph has no vertices".to_string(),
        ));
    }

    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut in_tree = vec![false; number_of_vertices];
    let mut edges = Vec::new();

    let mut queue = HeapQueue::new();
    queue.push(EdgeQueueElement::new(0, 0, None));

    // Same lazy-deletion pattern as the Dijkstra queue: a vertex may sit in
    // the queue once per candidate edge, every pop after the first is stale.
    while edges.len() + 1 < number_of_vertices {
        let Some(EdgeQueueElement { vertex, parent, .. }) = queue.pop() else {
            break;
        };

        if in_tree[vertex as usize] {
            continue;
        }
        in_tree[vertex as usize] = true;

        if let Some(parent) = parent {
            edges.push(Edge::new(parent, vertex));
        }

        for edge in graph.edges(vertex) {
            if !in_tree[edge.head as usize] {
                queue.push(EdgeQueueElement::new(edge.weight, edge.head, Some(vertex)));
            }
        }
    }

    Ok(EdgePath::new(edges))
}
