use ahash::{HashSet, HashSetExt};
use indicatif::ProgressIterator;
use itertools::Itertools;
use rand::prelude::*;
use rayon::prelude::*;

use super::{
    adjacency_list_graph::AdjacencyListGraph,
    path::{EdgePath, ShortestPathTestCase},
    Graph, GraphError, VertexId, Weight, WeightedEdge,
};
use crate::search::dijkstra::single_source;

/// Builds a random graph: every unordered vertex pair gets an edge with
/// probability `edge_probability`, weighted uniformly from `1..=maximum_weight`.
pub fn random_graph(
    number_of_vertices: u32,
    edge_probability: f64,
    maximum_weight: Weight,
) -> Result<AdjacencyListGraph, GraphError> {
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(GraphError::InvalidArgument(
            "edge probability must lie in [0, 1]".to_string(),
        ));
    }
    if maximum_weight == 0 {
        return Err(GraphError::InvalidArgument(
            "maximum weight must be positive".to_string(),
        ));
    }

    let mut graph = AdjacencyListGraph::new(number_of_vertices)?;
    let mut rng = thread_rng();

    for (tail, head) in (0..number_of_vertices).tuple_combinations() {
        if rng.gen_bool(edge_probability) {
            graph.add_edge(tail, head, rng.gen_range(1..=maximum_weight))?;
        }
    }

    Ok(graph)
}

/// All undirected edges, each listed once with `tail < head`.
pub fn all_edges(graph: &dyn Graph) -> Vec<WeightedEdge> {
    (0..graph.number_of_vertices())
        .flat_map(|vertex| graph.edges(vertex))
        .filter(|edge| edge.tail < edge.head)
        .collect()
}

/// Total weight of a path, taking the cheapest parallel edge where
/// multi-edges exist. `None` if some edge is not in the graph.
pub fn path_weight(graph: &dyn Graph, path: &EdgePath) -> Option<Weight> {
    path.edges
        .iter()
        .map(|edge| {
            graph
                .edges(edge.tail)
                .filter(|candidate| candidate.head == edge.head)
                .map(|candidate| candidate.weight)
                .min()
        })
        .sum()
}

/// Checks that a shortest-path result matches a test case. Returns a
/// description of the first violation found.
pub fn validate_path(
    graph: &dyn Graph,
    test_case: &ShortestPathTestCase,
    path: &EdgePath,
) -> Result<(), String> {
    let Some(expected_distance) = test_case.distance else {
        if !path.is_empty() {
            return Err("a path was found where there should be none".to_string());
        }
        return Ok(());
    };

    if test_case.source == test_case.target {
        if !path.is_empty() {
            return Err("zero-length path should have no edges".to_string());
        }
        if expected_distance != 0 {
            return Err("zero-length path should have distance 0".to_string());
        }
        return Ok(());
    }

    if path.is_empty() {
        return Err("no path was found but there should be one".to_string());
    }

    // Ensure first and last edge touch source and target of the test case.
    if let Some(first_edge) = path.edges.first() {
        if first_edge.tail != test_case.source {
            return Err("first edge of path does not start at the source".to_string());
        }
    }
    if let Some(last_edge) = path.edges.last() {
        if last_edge.head != test_case.target {
            return Err("last edge of path does not end at the target".to_string());
        }
    }

    // Consecutive edges must chain head-to-tail.
    for (edge, next_edge) in path.edges.iter().tuple_windows() {
        if edge.head != next_edge.tail {
            return Err(format!(
                "edge ({}, {}) is not followed by an edge leaving {}",
                edge.tail, edge.head, edge.head
            ));
        }
    }

    // Check that every edge exists and the total weight is correct.
    let Some(weight) = path_weight(graph, path) else {
        return Err("path uses an edge that is not in the graph".to_string());
    };
    if weight != expected_distance {
        return Err("wrong path weight".to_string());
    }

    Ok(())
}

/// Checks that `tree` is a spanning tree of the component reachable from
/// vertex 0: real edges, no cycles, exactly the root's component covered.
pub fn validate_spanning_tree(graph: &dyn Graph, tree: &EdgePath) -> Result<(), String> {
    for edge in &tree.edges {
        if !graph
            .edges(edge.tail)
            .any(|candidate| candidate.head == edge.head)
        {
            return Err(format!(
                "no edge between {} and {} found",
                edge.tail, edge.head
            ));
        }
    }

    // Union-find over the tree edges; a repeated root means a cycle.
    let mut parent: Vec<VertexId> = (0..graph.number_of_vertices()).collect();
    for edge in &tree.edges {
        let root_tail = find(&mut parent, edge.tail);
        let root_head = find(&mut parent, edge.head);
        if root_tail == root_head {
            return Err(format!(
                "edge ({}, {}) closes a cycle",
                edge.tail, edge.head
            ));
        }
        parent[root_head as usize] = root_tail;
    }

    let component = connected_component(graph, 0);
    let mut tree_vertices = HashSet::new();
    tree_vertices.insert(0);
    for edge in &tree.edges {
        tree_vertices.insert(edge.tail);
        tree_vertices.insert(edge.head);
    }
    if tree_vertices != component {
        return Err("tree does not cover the root's connected component".to_string());
    }
    if tree.edges.len() + 1 != component.len() {
        return Err("tree has the wrong number of edges".to_string());
    }

    Ok(())
}

fn find(parent: &mut [VertexId], vertex: VertexId) -> VertexId {
    if parent[vertex as usize] != vertex {
        parent[vertex as usize] = find(parent, parent[vertex as usize]);
    }
    parent[vertex as usize]
}

/// Vertices reachable from `source`, including `source` itself.
pub fn connected_component(graph: &dyn Graph, source: VertexId) -> HashSet<VertexId> {
    let mut component = HashSet::new();
    let mut stack = vec![source];
    component.insert(source);

    while let Some(vertex) = stack.pop() {
        for edge in graph.edges(vertex) {
            if component.insert(edge.head) {
                stack.push(edge.head);
            }
        }
    }

    component
}

/// Exhaustive search over all simple paths. Only usable on small graphs;
/// serves as a cross-check oracle for Dijkstra.
pub fn brute_force_distance(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Option<Weight> {
    let mut visited = vec![false; graph.number_of_vertices() as usize];
    visited[source as usize] = true;
    brute_force_visit(graph, source, target, 0, &mut visited)
}

fn brute_force_visit(
    graph: &dyn Graph,
    current: VertexId,
    target: VertexId,
    distance_so_far: Weight,
    visited: &mut Vec<bool>,
) -> Option<Weight> {
    if current == target {
        return Some(distance_so_far);
    }

    let mut best = None;
    for edge in graph.edges(current) {
        if visited[edge.head as usize] {
            continue;
        }
        visited[edge.head as usize] = true;
        if let Some(distance) =
            brute_force_visit(graph, edge.head, target, distance_so_far + edge.weight, visited)
        {
            best = Some(best.map_or(distance, |best: Weight| best.min(distance)));
        }
        visited[edge.head as usize] = false;
    }

    best
}

/// Random `(source, target)` pairs with the Dijkstra-computed distance, for
/// validating other implementations against. Empty if the graph has fewer
/// than two vertices.
pub fn generate_random_pair_test_cases(
    graph: &dyn Graph,
    number_of_testcases: u32,
) -> Vec<ShortestPathTestCase> {
    if graph.number_of_vertices() <= 1 {
        return Vec::new();
    }

    (0..number_of_testcases)
        .progress()
        .par_bridge()
        .map_init(
            rand::thread_rng, // get the thread-local RNG
            |rng, _| {
                // guarantee that source != target
                let source = rng.gen_range(0..graph.number_of_vertices());
                let mut target = rng.gen_range(0..graph.number_of_vertices() - 1);
                if target >= source {
                    target += 1;
                }

                let data = single_source(graph, source);
                ShortestPathTestCase {
                    source,
                    target,
                    distance: data.distance(target),
                }
            },
        )
        .collect()
}
