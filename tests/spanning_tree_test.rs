use rand::prelude::*;
use span_paths::{
    graphs::{
        adjacency_list_graph::AdjacencyListGraph,
        graph_functions::{all_edges, path_weight, random_graph, validate_spanning_tree},
        Edge, Graph, GraphError, VertexId, WeightedEdge,
    },
    search::prim::minimum_spanning_tree,
};

fn get_small_graph() -> AdjacencyListGraph {
    let mut graph = AdjacencyListGraph::new(4).unwrap();
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(1, 2, 2).unwrap();
    graph.add_edge(0, 2, 4).unwrap();
    graph.add_edge(2, 3, 1).unwrap();
    graph
}

/// Connected random graph: random edges plus a chain so every vertex is
/// reachable.
fn get_connected_random_graph(number_of_vertices: u32) -> AdjacencyListGraph {
    let mut graph = random_graph(number_of_vertices, 0.3, 10).unwrap();
    let mut rng = thread_rng();
    for vertex in 0..number_of_vertices - 1 {
        graph
            .add_edge(vertex, vertex + 1, rng.gen_range(1..=10))
            .unwrap();
    }
    graph
}

/// Kruskal as an independent oracle for the total tree weight.
fn kruskal_total_weight(graph: &dyn Graph) -> u32 {
    fn find(parent: &mut [VertexId], vertex: VertexId) -> VertexId {
        if parent[vertex as usize] != vertex {
            parent[vertex as usize] = find(parent, parent[vertex as usize]);
        }
        parent[vertex as usize]
    }

    let mut edges = all_edges(graph);
    edges.sort_unstable_by_key(|edge| edge.weight);

    let mut parent: Vec<VertexId> = (0..graph.number_of_vertices()).collect();
    let mut total_weight = 0;
    for WeightedEdge { tail, head, weight } in edges {
        let root_tail = find(&mut parent, tail);
        let root_head = find(&mut parent, head);
        if root_tail != root_head {
            parent[root_head as usize] = root_tail;
            total_weight += weight;
        }
    }

    total_weight
}

#[test]
fn spanning_tree_of_small_graph_has_minimum_weight() {
    let graph = get_small_graph();

    let tree = minimum_spanning_tree(&graph).unwrap();
    assert_eq!(
        tree.edges,
        vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]
    );
    assert_eq!(path_weight(&graph, &tree), Some(4));
    validate_spanning_tree(&graph, &tree).unwrap();
}

#[test]
fn connected_graph_gives_a_full_spanning_tree() {
    for _ in 0..10 {
        let graph = get_connected_random_graph(12);

        let tree = minimum_spanning_tree(&graph).unwrap();
        assert_eq!(tree.number_of_edges(), 11);
        validate_spanning_tree(&graph, &tree).unwrap();
    }
}

#[test]
fn tree_weight_matches_kruskal_on_random_graphs() {
    for _ in 0..10 {
        let graph = get_connected_random_graph(10);

        let tree = minimum_spanning_tree(&graph).unwrap();
        assert_eq!(path_weight(&graph, &tree), Some(kruskal_total_weight(&graph)));
    }
}

#[test]
fn disconnected_graph_gives_a_forest_of_the_root_component() {
    let mut graph = AdjacencyListGraph::new(6).unwrap();
    graph.add_edge(0, 1, 2).unwrap();
    graph.add_edge(1, 2, 3).unwrap();
    graph.add_edge(3, 4, 1).unwrap();
    graph.add_edge(4, 5, 2).unwrap();

    let tree = minimum_spanning_tree(&graph).unwrap();
    assert_eq!(tree.number_of_edges(), 2);

    let mut tree_vertices: Vec<VertexId> = tree
        .edges
        .iter()
        .flat_map(|edge| [edge.tail, edge.head])
        .collect();
    tree_vertices.sort_unstable();
    tree_vertices.dedup();
    assert_eq!(tree_vertices, vec![0, 1, 2]);

    validate_spanning_tree(&graph, &tree).unwrap();
}

#[test]
fn single_vertex_graph_gives_an_empty_tree() {
    let graph = AdjacencyListGraph::new(1).unwrap();

    let tree = minimum_spanning_tree(&graph).unwrap();
    assert!(tree.is_empty());
    validate_spanning_tree(&graph, &tree).unwrap();
}

#[test]
fn graph_without_vertices_is_rejected() {
    struct EmptyGraph;

    impl Graph for EmptyGraph {
        fn number_of_vertices(&self) -> u32 {
            0
        }

        fn edges(
            &self,
            _source: VertexId,
        ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
            Box::new(std::iter::empty())
        }
    }

    assert!(matches!(
        minimum_spanning_tree(&EmptyGraph),
        Err(GraphError::InvalidArgument(_))
    ));
}
