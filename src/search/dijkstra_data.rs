use crate::{
    graphs::{path::EdgePath, Edge, VertexId, Weight},
    queue::{heap_queue::HeapQueue, DistanceQueueElement},
};

#[derive(Clone)]
pub struct DijkstraEntry {
    pub predecessor: Option<VertexId>,
    pub distance: Option<Weight>,
    pub is_expanded: bool,
}

impl DijkstraEntry {
    fn new() -> DijkstraEntry {
        DijkstraEntry {
            predecessor: None,
            distance: None,
            is_expanded: false,
        }
    }
}

impl Default for DijkstraEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-solve state of a Dijkstra run: the queue plus one entry per vertex.
///
/// Discarded after each solve; separate solves share no state.
pub struct DijkstraData {
    pub queue: HeapQueue<DistanceQueueElement>,
    pub vertices: Vec<DijkstraEntry>,
}

impl DijkstraData {
    pub fn new(number_of_vertices: usize, source: VertexId) -> DijkstraData {
        let queue = HeapQueue::new();
        let vertices = vec![DijkstraEntry::new(); number_of_vertices];
        let mut data = DijkstraData { queue, vertices };

        data.vertices[source as usize].distance = Some(0);
        data.queue.push(DistanceQueueElement::new(0, source));

        data
    }

    /// Pops the nearest unexpanded vertex, skipping stale queue entries.
    ///
    /// The queue may hold several entries for the same vertex; every entry
    /// after the first expansion is stale and dropped here.
    pub fn pop(&mut self) -> Option<DistanceQueueElement> {
        while let Some(element) = self.queue.pop() {
            if !self.vertices[element.vertex as usize].is_expanded {
                self.vertices[element.vertex as usize].is_expanded = true;
                return Some(element);
            }
        }

        None
    }

    /// Relaxes the edge `(tail, head)`. `tail` must already be expanded.
    pub fn update(&mut self, tail: VertexId, head: VertexId, edge_weight: Weight) {
        let alternative_distance = self.vertices[tail as usize].distance.unwrap() + edge_weight;
        let current_distance = self.vertices[head as usize]
            .distance
            .unwrap_or(Weight::MAX);
        if alternative_distance < current_distance {
            self.vertices[head as usize].predecessor = Some(tail);
            self.vertices[head as usize].distance = Some(alternative_distance);
            self.queue
                .push(DistanceQueueElement::new(alternative_distance, head));
        }
    }

    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.vertices[vertex as usize].distance
    }

    /// Walks predecessors backward from `target` and reverses the collected
    /// edges so the path reads source→target.
    ///
    /// Empty when `target` is the source or was never reached.
    pub fn edge_path(&self, target: VertexId) -> EdgePath {
        let mut edges = Vec::new();
        let mut current = target;
        while let Some(predecessor) = self.vertices[current as usize].predecessor {
            edges.push(Edge::new(predecessor, current));
            current = predecessor;
        }
        edges.reverse();
        EdgePath::new(edges)
    }
}
