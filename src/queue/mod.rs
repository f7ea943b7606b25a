use std::cmp::Ordering;

use crate::graphs::{VertexId, Weight};

pub mod heap_queue;

/// Queue entry for Dijkstra, keyed by tentative distance from the source.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DistanceQueueElement {
    pub distance: Weight,
    pub vertex: VertexId,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for DistanceQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that the we flip the ordering on distances.
        // In case of a tie we compare vertices - this step is necessary
        // to make implementations of `PartialEq` and `Ord` consistent.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for DistanceQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DistanceQueueElement {
    pub fn new(distance: Weight, vertex: VertexId) -> DistanceQueueElement {
        DistanceQueueElement { distance, vertex }
    }
}

/// Queue entry for Prim, keyed by the weight of the edge that would attach
/// `vertex` to the tree. `parent` is `None` only for the root sentinel.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct EdgeQueueElement {
    pub weight: Weight,
    pub vertex: VertexId,
    pub parent: Option<VertexId>,
}

impl Ord for EdgeQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.vertex.cmp(&other.vertex))
            .then_with(|| self.parent.cmp(&other.parent))
    }
}

impl PartialOrd for EdgeQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl EdgeQueueElement {
    pub fn new(weight: Weight, vertex: VertexId, parent: Option<VertexId>) -> EdgeQueueElement {
        EdgeQueueElement {
            weight,
            vertex,
            parent,
        }
    }
}
