use std::collections::BinaryHeap;

/// Binary-heap min-queue. Relies on the element types' flipped `Ord`.
///
/// Stale entries are never removed eagerly; both solvers push duplicates on
/// relaxation and skip superseded entries on pop.
#[derive(Clone)]
pub struct HeapQueue<T: Ord> {
    queue: BinaryHeap<T>,
}

impl<T: Ord> Default for HeapQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> HeapQueue<T> {
    pub fn new() -> HeapQueue<T> {
        HeapQueue {
            queue: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, element: T) {
        self.queue.push(element)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.queue.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
