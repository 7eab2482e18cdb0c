//! Best-first frontier.
//!
//! Holds ordering keys only; nodes live in the search arena. The
//! orientation is fixed when the frontier is built.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::FrontierKey;
use crate::policy::HeapOrder;

/// Priority frontier over arena indices.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` and a
/// [`HeapOrder::Max`] frontier negates priorities on the way in. Tie-breaks
/// (shallower, then older) are the same for both orientations.
#[derive(Debug)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    order: HeapOrder,
    high_water: u64,
}

impl BestFirstFrontier {
    #[must_use]
    pub fn new(order: HeapOrder) -> Self {
        Self {
            heap: BinaryHeap::new(),
            order,
            high_water: 0,
        }
    }

    pub fn push(&mut self, priority: f64, depth: u32, node_id: usize) {
        let priority = match self.order {
            HeapOrder::Min => priority,
            HeapOrder::Max => -priority,
        };
        self.heap.push(Reverse(FrontierKey {
            priority,
            depth,
            node_id,
        }));
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the next arena index in frontier order.
    #[must_use]
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(key)| key.node_id)
    }

    #[must_use]
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new(HeapOrder::Min)
    }
}
