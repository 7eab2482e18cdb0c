//! Search states (arena nodes) and the frontier ordering key.

use std::cmp::Ordering;

/// One search state: a domain state plus the bookkeeping the drivers need.
///
/// Nodes live in a [`crate::tree::SearchTree`] arena; `node_id` is the arena
/// index and `parent_id` an index into the same arena.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Arena index, assigned in creation order (root = 0).
    pub node_id: usize,
    /// Parent arena index (`None` for the root).
    pub parent_id: Option<usize>,
    /// Position of the producing transition in the parent's successor list.
    pub transition_index: Option<usize>,
    /// The domain state.
    pub state: S,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Accumulated real cost from the root.
    pub g_cost: f64,
    /// Heuristic estimate to the goal (0 for Dijkstra and enumeration).
    pub h_cost: f64,
    /// Cost of the transition that produced this node (0 for the root).
    pub step_cost: f64,
    /// Order in which the node was expanded, if it was.
    pub expansion_order: Option<u64>,
}

impl<S> SearchNode<S> {
    /// `f_cost = g_cost + h_cost`, the frontier priority.
    #[must_use]
    pub fn f_cost(&self) -> f64 {
        self.g_cost + self.h_cost
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// The frontier ordering key: `(priority, depth, node_id)`.
///
/// Lower priority first, then shallower depth, then older node. Priorities
/// compare with `f64::total_cmp`, so the order is total even for NaN.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub priority: f64,
    pub depth: u32,
    pub node_id: usize,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.depth.cmp(&other.depth))
            .then(self.node_id.cmp(&other.node_id))
    }
}
