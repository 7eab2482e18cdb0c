//! Per-invocation search state arena and path reconstruction.
//!
//! Every search state a driver creates is appended here; parent links are
//! arena indices. The arena is dropped in one piece with its result.

use crate::error::SearchError;
use crate::node::SearchNode;
use crate::path::{Path, PathEdge, PathElement};
use crate::policy::SearchPolicy;

/// Growable arena of [`SearchNode`]s for one driver call.
#[derive(Debug, Clone)]
pub struct SearchTree<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S: Clone> SearchTree<S> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a root node and return its index.
    pub fn push_root(&mut self, state: S, h_cost: f64) -> usize {
        let node_id = self.nodes.len();
        self.nodes.push(SearchNode {
            node_id,
            parent_id: None,
            transition_index: None,
            state,
            depth: 0,
            g_cost: 0.0,
            h_cost,
            step_cost: 0.0,
            expansion_order: None,
        });
        node_id
    }

    /// Append a child of `parent_id` reached by its `transition_index`-th
    /// successor and return the child's index.
    ///
    /// # Errors
    ///
    /// [`SearchError::Bounds`] if `parent_id` is not in the arena.
    pub fn push_child(
        &mut self,
        parent_id: usize,
        transition_index: usize,
        state: S,
        step_cost: f64,
        h_cost: f64,
    ) -> Result<usize, SearchError> {
        let parent = self.get(parent_id)?;
        let depth = parent.depth.saturating_add(1);
        let g_cost = parent.g_cost + step_cost;
        let node_id = self.nodes.len();
        self.nodes.push(SearchNode {
            node_id,
            parent_id: Some(parent_id),
            transition_index: Some(transition_index),
            state,
            depth,
            g_cost,
            h_cost,
            step_cost,
            expansion_order: None,
        });
        Ok(node_id)
    }

    /// # Errors
    ///
    /// [`SearchError::Bounds`] if `node_id` is not in the arena.
    pub fn get(&self, node_id: usize) -> Result<&SearchNode<S>, SearchError> {
        self.nodes.get(node_id).ok_or_else(|| SearchError::Bounds {
            detail: format!("search node {node_id} is not in the arena of {}", self.nodes.len()),
        })
    }

    /// Stamp `node_id` with its expansion number. Drivers pass their
    /// running expansion count.
    ///
    /// # Errors
    ///
    /// [`SearchError::Bounds`] if `node_id` is not in the arena.
    pub fn mark_expanded(&mut self, node_id: usize, order: u64) -> Result<(), SearchError> {
        let arena_len = self.nodes.len();
        let node = self
            .nodes
            .get_mut(node_id)
            .ok_or_else(|| SearchError::Bounds {
                detail: format!("search node {node_id} is not in the arena of {arena_len}"),
            })?;
        node.expansion_order = Some(order);
        Ok(())
    }

    /// Reconstruct the root-to-`node_id` path in the shape `policy` asks
    /// for: nodes only, edges only, or `[n0, e01, n1, ...]` interleaved.
    ///
    /// # Errors
    ///
    /// [`SearchError::Configuration`] when the policy keeps neither nodes
    /// nor edges; [`SearchError::Bounds`] if `node_id` is not in the arena.
    pub fn path(&self, node_id: usize, policy: &SearchPolicy) -> Result<Path<S>, SearchError> {
        policy.validate()?;

        let mut chain = Vec::new();
        let mut cursor = Some(node_id);
        while let Some(id) = cursor {
            let node = self.get(id)?;
            chain.push(node);
            cursor = node.parent_id;
        }
        chain.reverse();

        let mut elements = Vec::with_capacity(chain.len() * 2);
        let mut previous: Option<&SearchNode<S>> = None;
        for node in chain {
            if let (true, Some(parent)) = (policy.keep_edges, previous) {
                elements.push(PathElement::Edge(PathEdge {
                    from: parent.state.clone(),
                    to: node.state.clone(),
                    cost: node.step_cost,
                    transition_index: node.transition_index.unwrap_or_default(),
                }));
            }
            if policy.keep_nodes {
                elements.push(PathElement::Node(node.state.clone()));
            }
            previous = Some(node);
        }
        Ok(Path::from_elements(elements))
    }

    /// All nodes in creation order.
    #[must_use]
    pub fn nodes(&self) -> &[SearchNode<S>] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: Clone> Default for SearchTree<S> {
    fn default() -> Self {
        Self::new()
    }
}
