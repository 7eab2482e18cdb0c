//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Driver configuration.
///
/// Every field has a default, so a policy can be loaded from a partial JSON
/// object. Call [`SearchPolicy::validate`] (the drivers do) before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Frontier orientation.
    pub heap_order: HeapOrder,
    /// Include search states in reconstructed paths.
    pub keep_nodes: bool,
    /// Include transitions in reconstructed paths.
    pub keep_edges: bool,
    /// Hard cap on node expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] when path reconstruction would
    /// keep neither nodes nor edges.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.keep_nodes && !self.keep_edges {
            return Err(SearchError::Configuration {
                detail: "path reconstruction must keep nodes, edges, or both".into(),
            });
        }
        Ok(())
    }

    /// Refuse [`HeapOrder::Max`] for drivers whose results are only
    /// correct when the cheapest entry is popped first.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] naming `driver`.
    pub fn require_min_order(&self, driver: &str) -> Result<(), SearchError> {
        match self.heap_order {
            HeapOrder::Min => Ok(()),
            HeapOrder::Max => Err(SearchError::Configuration {
                detail: format!("{driver} settles states in cost order and needs a min-ordered frontier"),
            }),
        }
    }

    #[must_use]
    pub fn with_heap_order(mut self, heap_order: HeapOrder) -> Self {
        self.heap_order = heap_order;
        self
    }

    #[must_use]
    pub fn with_path_shape(mut self, keep_nodes: bool, keep_edges: bool) -> Self {
        self.keep_nodes = keep_nodes;
        self.keep_edges = keep_edges;
        self
    }

    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Whether `expansions` already reached the cap.
    #[must_use]
    pub fn budget_exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            heap_order: HeapOrder::Min,
            keep_nodes: true,
            keep_edges: false,
            max_expansions: None,
        }
    }
}

/// Which end of the priority order the frontier pops first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeapOrder {
    /// Lowest priority first (shortest path search).
    #[default]
    Min,
    /// Highest priority first.
    Max,
}
