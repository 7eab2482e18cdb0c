//! Winding Search: generic best-first search over any state type.
//!
//! This crate provides the search layer. It depends only on
//! `winding_kernel` and does NOT depend on `winding_homotopy`.
//!
//! # Crate dependency graph
//!
//! ```text
//! winding_kernel  ←  winding_search  ←  winding_homotopy
//! (graph, invariants)  (arena, drivers)    (augmented nodes, goals)
//! ```
//!
//! # Key types
//!
//! - [`State`]: the one-capability protocol every searchable state implements
//! - [`SearchTree`]: per-call arena of search states with path reconstruction
//! - [`astar`], [`dijkstra`], [`enumerate_within_budget`]: the drivers
//! - [`SearchPolicy`]: frontier orientation, path shape and expansion cap
//! - [`SearchReportV1`]: canonical, digestible summary of a search call

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod path;
pub mod policy;
pub mod report;
pub mod search;
pub mod tree;
pub mod vertex;

pub use contract::{AcceptAll, GoalPredicate, State, Transition};
pub use error::SearchError;
pub use frontier::BestFirstFrontier;
pub use node::{FrontierKey, SearchNode};
pub use path::{Path, PathEdge, PathElement};
pub use policy::{HeapOrder, SearchPolicy};
pub use report::SearchReportV1;
pub use search::{
    astar, dijkstra, dijkstra_within_budget, enumerate_within_budget, DijkstraTable,
    SearchResult, SearchStats, Termination,
};
pub use tree::SearchTree;
pub use vertex::VertexState;
