//! Winding Homotopy: topology-aware planning on top of the generic drivers.
//!
//! An [`AugmentedNode`] pairs a roadmap vertex with the invariant of the
//! route that reached it. Because the invariant is part of state equality,
//! the drivers in `winding_search` explore each topological class
//! separately, and a [`HomotopyGoal`] can ask for a route in a specific one.
//!
//! # Crate dependency graph
//!
//! ```text
//! winding_kernel  ←  winding_search  ←  winding_homotopy
//! ```

#![forbid(unsafe_code)]

pub mod augmented;
pub mod goal;
pub mod planner;

pub use augmented::{AugmentedNode, EdgeRef, ExpansionMode};
pub use goal::{HomotopyGoal, MaskedGoal, SignatureGoal};
pub use planner::{
    class_table, classes_at, enumerate_classes, euclidean_heuristic, plan, Heuristic,
    HomotopyPath,
};
