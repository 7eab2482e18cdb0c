//! Winding Kernel: the read-only roadmap and the topological invariants
//! computed over it.
//!
//! # API Surface
//!
//! - [`graph::Graph`] -- directed, weighted roadmap built once by the caller
//! - [`geometry::FeatureSet`] -- ordered point features with reference rays
//! - [`invariant::Invariant`] -- bounded crossing vector or reduced word
//! - [`invariant::fragment::EdgeFragment`] -- per-edge invariant contribution
//!
//! # Module Dependency Direction
//!
//! `geometry` ← `invariant` ← `graph`
//!
//! One-way only. `graph` stores a precomputed fragment on every edge once a
//! feature set is attached; nothing in this crate mutates during search.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod geometry;
pub mod graph;
pub mod invariant;
